use crate::theme::dialoguer_theme;

use anyhow::{bail, Context, Result};
use dialoguer::Confirm;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Where the generated source is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Picks the destination. An existing file is only replaced when `force`
    /// is set or the user confirms; declining aborts the run.
    pub fn resolve(path: Option<PathBuf>, force: bool) -> Result<Output> {
        Output::resolve_with(path, force, |path| {
            Ok(Confirm::with_theme(&dialoguer_theme())
                .with_prompt(format!("{} already exists. Overwrite?", path.display()))
                .default(false)
                .interact()?)
        })
    }

    fn resolve_with(
        path: Option<PathBuf>,
        force: bool,
        confirm: impl FnOnce(&Path) -> Result<bool>,
    ) -> Result<Output> {
        let Some(path) = path else {
            return Ok(Output::Stdout);
        };

        if path.exists() && !force && !confirm(&path)? {
            bail!("Aborted.");
        }

        Ok(Output::File(path))
    }

    pub fn write(&self, source: &str) -> Result<()> {
        match self {
            Output::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(source.as_bytes())?;
                stdout.flush()?;
            }
            Output::File(path) => {
                fs::write(path, source)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn existing_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn declining_the_overwrite_aborts() {
        let path = existing_file("toasty-autocode-declined-output.rs");

        let err = Output::resolve_with(Some(path), false, |_| Ok(false)).unwrap_err();
        assert_eq!(err.to_string(), "Aborted.");
    }

    #[test]
    fn confirming_the_overwrite_keeps_the_file() {
        let path = existing_file("toasty-autocode-confirmed-output.rs");

        assert_eq!(
            Output::resolve_with(Some(path.clone()), false, |_| Ok(true)).unwrap(),
            Output::File(path)
        );
    }

    #[test]
    fn force_skips_the_prompt() {
        let path = existing_file("toasty-autocode-forced-output.rs");

        assert_eq!(
            Output::resolve_with(Some(path.clone()), true, |_| panic!("prompted")).unwrap(),
            Output::File(path)
        );
    }
}
