/// Selects tables by name using `*` wildcard patterns.
///
/// An empty filter selects every table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    patterns: Vec<String>,
}

impl TableFilter {
    /// Parses a comma-separated pattern list such as
    /// `account_*,orders,order_items,*_audit`. Blank entries are ignored.
    pub fn parse(src: &str) -> Self {
        Self::from_patterns(src.split(','))
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().trim().to_string())
            .filter(|pattern| !pattern.is_empty())
            .collect();

        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, name: &str) -> bool {
        self.is_empty()
            || self
                .patterns
                .iter()
                .any(|pattern| wildcard_match(pattern, name))
    }
}

/// Matches `name` against `pattern`, where `*` matches any run of characters
/// (including none). Every other character matches itself.
fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position of the last `*` seen and the name position it was tried at
    let mut backtrack = None;

    while n < name.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, n));
            p += 1;
        } else if p < pattern.len() && pattern[p] == name[n] {
            p += 1;
            n += 1;
        } else if let Some((star, matched)) = backtrack {
            p = star + 1;
            n = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TableFilter::parse("");
        assert!(filter.is_empty());
        assert!(filter.matches("users"));
    }

    #[test]
    fn exact_names() {
        let filter = TableFilter::parse("orders, order_items");
        assert_eq!(filter.patterns(), ["orders", "order_items"]);
        assert!(filter.matches("orders"));
        assert!(filter.matches("order_items"));
        assert!(!filter.matches("order"));
        assert!(!filter.matches("users"));
    }

    #[test]
    fn wildcards() {
        let filter = TableFilter::parse("account_*,*_audit,a*b*c");
        assert!(filter.matches("account_"));
        assert!(filter.matches("account_owners"));
        assert!(filter.matches("users_audit"));
        assert!(filter.matches("abbbc"));
        assert!(filter.matches("abxbyc"));
        assert!(!filter.matches("accounts"));
        assert!(!filter.matches("audit_users"));
        assert!(!filter.matches("abcx"));
    }

    #[test]
    fn lone_star_matches_everything() {
        let filter = TableFilter::parse("*");
        assert!(filter.matches(""));
        assert!(filter.matches("anything"));
    }
}
