//! Turns a schema snapshot into model definitions.

mod model;
pub use model::{Field, Index, Model, Relation, RelationKind, UnresolvedReference};

pub(crate) mod names;
use names::NameRegistry;

mod relation;

pub mod ty;
pub use ty::{map_column, RustType, StorageType, TypeExpr};

use crate::{
    serializer::Serializer,
    snapshot::{verify_tables, ForeignKeyDescriptor, TableDescriptor},
    GenerationConfig, Result, SchemaSnapshot, Warning, WarningKind,
};

use indexmap::IndexMap;

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The complete generated source file
    pub source: String,

    /// The models the source declares, in output order
    pub models: Vec<Model>,

    /// Non-fatal conditions, in model order
    pub warnings: Vec<Warning>,
}

/// Generates toasty model source for every table in `snapshot` selected by
/// `config.table_filter`.
///
/// Either the whole source is produced or an error is returned; there is no
/// partial output. The same snapshot and config always produce the same
/// text.
pub fn generate(snapshot: &SchemaSnapshot, config: &GenerationConfig) -> Result<Generated> {
    config.verify()?;

    let tables: Vec<_> = snapshot.filtered(&config.table_filter).collect();
    verify_tables(tables.iter().copied())?;

    let mut gen = Generator::new(config, tables);
    gen.classify_junctions();
    gen.build_models()?;
    gen.infer_relations()?;

    let models = gen.models;
    let source = Serializer::new(config).serialize(&models);
    let warnings = models
        .iter()
        .flat_map(|model| model.warnings.iter().cloned())
        .collect();

    Ok(Generated {
        source,
        models,
        warnings,
    })
}

/// State for one generation run.
struct Generator<'a> {
    config: &'a GenerationConfig,

    /// Selected tables, in snapshot order
    tables: Vec<&'a TableDescriptor>,

    /// Positions in `tables` by table name. Names repeat across schemas.
    by_name: IndexMap<&'a str, Vec<usize>>,

    /// For junction tables, the positions of the two referenced tables
    junctions: Vec<Option<[usize; 2]>>,

    /// Position in `models` for each table; `None` for junction tables
    model_of: Vec<Option<usize>>,

    names: NameRegistry,

    models: Vec<Model>,
}

impl<'a> Generator<'a> {
    fn new(config: &'a GenerationConfig, tables: Vec<&'a TableDescriptor>) -> Generator<'a> {
        let mut by_name = IndexMap::<&str, Vec<usize>>::new();
        for (i, table) in tables.iter().enumerate() {
            by_name.entry(table.name.as_str()).or_default().push(i);
        }

        Generator {
            config,
            junctions: vec![None; tables.len()],
            model_of: vec![None; tables.len()],
            tables,
            by_name,
            names: NameRegistry::new(),
            models: vec![],
        }
    }

    /// Finds the table a foreign key on table `from` points at. The target
    /// must be selected and must have every referenced column.
    fn resolve(&self, from: usize, fk: &ForeignKeyDescriptor) -> Option<usize> {
        let candidates = self.by_name.get(fk.target_table.as_str())?;
        let schema = fk
            .target_schema
            .as_deref()
            .or(self.tables[from].schema.as_deref());

        let target = candidates
            .iter()
            .copied()
            .find(|&i| self.tables[i].schema.as_deref() == schema)
            .or_else(|| match fk.target_schema {
                Some(_) => None,
                None => candidates.first().copied(),
            })?;

        let table = self.tables[target];
        fk.target_columns
            .iter()
            .all(|column| table.column_named(column).is_some())
            .then_some(target)
    }

    fn build_models(&mut self) -> Result<()> {
        for i in 0..self.tables.len() {
            if self.junctions[i].is_some() {
                continue;
            }

            let table = self.tables[i];
            let model = self.build_model(table)?;
            self.model_of[i] = Some(self.models.len());
            self.models.push(model);
        }

        Ok(())
    }

    fn build_model(&mut self, table: &TableDescriptor) -> Result<Model> {
        let id = self.models.len();
        let name = self.names.model(&table.name)?;

        let mut fields = Vec::with_capacity(table.columns.len());
        let mut warnings = vec![];

        // Names are claimed in column order so suffixes follow the table
        // layout, not the output layout.
        for column in &table.columns {
            let ty = map_column(column, self.config.use_generic_types);

            if let Some(native) = &ty.unmapped {
                warnings.push(Warning {
                    table: table.name.clone(),
                    kind: WarningKind::UnmappableType {
                        column: column.name.clone(),
                        native: native.clone(),
                    },
                });
            }

            fields.push(Field {
                name: self.names.field(id, &column.name)?,
                column: column.name.clone(),
                ty,
                nullable: column.nullable,
                key: column.primary_key,
                auto: column.auto_increment,
                default: column.default.clone(),
            });
        }

        let (mut ordered, rest): (Vec<_>, Vec<_>) = fields.into_iter().partition(|field| field.key);
        let composite_key = if ordered.len() > 1 {
            ordered
                .iter_mut()
                .map(|field| {
                    field.key = false;
                    field.name.clone()
                })
                .collect()
        } else {
            vec![]
        };
        ordered.extend(rest);

        let indices = table
            .indexes
            .iter()
            .map(|index| Index {
                name: index.name.clone(),
                fields: index
                    .columns
                    .iter()
                    .filter_map(|column| ordered.iter().find(|field| &field.column == column))
                    .map(|field| field.name.clone())
                    .collect(),
                unique: index.unique,
            })
            .collect();

        Ok(Model {
            name,
            table: table.name.clone(),
            fields: ordered,
            relations: vec![],
            composite_key,
            indices,
            unresolved: vec![],
            warnings,
        })
    }
}
