use pretty_assertions::assert_eq;
use toasty_autocode::{
    gen::RelationKind, generate, ColumnDescriptor, ForeignKeyDescriptor, GenerationConfig,
    SchemaSnapshot, TableDescriptor,
};

fn users_and_orders() -> SchemaSnapshot {
    SchemaSnapshot::new(vec![
        TableDescriptor::new("users")
            .column(
                ColumnDescriptor::new("id", "integer")
                    .primary_key()
                    .auto_increment()
                    .default_expr("nextval('users_id_seq'::regclass)"),
            )
            .column(ColumnDescriptor::new("name", "varchar(50)")),
        TableDescriptor::new("orders")
            .column(
                ColumnDescriptor::new("id", "integer")
                    .primary_key()
                    .auto_increment(),
            )
            .column(ColumnDescriptor::new("user_id", "integer"))
            .column(ColumnDescriptor::new("total", "numeric(10,2)"))
            .foreign_key(ForeignKeyDescriptor::single("user_id", "users", "id")),
    ])
}

#[test]
fn native_types_keep_parameters() {
    let generated = generate(&users_and_orders(), &GenerationConfig::default()).unwrap();

    assert_eq!(
        generated.source,
        r#"// Generated by toasty-autocode. Do not edit by hand.

#![allow(dead_code, non_camel_case_types)]

use rust_decimal::Decimal;

#[derive(Debug, toasty::Model)]
#[table = "users"]
pub struct User {
    #[key]
    #[auto]
    #[column(type = integer(4))]
    pub id: i32,

    #[column(type = varchar(50))]
    pub name: String,

    #[has_many(pair = user)]
    pub orders: toasty::HasMany<Order>,
}

#[derive(Debug, toasty::Model)]
#[table = "orders"]
pub struct Order {
    #[key]
    #[auto]
    #[column(type = integer(4))]
    pub id: i32,

    #[column(type = integer(4))]
    pub user_id: i32,

    #[column(type = numeric(10, 2))]
    pub total: Decimal,

    #[belongs_to(key = user_id, references = id)]
    pub user: toasty::BelongsTo<User>,
}
"#
    );
    assert!(generated.warnings.is_empty());
}

#[test]
fn generic_types_drop_parameters() {
    let config = GenerationConfig::new().use_generic_types(true);
    let generated = generate(&users_and_orders(), &config).unwrap();

    assert_eq!(
        generated.source,
        r#"// Generated by toasty-autocode. Do not edit by hand.

#![allow(dead_code, non_camel_case_types)]

use rust_decimal::Decimal;

#[derive(Debug, toasty::Model)]
#[table = "users"]
pub struct User {
    #[key]
    #[auto]
    pub id: i32,

    pub name: String,

    #[has_many(pair = user)]
    pub orders: toasty::HasMany<Order>,
}

#[derive(Debug, toasty::Model)]
#[table = "orders"]
pub struct Order {
    #[key]
    #[auto]
    pub id: i32,

    pub user_id: i32,

    pub total: Decimal,

    #[belongs_to(key = user_id, references = id)]
    pub user: toasty::BelongsTo<User>,
}
"#
    );
}

#[test]
fn models_describe_the_output() {
    let generated = generate(&users_and_orders(), &GenerationConfig::default()).unwrap();

    let names: Vec<_> = generated.models.iter().map(|model| &model.name[..]).collect();
    assert_eq!(names, ["User", "Order"]);

    let order = &generated.models[1];
    assert_eq!(order.table, "orders");
    assert_eq!(order.relations.len(), 1);
    assert_eq!(
        order.relations[0].kind,
        RelationKind::BelongsTo {
            key: vec!["user_id".to_string()],
            references: vec!["id".to_string()],
            optional: false,
        }
    );
}

#[test]
fn nullable_columns_are_optional() {
    let snapshot = SchemaSnapshot::new(vec![TableDescriptor::new("profiles")
        .column(ColumnDescriptor::new("id", "bigint").primary_key())
        .column(ColumnDescriptor::new("bio", "text").nullable())
        .column(ColumnDescriptor::new("born_on", "date").nullable())]);

    let config = GenerationConfig::new().use_generic_types(true);
    let generated = generate(&snapshot, &config).unwrap();

    assert!(generated.source.contains("use jiff::civil::Date;\n"));
    assert!(generated.source.contains("    pub bio: Option<String>,\n"));
    assert!(generated.source.contains("    pub born_on: Option<Date>,\n"));
}

#[test]
fn renamed_columns_keep_their_database_name() {
    let snapshot = SchemaSnapshot::new(vec![TableDescriptor::new("Accounts")
        .column(ColumnDescriptor::new("AccountId", "int4").primary_key())
        .column(ColumnDescriptor::new("type", "text"))
        .column(ColumnDescriptor::new("createdAt", "timestamptz"))]);

    let generated = generate(&snapshot, &GenerationConfig::default()).unwrap();

    assert_eq!(
        generated.source,
        r#"// Generated by toasty-autocode. Do not edit by hand.

#![allow(dead_code, non_camel_case_types)]

use jiff::Timestamp;

#[derive(Debug, toasty::Model)]
#[table = "Accounts"]
pub struct Account {
    #[key]
    #[column("AccountId", type = integer(4))]
    pub account_id: i32,

    #[column("type", type = text)]
    pub type_: String,

    #[column("createdAt", type = "timestamptz")]
    pub created_at: Timestamp,
}
"#
    );
}

#[test]
fn composite_keys_use_the_struct_attribute() {
    let snapshot = SchemaSnapshot::new(vec![TableDescriptor::new("memberships")
        .column(ColumnDescriptor::new("team_id", "integer").primary_key())
        .column(ColumnDescriptor::new("role", "text"))
        .column(ColumnDescriptor::new("user_id", "integer").primary_key())]);

    let config = GenerationConfig::new().use_generic_types(true);
    let generated = generate(&snapshot, &config).unwrap();

    assert_eq!(
        generated.source,
        r#"// Generated by toasty-autocode. Do not edit by hand.

#![allow(dead_code, non_camel_case_types)]

#[derive(Debug, toasty::Model)]
#[table = "memberships"]
#[key(partition = team_id, local = user_id)]
pub struct Membership {
    pub team_id: i32,

    pub user_id: i32,

    pub role: String,
}
"#
    );
}

#[test]
fn defaults_and_unknown_types_become_comments() {
    let snapshot = SchemaSnapshot::new(vec![TableDescriptor::new("users")
        .column(ColumnDescriptor::new("id", "uuid").primary_key())
        .column(ColumnDescriptor::new("email", "citext"))
        .column(ColumnDescriptor::new("active", "boolean").default_expr("true"))]);

    let generated = generate(&snapshot, &GenerationConfig::default()).unwrap();

    assert_eq!(
        generated.source,
        r#"// Generated by toasty-autocode. Do not edit by hand.

#![allow(dead_code, non_camel_case_types)]

use uuid::Uuid;

#[derive(Debug, toasty::Model)]
#[table = "users"]
pub struct User {
    #[key]
    #[column(type = "uuid")]
    pub id: Uuid,

    // unrecognized column type "citext"; mapped to String
    pub email: String,

    // default: true
    #[column(type = boolean)]
    pub active: bool,
}
"#
    );

    assert_eq!(generated.warnings.len(), 1);
    assert!(generated.warnings[0].is_unmappable_type());
    assert_eq!(
        generated.warnings[0].to_string(),
        "table `users`: column `email` has unrecognized type `citext`; mapped to String"
    );
}
