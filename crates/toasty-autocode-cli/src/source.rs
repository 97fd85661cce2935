mod json;
pub use json::JsonSource;

mod postgres;
pub use postgres::PostgresSource;
