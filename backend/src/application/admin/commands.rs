pub mod list_weddings;
pub mod upsert_template;
pub mod upsert_package;
