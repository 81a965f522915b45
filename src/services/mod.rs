pub mod catalog;
pub mod recommendations;

pub use catalog::{CatalogSource, JsonFileCatalog};
