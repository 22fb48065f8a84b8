/// JSON file persistence for the registry.
pub mod json;
mod record;

pub use json::{LoadError, SaveError, load, load_or_default, save};
pub use record::EmployeeRecord;
