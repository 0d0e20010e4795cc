use super::errors::ConfigurationError;
use super::raw::RawTable;
use super::schema::SchemaCatalog;

/// Represents a group of configuration fields that can be resolved from the
/// raw key-value table through the active schema catalog.
pub trait ResolvableSection: Sized {
    /// Resolve the group's fields, substituting fallbacks where the schema
    /// defines them. Returns `Err` when a required key is absent or a value
    /// cannot be interpreted.
    fn resolve(table: &RawTable, schema: &SchemaCatalog) -> Result<Self, ConfigurationError>;
}
