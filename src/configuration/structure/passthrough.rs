use crate::configuration::raw::RawTable;
use crate::configuration::schema::SchemaCatalog;


/// Copy the optional pass-through section forwarded verbatim to the
/// execution runtime.
///
/// `None` when the section is absent from the file; `Some` — possibly with
/// an empty list — when it is present. Pair order follows the file.
pub(super) fn resolve_passthrough(
    table: &RawTable,
    schema: &SchemaCatalog,
) -> Option<Vec<(String, String)>> {
    table
        .section(schema.passthrough_section)
        .map(|section| section.entries().to_vec())
}
