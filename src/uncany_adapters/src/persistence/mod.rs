pub mod in_memory_row_store;
pub mod postgres_row_store;
pub mod postgrest_row_store;

use std::sync::LazyLock;

use regex::Regex;
use uncany_core::{RowFilter, RowPatch, RowStoreError};

pub use in_memory_row_store::InMemoryRowStore;
pub use postgres_row_store::{PostgresRowStore, get_postgres_pool};
pub use postgrest_row_store::PostgrestRowStore;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// Checks shared by every row store before an update is sent anywhere.
///
/// Table and column names end up in URLs or SQL text, so only plain
/// identifiers are accepted. An update without conditions is refused.
pub(crate) fn validate_update(
    table: &str,
    patch: &RowPatch,
    filter: &RowFilter,
) -> Result<(), RowStoreError> {
    validate_identifier(table)?;
    for (column, _) in patch.assignments() {
        validate_identifier(column)?;
    }
    for condition in filter.conditions() {
        validate_identifier(condition.column())?;
    }
    if filter.is_empty() {
        return Err(RowStoreError::UnfilteredUpdate(table.to_string()));
    }
    Ok(())
}

fn validate_identifier(name: &str) -> Result<(), RowStoreError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(RowStoreError::InvalidIdentifier(name.to_string()))
    }
}
