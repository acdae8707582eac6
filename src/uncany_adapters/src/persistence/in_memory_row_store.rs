use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uncany_core::{RowFilter, RowFilterCondition, RowPatch, RowStore, RowStoreError};

use super::validate_update;

type Row = Map<String, Value>;

/// Row store holding JSON rows per table in memory.
#[derive(Default, Clone)]
pub struct InMemoryRowStore {
    tables: Arc<RwLock<HashMap<String, Vec<Row>>>>,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Append a row to `table`. Anything but a JSON object is ignored.
    pub async fn insert_row(&self, table: &str, row: Value) {
        let Value::Object(row) = row else {
            tracing::warn!(table, "Ignoring row that is not an object");
            return;
        };
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .push(row);
    }

    /// Rows of `table` in insertion order.
    pub async fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .read()
            .await
            .get(table)
            .map(|rows| rows.iter().cloned().map(Value::Object).collect())
            .unwrap_or_default()
    }
}

fn matches(row: &Row, filter: &RowFilter) -> bool {
    filter.conditions().iter().all(|condition| match condition {
        RowFilterCondition::Eq { column, value } => match row.get(column) {
            Some(Value::String(text)) => text == value,
            Some(Value::Null) | None => false,
            Some(other) => other.to_string() == *value,
        },
        RowFilterCondition::IsNull { column } => {
            row.get(column).is_none_or(Value::is_null)
        }
    })
}

#[async_trait::async_trait]
impl RowStore for InMemoryRowStore {
    async fn update(
        &self,
        table: &str,
        patch: RowPatch,
        filter: RowFilter,
    ) -> Result<(), RowStoreError> {
        validate_update(table, &patch, &filter)?;

        let mut tables = self.tables.write().await;
        let Some(rows) = tables.get_mut(table) else {
            return Ok(());
        };

        for row in rows.iter_mut().filter(|row| matches(row, &filter)) {
            for (column, value) in patch.assignments() {
                row.insert(column.clone(), value.to_json());
            }
        }
        Ok(())
    }
}
