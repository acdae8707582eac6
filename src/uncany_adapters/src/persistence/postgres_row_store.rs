use sqlx::{PgPool, Postgres, QueryBuilder, postgres::PgPoolOptions};
use uncany_core::{PatchValue, RowFilter, RowFilterCondition, RowPatch, RowStore, RowStoreError};

use super::validate_update;

/// Row store writing straight to PostgreSQL.
pub struct PostgresRowStore {
    pool: PgPool,
}

impl PostgresRowStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresRowStore { pool }
    }
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Build `UPDATE "table" SET ... WHERE ...` with every value bound.
///
/// Identifiers must have been validated; they are quoted, never bound.
/// Filter columns are compared as text so ids work for uuid and text keys.
fn build_update(table: &str, patch: RowPatch, filter: &RowFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("UPDATE \"{table}\" SET "));

    for (index, (column, value)) in patch.assignments().iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        builder.push(format!("\"{column}\" = "));
        match value {
            PatchValue::Text(text) => {
                builder.push_bind(text.clone());
            }
            PatchValue::Timestamp(at) => {
                builder.push_bind(*at);
            }
            // An untyped literal, a bound NULL would be typed as text
            PatchValue::Null => {
                builder.push("NULL");
            }
        }
    }

    builder.push(" WHERE ");
    for (index, condition) in filter.conditions().iter().enumerate() {
        if index > 0 {
            builder.push(" AND ");
        }
        match condition {
            RowFilterCondition::Eq { column, value } => {
                builder.push(format!("\"{column}\"::text = "));
                builder.push_bind(value.clone());
            }
            RowFilterCondition::IsNull { column } => {
                builder.push(format!("\"{column}\" IS NULL"));
            }
        }
    }

    builder
}

#[async_trait::async_trait]
impl RowStore for PostgresRowStore {
    #[tracing::instrument(name = "Updating rows in PostgreSQL", skip(self, patch, filter))]
    async fn update(
        &self,
        table: &str,
        patch: RowPatch,
        filter: RowFilter,
    ) -> Result<(), RowStoreError> {
        validate_update(table, &patch, &filter)?;
        if patch.is_empty() {
            return Ok(());
        }

        let mut query = build_update(table, patch, &filter);
        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| RowStoreError::Unexpected(e.to_string()))?;

        tracing::debug!(rows = result.rows_affected(), "Rows updated");
        Ok(())
    }
}
