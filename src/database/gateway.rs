// ABOUTME: Single execution path for SQL with named or positional parameters
// ABOUTME: Translates placeholders, binds values, and runs statements against the pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Query Gateway
//!
//! Every statement the server runs passes through these methods. Each call is
//! a single autocommit statement: no retries, no statement caching beyond the
//! driver's own, and no transactions exposed to callers.

use super::params::{translate, QueryParams, SqlValue, TranslatedQuery};
use super::Database;
use corpsite_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, FromRow};
use tracing::{debug, trace};

impl Database {
    /// Run a statement and return its raw rows
    ///
    /// # Errors
    ///
    /// Returns an internal error when placeholders and values do not line up,
    /// or a database error when execution fails
    pub async fn query(&self, sql: &str, params: QueryParams) -> AppResult<Vec<SqliteRow>> {
        let TranslatedQuery { sql, values } = prepare(sql, params)?;
        let rows = sqlx::query_with(&sql, into_arguments(values)?)
            .fetch_all(self.pool())
            .await?;
        trace!(row_count = rows.len(), "SQL returned rows");
        Ok(rows)
    }

    /// Run a statement and decode every row into `T`
    ///
    /// # Errors
    ///
    /// Returns an internal error when placeholders and values do not line up,
    /// or a database error when execution or decoding fails
    pub async fn query_as<T>(&self, sql: &str, params: QueryParams) -> AppResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let TranslatedQuery { sql, values } = prepare(sql, params)?;
        let rows = sqlx::query_as_with::<_, T, _>(&sql, into_arguments(values)?)
            .fetch_all(self.pool())
            .await?;
        trace!(row_count = rows.len(), "SQL returned rows");
        Ok(rows)
    }

    /// Run a statement and decode at most one row into `T`
    ///
    /// # Errors
    ///
    /// Returns an internal error when placeholders and values do not line up,
    /// or a database error when execution or decoding fails
    pub async fn query_optional_as<T>(&self, sql: &str, params: QueryParams) -> AppResult<Option<T>>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let TranslatedQuery { sql, values } = prepare(sql, params)?;
        let row = sqlx::query_as_with::<_, T, _>(&sql, into_arguments(values)?)
            .fetch_optional(self.pool())
            .await?;
        Ok(row)
    }

    /// Run a statement and return the number of rows it affected
    ///
    /// # Errors
    ///
    /// Returns an internal error when placeholders and values do not line up,
    /// or a database error when execution fails
    pub async fn execute(&self, sql: &str, params: QueryParams) -> AppResult<u64> {
        let TranslatedQuery { sql, values } = prepare(sql, params)?;
        let result = sqlx::query_with(&sql, into_arguments(values)?)
            .execute(self.pool())
            .await?;
        trace!(rows_affected = result.rows_affected(), "SQL rows affected");
        Ok(result.rows_affected())
    }
}

fn prepare(sql: &str, params: QueryParams) -> AppResult<TranslatedQuery> {
    let translated = translate(sql, params)?;
    debug!(sql = %translated.sql.trim(), bind_count = translated.values.len(), "executing SQL");
    trace!(bindings = ?translated.values, "SQL bind values");
    Ok(translated)
}

fn into_arguments<'q>(values: Vec<SqlValue>) -> AppResult<SqliteArguments<'q>> {
    let mut arguments = SqliteArguments::default();
    for value in values {
        let added = match value {
            SqlValue::Null => arguments.add(Option::<String>::None),
            SqlValue::Bool(b) => arguments.add(b),
            SqlValue::Integer(n) => arguments.add(n),
            SqlValue::Real(r) => arguments.add(r),
            SqlValue::Text(s) => arguments.add(s),
            SqlValue::Blob(bytes) => arguments.add(bytes),
            SqlValue::Timestamp(t) => arguments.add(t),
        };
        added.map_err(|e| AppError::internal(format!("Failed to bind query value: {e}")))?;
    }
    Ok(arguments)
}
