// ABOUTME: Named and anonymous SQL placeholder translation into numbered positional form
// ABOUTME: Rewrites :name and ? placeholders to $1..$N with a matching ordered value list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpsite Contributors

//! # Parameter Translation
//!
//! Statements are written with either `:name` placeholders and a set of named
//! values, or anonymous `?` placeholders and an ordered value list. Both are
//! rewritten into the numbered `$1`, `$2`, ... form before execution.
//!
//! - Named mode assigns one number per distinct name, in order of first
//!   occurrence, and reuses it at every later occurrence.
//! - Positional mode numbers each `?` in order of appearance.
//! - Text inside single-quoted literals, double-quoted identifiers, `--` line
//!   comments and `/* */` block comments is copied verbatim, and `::` casts
//!   are never treated as placeholders.
//! - With no parameters at all the statement is returned untouched.

use chrono::{DateTime, Utc};
use corpsite_core::errors::AppError;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use thiserror::Error;

/// A single bindable value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL `NULL`
    Null,
    /// Boolean (stored as 0/1)
    Bool(bool),
    /// 64-bit integer
    Integer(i64),
    /// Floating point
    Real(f64),
    /// Text
    Text(String),
    /// Binary payload
    Blob(Vec<u8>),
    /// UTC timestamp
    Timestamp(DateTime<Utc>),
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for SqlValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Parameters accompanying a statement
#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryParams {
    /// No parameters
    #[default]
    None,
    /// Values keyed by placeholder name (`:name`)
    Named(BTreeMap<String, SqlValue>),
    /// Values in `?` order
    Positional(Vec<SqlValue>),
}

impl QueryParams {
    /// Start an empty set of named values
    #[must_use]
    pub const fn named() -> Self {
        Self::Named(BTreeMap::new())
    }

    /// Add a named value, turning `None` into a named set
    ///
    /// Has no effect on a positional set; named and positional values are
    /// never mixed in one statement.
    #[must_use]
    pub fn set(self, name: &str, value: impl Into<SqlValue>) -> Self {
        match self {
            Self::None => Self::Named(BTreeMap::from([(name.to_owned(), value.into())])),
            Self::Named(mut map) => {
                map.insert(name.to_owned(), value.into());
                Self::Named(map)
            }
            positional @ Self::Positional(_) => positional,
        }
    }

    /// Append a positional value, turning `None` into a positional list
    ///
    /// Has no effect on a named set.
    #[must_use]
    pub fn push(self, value: impl Into<SqlValue>) -> Self {
        match self {
            Self::None => Self::Positional(vec![value.into()]),
            Self::Positional(mut values) => {
                values.push(value.into());
                Self::Positional(values)
            }
            named @ Self::Named(_) => named,
        }
    }

    /// True when there are no values to bind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Named(map) => map.is_empty(),
            Self::Positional(values) => values.is_empty(),
        }
    }
}

impl From<Vec<SqlValue>> for QueryParams {
    fn from(values: Vec<SqlValue>) -> Self {
        Self::Positional(values)
    }
}

impl From<BTreeMap<String, SqlValue>> for QueryParams {
    fn from(values: BTreeMap<String, SqlValue>) -> Self {
        Self::Named(values)
    }
}

/// Statement rewritten to numbered placeholders with its values in bind order
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedQuery {
    /// Rewritten SQL
    pub sql: String,
    /// Values, index `i` binds to `$(i + 1)`
    pub values: Vec<SqlValue>,
}

/// Failure to line up placeholders with the supplied values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A `:name` placeholder has no value
    #[error("no value supplied for named parameter ':{name}'")]
    MissingNamed {
        /// Placeholder name
        name: String,
    },
    /// The number of `?` marks differs from the number of values
    #[error("statement has {placeholders} positional placeholders but {supplied} values were supplied")]
    PositionalCountMismatch {
        /// `?` marks found in the statement
        placeholders: usize,
        /// Values supplied
        supplied: usize,
    },
}

impl From<ParamError> for AppError {
    fn from(error: ParamError) -> Self {
        Self::internal(format!("Query parameter error: {error}")).with_source(error)
    }
}

/// Rewrite `sql` into numbered placeholders and order `params` to match
///
/// # Errors
///
/// Returns [`ParamError::MissingNamed`] when a named placeholder has no value,
/// or [`ParamError::PositionalCountMismatch`] when the `?` count and value
/// count differ
pub fn translate(sql: &str, params: QueryParams) -> Result<TranslatedQuery, ParamError> {
    if params.is_empty() {
        return Ok(TranslatedQuery {
            sql: sql.to_owned(),
            values: Vec::new(),
        });
    }

    match params {
        QueryParams::Named(values) => translate_named(sql, values),
        QueryParams::Positional(values) => translate_positional(sql, values),
        QueryParams::None => Ok(TranslatedQuery {
            sql: sql.to_owned(),
            values: Vec::new(),
        }),
    }
}

/// Scanner state; quoted text and comments are copied through untouched
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Outside,
    Single,
    Double,
    LineComment,
    BlockOpen,
    BlockComment,
    BlockClose,
}

impl Scan {
    const fn advance(self, c: char, next: Option<char>) -> Self {
        match (self, c, next) {
            (Self::Outside, '\'', _) => Self::Single,
            (Self::Outside, '"', _) => Self::Double,
            (Self::Outside, '-', Some('-')) => Self::LineComment,
            (Self::Outside, '/', Some('*')) => Self::BlockOpen,
            (Self::BlockOpen, _, _) => Self::BlockComment,
            (Self::BlockComment, '*', Some('/')) => Self::BlockClose,
            (Self::Single, '\'', _)
            | (Self::Double, '"', _)
            | (Self::LineComment, '\n', _)
            | (Self::BlockClose, _, _) => Self::Outside,
            (state, _, _) => state,
        }
    }
}

const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn translate_named(
    sql: &str,
    mut supplied: BTreeMap<String, SqlValue>,
) -> Result<TranslatedQuery, ParamError> {
    let mut out = String::with_capacity(sql.len());
    let mut order: Vec<String> = Vec::new();
    let mut values = Vec::new();
    let mut scan = Scan::Outside;
    let mut chars = sql.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if scan != Scan::Outside || c != ':' {
            scan = scan.advance(c, chars.peek().map(|&(_, next)| next));
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some((_, ':')) => {
                chars.next();
                out.push_str("::");
            }
            Some((_, next)) if is_name_start(next) => {
                let name_start = start + 1;
                let mut name_end = name_start;
                while let Some(&(idx, ch)) = chars.peek() {
                    if !is_name_char(ch) {
                        break;
                    }
                    name_end = idx + ch.len_utf8();
                    chars.next();
                }
                let name = &sql[name_start..name_end];

                let index = if let Some(pos) = order.iter().position(|seen| seen == name) {
                    pos + 1
                } else {
                    let value = supplied
                        .remove(name)
                        .ok_or_else(|| ParamError::MissingNamed {
                            name: name.to_owned(),
                        })?;
                    order.push(name.to_owned());
                    values.push(value);
                    order.len()
                };
                // Writing to a String cannot fail
                let _ = write!(out, "${index}");
            }
            _ => out.push(c),
        }
    }

    Ok(TranslatedQuery { sql: out, values })
}

fn translate_positional(sql: &str, values: Vec<SqlValue>) -> Result<TranslatedQuery, ParamError> {
    let mut out = String::with_capacity(sql.len() + values.len());
    let mut scan = Scan::Outside;
    let mut placeholders = 0_usize;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if scan == Scan::Outside && c == '?' {
            placeholders += 1;
            let _ = write!(out, "${placeholders}");
            continue;
        }
        scan = scan.advance(c, chars.peek().copied());
        out.push(c);
    }

    if placeholders != values.len() {
        return Err(ParamError::PositionalCountMismatch {
            placeholders,
            supplied: values.len(),
        });
    }

    Ok(TranslatedQuery { sql: out, values })
}
