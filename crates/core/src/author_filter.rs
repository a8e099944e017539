//! Author search filters.
//!
//! The search endpoint takes a `paramType` / `paramValue` pair. This module
//! turns that pair into a typed [`AuthorFilter`] so the repository layer
//! never sees raw strings it has to re-validate.

use crate::types::DbId;

/// Query parameter naming the filter kind.
pub const PARAM_TYPE: &str = "paramType";

/// Query parameter carrying the filter value.
pub const PARAM_VALUE: &str = "paramValue";

/// A validated author search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorFilter {
    /// Authors with at least one book in the given genre.
    Genre(DbId),
    /// Authors whose nationality equals the value exactly.
    Nationality(String),
    /// Authors whose name contains the value (case-sensitive).
    NameContains(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid genre ID: {0:?}")]
    InvalidGenreId(String),

    #[error("Unsupported paramType: {0:?}")]
    UnsupportedParamType(String),
}

impl AuthorFilter {
    /// Build a filter from the raw query parameters.
    ///
    /// Both parameters must be present before the type is inspected, so an
    /// unknown type with no value reports the missing value first.
    pub fn parse(param_type: Option<&str>, param_value: Option<&str>) -> Result<Self, FilterError> {
        let param_type = param_type.ok_or(FilterError::MissingParameter(PARAM_TYPE))?;
        let param_value = param_value.ok_or(FilterError::MissingParameter(PARAM_VALUE))?;

        match param_type {
            "genre" => param_value
                .parse::<DbId>()
                .map(AuthorFilter::Genre)
                .map_err(|_| FilterError::InvalidGenreId(param_value.to_string())),
            "nationality" => Ok(AuthorFilter::Nationality(param_value.to_string())),
            "name" => Ok(AuthorFilter::NameContains(param_value.to_string())),
            other => Err(FilterError::UnsupportedParamType(other.to_string())),
        }
    }

    /// The `paramType` string this filter was parsed from.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthorFilter::Genre(_) => "genre",
            AuthorFilter::Nationality(_) => "nationality",
            AuthorFilter::NameContains(_) => "name",
        }
    }
}

/// Build a `LIKE` pattern matching `value` anywhere in the column.
///
/// `%`, `_` and the escape character itself are escaped so user input only
/// ever matches literally. The pattern relies on PostgreSQL's default `\`
/// escape character.
pub fn like_contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
