//! Query parameter types for API handlers.

use bookshelf_core::author_filter::{PARAM_TYPE, PARAM_VALUE};

/// The `?paramType=&paramValue=` pair for the author search endpoint.
///
/// Built from the raw key/value pairs of the query string rather than a
/// derived struct, so a repeated key resolves to its first occurrence
/// instead of failing deserialization. Unrelated keys are ignored. A missing
/// key stays `None` and is reported by `AuthorFilter::parse`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AuthorSearchParams {
    pub param_type: Option<String>,
    pub param_value: Option<String>,
}

impl From<Vec<(String, String)>> for AuthorSearchParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut params = AuthorSearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                PARAM_TYPE => &mut params.param_type,
                PARAM_VALUE => &mut params.param_value,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}
