//! Sequence endpoint: `GET /foobar?length=<int>`.

use axum::extract::Query;

use crate::error::AppError;
use crate::sequence;

/// Name of the query parameter carrying the requested length.
pub const LENGTH_PARAM: &str = "length";

/// Query pairs in request order. Repeated keys are kept so the first
/// `length` wins.
pub type QueryPairs = Vec<(String, String)>;

/// Extracts and parses the `length` parameter.
///
/// Absent or empty values are a missing parameter; anything that is not a
/// signed decimal integer (optionally prefixed with `+`) is an invalid length.
pub fn parse_length(params: &[(String, String)]) -> Result<i64, AppError> {
    let raw = params
        .iter()
        .find(|(key, _)| key == LENGTH_PARAM)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    if raw.is_empty() {
        return Err(AppError::MissingParameter(LENGTH_PARAM));
    }

    raw.parse::<i64>().map_err(|_| AppError::InvalidLength)
}

/// Responds with the sequence for the requested length as a single text line.
pub async fn get_sequence(Query(params): Query<QueryPairs>) -> Result<String, AppError> {
    let length = parse_length(&params)?;
    let seq = sequence::generate(length)?;
    tracing::debug!(length, tokens = seq.len(), "Computed sequence");
    Ok(seq.to_string())
}
