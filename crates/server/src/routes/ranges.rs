use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use zipfold::CodeRange;

/// Query parameters for the query-string form: `?ranges=94133,94133|94200,94299`
#[derive(Debug, Deserialize)]
pub struct RangesQuery {
    /// Pipe-delimited list of comma-separated bound pairs
    #[serde(default)]
    pub ranges: String,
}

/// One range in the structured request body
#[derive(Debug, Deserialize)]
pub struct RangeDto {
    /// Two bounds, in either order
    pub bounds: [String; 2],
}

/// Structured request body for POST
#[derive(Debug, Deserialize)]
pub struct ReduceRequest {
    pub ranges: Vec<RangeDto>,
}

/// Reduce ranges passed as a query parameter.
///
/// # Example
/// ```text
/// GET /api/v1/ranges?ranges=94133,94133|94200,94299|94226,94399
///
/// 200 [["94133","94133"],["94200","94399"]]
/// ```
pub async fn reduce_from_query(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<RangesQuery>,
) -> ServerResult<Json<Vec<CodeRange>>> {
    reduce_delimited(&state, &query.ranges)
}

/// Reduce ranges passed as a path segment.
///
/// Same wire format as the query form, URL-encoded into one segment:
/// `GET /api/v1/ranges/94133,94133%7C94200,94299`.
pub async fn reduce_from_path(
    State(state): State<Arc<ServerState>>,
    Path(ranges): Path<String>,
) -> ServerResult<Json<Vec<CodeRange>>> {
    reduce_delimited(&state, &ranges)
}

/// Reduce ranges passed as a structured JSON body.
///
/// # Example
/// ```json
/// // Request
/// {
///   "ranges": [
///     { "bounds": ["94001", "94134"] },
///     { "bounds": ["94000", "94133"] }
///   ]
/// }
///
/// // Response
/// [["94000", "94134"]]
/// ```
pub async fn reduce_from_body(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<ReduceRequest>, JsonRejection>,
) -> ServerResult<Json<Vec<CodeRange>>> {
    // A body that fails to deserialize (wrong bound count, wrong types,
    // missing keys) answers with the standard envelope, not the extractor's
    // plain-text rejection.
    let Json(request) =
        body.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let pairs: Vec<(String, String)> = request
        .ranges
        .into_iter()
        .map(|range| {
            let [low, high] = range.bounds;
            (low, high)
        })
        .collect();
    run_reduce(&state, &pairs)
}

fn reduce_delimited(state: &ServerState, raw: &str) -> ServerResult<Json<Vec<CodeRange>>> {
    if raw.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "ranges parameter must not be blank".to_string(),
        ));
    }
    let pairs = parse_delimited(raw)?;
    run_reduce(state, &pairs)
}

/// Parses the delimited wire format `"A,B|C,D|..."` into bound pairs. Bound
/// content is not validated here; the reducer sanitizes and validates it.
fn parse_delimited(raw: &str) -> ServerResult<Vec<(String, String)>> {
    raw.split('|')
        .map(|item| {
            let mut bounds = item.split(',');
            match (bounds.next(), bounds.next(), bounds.next()) {
                (Some(low), Some(high), None) => Ok((low.to_string(), high.to_string())),
                _ => Err(ServerError::BadRequest(format!(
                    "range {item:?} must be two comma-separated bounds"
                ))),
            }
        })
        .collect()
}

fn run_reduce(
    state: &ServerState,
    pairs: &[(String, String)],
) -> ServerResult<Json<Vec<CodeRange>>> {
    let reduced = zipfold::reduce(pairs, &state.reduce)?;
    Ok(Json(reduced))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimited_splits_pairs() {
        let pairs = parse_delimited("94133,94133|94200,94299").expect("two pairs parse");
        assert_eq!(
            pairs,
            vec![
                ("94133".to_string(), "94133".to_string()),
                ("94200".to_string(), "94299".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_delimited_single_pair() {
        let pairs = parse_delimited("00000,12345").expect("one pair parses");
        assert_eq!(pairs, vec![("00000".to_string(), "12345".to_string())]);
    }

    #[test]
    fn test_parse_delimited_rejects_missing_comma() {
        let res = parse_delimited("94133|94200,94299");
        assert!(matches!(res, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn test_parse_delimited_rejects_extra_bound() {
        let res = parse_delimited("94133,94200,94299");
        assert!(matches!(res, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn test_parse_delimited_keeps_noise_for_the_reducer() {
        // Sanitization belongs to the reducer, not the wire parser.
        let pairs = parse_delimited(" 94133 ,94-299").expect("noisy pair parses");
        assert_eq!(pairs, vec![(" 94133 ".to_string(), "94-299".to_string())]);
    }
}
