//! Query-string and path extractors whose rejections use the API error body

use axum::{
    extract::{FromRequestParts, Path as AxumPath, Query as AxumQuery},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Query`.
///
/// A query string that does not deserialize (`?assigned_only=yes`) is a 400
/// with the usual error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

/// Wrapper around `axum::extract::Path`.
///
/// A segment that does not deserialize (`/recipes/abc/`) is a 400 with the
/// usual error body.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

fn rejection_error(status: StatusCode, message: String) -> ApiError {
    if status.is_server_error() {
        return ApiError::internal(message);
    }

    let mut error = ApiError::bad_request(message).with_code("parse_error");
    error.status = status;
    error
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumQuery(value) = AxumQuery::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                rejection_error(
                    rejection.status(),
                    format!("Invalid query string: {}", rejection.body_text()),
                )
            })?;

        Ok(Query(value))
    }
}

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(value) = AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                rejection_error(
                    rejection.status(),
                    format!("Invalid path parameter: {}", rejection.body_text()),
                )
            })?;

        Ok(Path(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::AttributeListQuery;
    use axum::{body::Body, http::Request};

    fn parts(uri: &str) -> Parts {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_query_parses() {
        let mut parts = parts("/tags/?assigned_only=1");

        let Query(query) = Query::<AttributeListQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert!(query.assigned_only());
    }

    #[tokio::test]
    async fn test_query_type_mismatch_is_bad_request() {
        let mut parts = parts("/tags/?assigned_only=yes");

        let err = Query::<AttributeListQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code.as_deref(), Some("parse_error"));
        assert!(err.response.error.message.starts_with("Invalid query string"));
    }

    #[test]
    fn test_server_side_rejection_stays_internal() {
        let err = rejection_error(StatusCode::INTERNAL_SERVER_ERROR, "no params".to_string());

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.response.error.code.is_none());
    }
}
