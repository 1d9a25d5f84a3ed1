use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use super::ApiError;

/// `Json` body extractor whose rejections use the API error envelope.
///
/// A body that is not JSON, or a field that does not parse into its type
/// (`"release_date": "2021-13-45"`, `"user_id": "abc"`), becomes a 400
/// validation error instead of axum's plain-text response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        user_id: Option<i32>,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_well_formed_body_is_extracted() {
        let ApiJson(payload) = ApiJson::<Payload>::from_request(request(r#"{"user_id": 4}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.user_id, Some(4));
    }

    #[tokio::test]
    async fn test_mistyped_field_is_a_validation_error() {
        let err = ApiJson::<Payload>::from_request(request(r#"{"user_id": "abc"}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ValidationError { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_syntax_error_is_a_validation_error() {
        let err = ApiJson::<Payload>::from_request(request("{\"user_id\": "), &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
