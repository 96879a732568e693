use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::ApiKeyCtx;

/// Handler で ApiKeyCtx を受け取るための extractor
/// middleware が ApiKeyCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（middleware 未設定の route）
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl<S> FromRequestParts<S> for ApiKeyCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn reads_context_from_extensions() {
        let (mut parts, _) = Request::new(()).into_parts();
        parts.extensions.insert(ApiKeyCtx::new("k"));

        let ApiKeyCtxExtractor(ctx) = ApiKeyCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(ctx.key, "k");
    }

    #[tokio::test]
    async fn missing_context_is_unauthorized() {
        let (mut parts, _) = Request::new(()).into_parts();

        let rejection = ApiKeyCtxExtractor::from_request_parts(&mut parts, &())
            .await
            .err();
        assert_eq!(rejection, Some(StatusCode::UNAUTHORIZED));
    }
}
