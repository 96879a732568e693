/*
 * Responsibility
 * - GET /whoami (API key 必須)
 * - middleware が抽出した key の fingerprint を返す。raw key は返さない
 */
use axum::Json;

use crate::api::v1::dto::whoami::WhoAmIResponse;
use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::auth::SCHEME;

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        scheme: SCHEME,
        fingerprint: ctx.fingerprint,
    })
}
