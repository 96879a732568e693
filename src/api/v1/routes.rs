/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - API key が必要な範囲 (protected) を middleware::auth::api_key で囲う
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware;

pub fn routes() -> Router {
    let protected = Router::new().route("/whoami", get(whoami));
    let protected = middleware::auth::api_key::apply(protected);

    Router::new().route("/health", get(health)).merge(protected)
}
