//! `Authorization: ApiKey <key>` を抽出 → ApiKeyCtx を extensions に入れる
//!
//! - 抽出に失敗したリクエストは handler に届く前に 401 で落とす
//! - key の照合 (発行済みかどうか) はここではしない。handler 側が ApiKeyCtx を使って行う

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::auth::get_api_key;
use crate::error::AppError;

/// 渡された router の route 全体に API key 必須の middleware を掛ける。
///
/// `route_layer` なので、マッチしないパスは 401 ではなく 404 のまま。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let ctx = match get_api_key(req.headers()) {
        Ok(key) => ApiKeyCtx::new(key),
        Err(err) => {
            tracing::warn!(
                error = %err,
                code = err.code(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(fingerprint = %ctx.fingerprint, "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
