/*!
 * API key context extractor
 *
 * Responsibility:
 * - API key を抽出済みのリクエストのコンテキスト（ApiKeyCtx）を handler に提供する
 * - axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyCtxExtractor
 */

mod core;
mod types;

pub use self::core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;
