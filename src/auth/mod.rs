/*
 * Responsibility
 * - API key 抽出まわりの公開インターフェース (re-export)
 * - HTTP フレームワーク依存は middleware / extractors 側に置く
 */
mod api_key;
mod error;
mod fingerprint;
mod headers;

pub use api_key::{HeaderSource, SCHEME, get_api_key, get_api_key_bytes};
pub use error::ApiKeyError;
pub use fingerprint::fingerprint;
pub use headers::Headers;
