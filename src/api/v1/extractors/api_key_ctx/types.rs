/*
 * Responsibility
 * - Handler から見える「API key 付きリクエスト」のコンテキスト型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key の検証 (保存済み key との照合など) はこのクレートの外側の責務
 */
use std::fmt;

use crate::auth::fingerprint;

/// API key を抽出できたリクエストに付与されるコンテキスト
///
/// - `key` は Authorization ヘッダの値から取り出したそのままの文字列
/// - `fingerprint` はログ相関用 (raw key の代わりに出す)
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    pub key: String,
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            fingerprint: fingerprint(key),
        }
    }
}

impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("key", &"<redacted>")
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}
