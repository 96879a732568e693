/*
 * Responsibility
 * - Authorization ヘッダ抽出の失敗種別 (closed enum)
 * - 呼び出し側は参照比較ではなく kind で match する
 */
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl ApiKeyError {
    /// レスポンス body に載せる安定したエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            ApiKeyError::NoAuthHeaderIncluded => "NO_AUTH_HEADER",
            ApiKeyError::MalformedAuthHeader => "MALFORMED_AUTH_HEADER",
        }
    }
}
