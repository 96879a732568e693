//! ログやレスポンスに載せてよい API key の識別子。
//!
//! raw key は tracing に出さない。代わりに base64url(SHA-256(key)) を使う。

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

pub fn fingerprint(key: &str) -> String {
    let mut h = Sha256::new();
    h.update(key.as_bytes());
    URL_SAFE_NO_PAD.encode(h.finalize())
}
