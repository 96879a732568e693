/*
 * Responsibility
 * - Authorization ヘッダから `ApiKey <key>` 形式の API key を取り出す
 * - 入力は読むだけ (pure)。状態も I/O も持たない
 *
 * Notes
 * - scheme と key の区切りは最初の ' ' (U+0020) のみ。tab / 改行は区切りではない
 * - key はそのまま返す (trim / case-folding / 文字種チェックはしない)
 */
use axum::http::{HeaderMap, HeaderValue, header};

use super::error::ApiKeyError;
use super::headers::Headers;

/// Authorization ヘッダで期待する scheme (case-sensitive)
pub const SCHEME: &str = "ApiKey";

/// 名前で case-insensitive に引ける、multi-value なヘッダ集合
///
/// 同名の値が複数ある場合、最初の 1 つだけを返す。
pub trait HeaderSource {
    fn first_value(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderSource for HeaderMap {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(HeaderValue::as_bytes)
    }
}

impl HeaderSource for Headers {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        self.first(name).map(str::as_bytes)
    }
}

/// Authorization ヘッダの最初の値から API key をバイト列のまま取り出す。
///
/// - ヘッダが無い / 値が空 → `NoAuthHeaderIncluded`
/// - `ApiKey <key>` の形でない (scheme 違い・区切りなし・key が空) → `MalformedAuthHeader`
/// - それ以外は最初の空白以降をそのまま返す。UTF-8 かどうかは見ない
pub fn get_api_key_bytes<H>(headers: &H) -> Result<&[u8], ApiKeyError>
where
    H: HeaderSource + ?Sized,
{
    let raw = match headers.first_value(header::AUTHORIZATION.as_str()) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ApiKeyError::NoAuthHeaderIncluded),
    };

    let sep = raw
        .iter()
        .position(|&b| b == b' ')
        .ok_or(ApiKeyError::MalformedAuthHeader)?;
    let (scheme, key) = (&raw[..sep], &raw[sep + 1..]);

    if scheme != SCHEME.as_bytes() || key.is_empty() {
        return Err(ApiKeyError::MalformedAuthHeader);
    }
    Ok(key)
}

/// Authorization ヘッダの最初の値から API key を文字列として取り出す。
///
/// `get_api_key_bytes` と同じ規則 (`"ApiKey x y"` → `"x y"`)。
/// key が UTF-8 でない場合は `MalformedAuthHeader`。
pub fn get_api_key<H>(headers: &H) -> Result<&str, ApiKeyError>
where
    H: HeaderSource + ?Sized,
{
    let key = get_api_key_bytes(headers)?;
    std::str::from_utf8(key).map_err(|_| ApiKeyError::MalformedAuthHeader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorization(values: &[&str]) -> Headers {
        values.iter().map(|v| ("Authorization", *v)).collect()
    }

    #[test]
    fn extracts_key_after_scheme() {
        let headers = authorization(&["ApiKey test-key-123"]);
        assert_eq!(get_api_key(&headers), Ok("test-key-123"));
    }

    #[test]
    fn missing_or_empty_header_is_not_included() {
        assert_eq!(
            get_api_key(&Headers::new()),
            Err(ApiKeyError::NoAuthHeaderIncluded)
        );
        assert_eq!(
            get_api_key(&authorization(&[""])),
            Err(ApiKeyError::NoAuthHeaderIncluded)
        );
        assert_eq!(
            get_api_key(&HeaderMap::new()),
            Err(ApiKeyError::NoAuthHeaderIncluded)
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        let cases = [
            "WrongKey",
            "invalid-key",
            "ApiKey",
            "ApiKey ",
            "apikey test-key",
            "APIKEY test-key",
            "Bearer test-key",
            " ApiKey test-key",
            "ApiKey\nnewline-key",
            "ApiKey\t\ttab-key",
        ];

        for value in cases {
            assert_eq!(
                get_api_key(&authorization(&[value])),
                Err(ApiKeyError::MalformedAuthHeader),
                "value: {value:?}"
            );
        }
    }

    #[test]
    fn only_first_space_splits() {
        let cases = [
            ("ApiKey x", "x"),
            ("ApiKey x y", "x y"),
            ("ApiKey test key with spaces", "test key with spaces"),
            ("ApiKey    test-key", "   test-key"),
            ("ApiKey  ", " "),
            ("ApiKey trailing ", "trailing "),
        ];

        for (value, want) in cases {
            assert_eq!(get_api_key(&authorization(&[value])), Ok(want), "value: {value:?}");
        }
    }

    #[test]
    fn remainder_is_returned_verbatim() {
        let cases = [
            ("ApiKey !@#$%^&*()", "!@#$%^&*()"),
            ("ApiKey 你好世界", "你好世界"),
            ("ApiKey \t\ttab-key", "\t\ttab-key"),
            ("ApiKey \nnewline-key", "\nnewline-key"),
            ("ApiKey \x00\x01\x02\x03", "\x00\x01\x02\x03"),
            ("ApiKey MiXeD-CaSe", "MiXeD-CaSe"),
        ];

        for (value, want) in cases {
            assert_eq!(get_api_key(&authorization(&[value])), Ok(want), "value: {value:?}");
        }
    }

    #[test]
    fn long_keys_are_not_truncated() {
        for len in [1000, 8192] {
            let key = "\0".repeat(len);
            let value = format!("ApiKey {key}");
            let headers = authorization(&[value.as_str()]);
            assert_eq!(get_api_key(&headers), Ok(key.as_str()));
        }
    }

    #[test]
    fn only_first_value_is_consulted() {
        let headers = authorization(&["ApiKey first-key", "ApiKey second-key"]);
        assert_eq!(get_api_key(&headers), Ok("first-key"));

        let headers = authorization(&["invalid", "ApiKey valid-key"]);
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedAuthHeader));

        let headers = authorization(&["", "ApiKey valid-key"]);
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeaderIncluded));
    }

    #[test]
    fn header_name_lookup_ignores_case() {
        let headers: Headers = [("authorization", "ApiKey test-key")].into_iter().collect();
        assert_eq!(get_api_key(&headers), Ok("test-key"));

        let headers: Headers = [
            ("Authorization", "ApiKey first-key"),
            ("authorization", "ApiKey second-key"),
        ]
        .into_iter()
        .collect();
        assert_eq!(get_api_key(&headers), Ok("first-key"));
    }

    #[test]
    fn works_with_header_map() {
        let mut map = HeaderMap::new();
        map.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first-key"));
        map.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second-key"));
        assert_eq!(get_api_key(&map), Ok("first-key"));

        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes("ApiKey 你好世界".as_bytes()).unwrap(),
        );
        assert_eq!(get_api_key(&map), Ok("你好世界"));
    }

    #[test]
    fn non_utf8_header_value_is_malformed() {
        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xff\xfe").unwrap(),
        );
        assert_eq!(get_api_key(&map), Err(ApiKeyError::MalformedAuthHeader));
        assert_eq!(get_api_key_bytes(&map), Ok(&b"\xff\xfe"[..]));
    }

    #[test]
    fn non_utf8_first_value_does_not_fall_through_to_second() {
        let mut map = HeaderMap::new();
        map.append(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xff").unwrap(),
        );
        map.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second-key"));

        assert_eq!(get_api_key(&map), Err(ApiKeyError::MalformedAuthHeader));
        assert_eq!(get_api_key_bytes(&map), Ok(&b"\xff"[..]));
    }

    #[test]
    fn bytes_variant_follows_the_same_shape_rules() {
        let headers = authorization(&["ApiKey x y"]);
        assert_eq!(get_api_key_bytes(&headers), Ok(&b"x y"[..]));

        for value in ["ApiKey", "ApiKey ", "apikey x", "ApiKey\tx"] {
            assert_eq!(
                get_api_key_bytes(&authorization(&[value])),
                Err(ApiKeyError::MalformedAuthHeader),
                "value: {value:?}"
            );
        }
        assert_eq!(
            get_api_key_bytes(&Headers::new()),
            Err(ApiKeyError::NoAuthHeaderIncluded)
        );
    }

    #[test]
    fn repeated_calls_agree_and_leave_input_untouched() {
        let headers = authorization(&["ApiKey same"]);
        let before = headers.clone();

        assert_eq!(get_api_key(&headers), get_api_key(&headers));
        assert_eq!(headers, before);
    }
}
