use serde::Serialize;

/// GET /whoami のレスポンス。raw key は載せない
#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
}
