/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: API key 必須化 / http: request id・trace・limit・timeout
 */
pub mod auth;
pub mod http;
