/*
 * Responsibility
 * - `Authorization: ApiKey <key>` の抽出 (auth) と、それを使う axum の配線
 * - バイナリ (main.rs) は app::run() を呼ぶだけ
 */
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
