//! # API 設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! すべての項目にデフォルト値があり、環境変数が一切設定されていなくても
//! 固定のポート（3000）と固定の接続先（`postgres://localhost/flats`）で
//! 起動する。環境変数は上書き手段として提供する。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | デフォルト |
    /// |--------|-----------|
    /// | `API_HOST` | `0.0.0.0` |
    /// | `API_PORT` | `3000` |
    /// | `DATABASE_URL` | `postgres://localhost/flats` |
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("API_PORT") {
            Ok(val) => val
                .parse()
                .map_err(|_| anyhow::anyhow!("API_PORT は有効なポート番号である必要があります"))?,
            Err(_) => 3000,
        };

        Ok(Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/flats".to_string()),
        })
    }
}
