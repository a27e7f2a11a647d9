//! # Flatify API サーバー
//!
//! 賃貸物件（Flat）の CRUD を提供する HTTP API。
//!
//! ## 役割
//!
//! 各リクエストをちょうど 1 回のストレージ操作に変換し、結果（または
//! エラー）を JSON レスポンスとして返す。キャッシュ・認証・ページネーション
//! は持たない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | No | PostgreSQL 接続 URL（デフォルト: `postgres://localhost/flats`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p flatify-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use flatify_api::{app_builder::build_app, config::ApiConfig};
use flatify_infra::{db, repository::PostgresFlatRepository};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
///
/// ストレージ接続はプロセス起動時に一度だけ確立し、全リクエストで
/// 共有する。接続できない場合は起動に失敗する（リトライしない）。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flatify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = ApiConfig::from_env()?;

    tracing::info!(
        "Flatify API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化（DI: グローバル状態は持たない）
    let flat_repository = Arc::new(PostgresFlatRepository::new(pool));
    let app = build_app(flat_repository);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Flatify API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
