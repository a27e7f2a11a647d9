//! # アプリケーション構築
//!
//! State 注入とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ストレージクライアントはグローバル変数ではなく、ここで State として
//! 明示的に注入される。テストではモックリポジトリを渡す。

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use flatify_infra::repository::FlatRepository;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{FlatState, create_flat, delete_flat, get_flat, health_check, list_flats, update_flat},
    usecase::FlatUseCaseImpl,
};

/// リポジトリを受け取り、ルーターを組み立てる
///
/// すべてのレスポンスに許可的 CORS ヘッダ（任意のオリジン・ヘッダ・
/// メソッド、credentials なし）を付与する。オリジンの許可リストは
/// 持たない。
pub fn build_app(flat_repository: Arc<dyn FlatRepository>) -> Router {
    let usecase = FlatUseCaseImpl::new(flat_repository);
    let state = Arc::new(FlatState { usecase });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/flat", get(list_flats).post(create_flat))
        .route(
            "/flat/{id}",
            get(get_flat).patch(update_flat).delete(delete_flat),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
