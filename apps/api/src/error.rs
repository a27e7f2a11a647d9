//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ストレージ呼び出しの失敗は例外的な制御フローではなく `Result` として
//! 各呼び出し箇所から返され、この層で決定的にステータスコードへ
//! マッピングされる。ローカルでのリカバリ（リトライ、再接続、部分適用）は
//! 一切行わない。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンス（RFC 7807 Problem Details）
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// ルックアップエラー（識別子がレコードに解決できない）
    #[error("物件が見つかりません: {0}")]
    NotFound(String),

    /// バリデーションエラー（スキーマルール違反）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// ストレージエラー（クエリ失敗・接続断など）
    #[error("データベースエラー: {0}")]
    Database(#[from] flatify_infra::InfraError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, title, detail) = match &self {
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "https://flatify.example.com/errors/not-found",
                "Not Found",
                msg.clone(),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "https://flatify.example.com/errors/bad-request",
                "Bad Request",
                msg.clone(),
            ),
            ApiError::Database(e) => {
                tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "https://flatify.example.com/errors/internal-error",
                    "Internal Server Error",
                    "内部エラーが発生しました".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error_type: error_type.to_string(),
                title: title.to_string(),
                status: status.as_u16(),
                detail,
            }),
        )
            .into_response()
    }
}
