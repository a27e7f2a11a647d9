//! # 物件ハンドラ
//!
//! 賃貸物件 CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /flat` - 物件一覧（全件スキャン、挿入順）
//! - `GET /flat/{id}` - 物件取得
//! - `POST /flat` - 物件作成
//! - `PATCH /flat/{id}` - 物件の部分更新（更新後の状態を返す）
//! - `DELETE /flat/{id}` - 物件削除（削除前の内容を返す。対象なしは 204）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flatify_domain::flat::{Flat, FlatId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::ApiError,
    usecase::flat::{CreateFlatInput, FlatUseCaseImpl, UpdateFlatInput},
};

/// 物件 API の共有状態
pub struct FlatState {
    pub usecase: FlatUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 物件作成リクエスト
///
/// `id` フィールドは受け付けない（採番はサーバー側）。
/// `address_full` の欠落はユースケース層でバリデーションエラーになる。
#[derive(Debug, Deserialize)]
pub struct CreateFlatRequest {
    pub address_full: Option<String>,
    pub district:     Option<String>,
    pub area_sqm:     Option<f64>,
    pub rooms:        Option<i32>,
    pub rent:         Option<f64>,
    pub landlord:     Option<String>,
}

/// 物件更新リクエスト（部分更新）
///
/// 含まれないフィールドは変更されない。
#[derive(Debug, Deserialize)]
pub struct UpdateFlatRequest {
    pub address_full: Option<String>,
    pub district:     Option<String>,
    pub area_sqm:     Option<f64>,
    pub rooms:        Option<i32>,
    pub rent:         Option<f64>,
    pub landlord:     Option<String>,
}

/// 物件 DTO
///
/// 未設定の任意フィールドは JSON に出力しない（ドキュメントストア風の
/// レスポンス形状）。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FlatDto {
    pub id:           Uuid,
    pub address_full: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sqm:     Option<f64>,
    pub rooms:        i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent:         Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landlord:     Option<String>,
}

impl From<&Flat> for FlatDto {
    fn from(flat: &Flat) -> Self {
        Self {
            id:           *flat.id().as_uuid(),
            address_full: flat.address_full().as_str().to_string(),
            district:     flat.district().map(ToString::to_string),
            area_sqm:     flat.area_sqm(),
            rooms:        flat.rooms(),
            rent:         flat.rent(),
            landlord:     flat.landlord().map(ToString::to_string),
        }
    }
}

// --- ハンドラ ---

/// GET /flat
///
/// 全物件をフィルタなし・上限なしで取得する。ストレージ障害以外では
/// 失敗しない。
#[tracing::instrument(skip_all)]
pub async fn list_flats(
    State(state): State<Arc<FlatState>>,
) -> Result<impl IntoResponse, ApiError> {
    let flats = state.usecase.list_flats().await?;

    let items: Vec<FlatDto> = flats.iter().map(FlatDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// GET /flat/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 物件
/// - `400 Bad Request`: id が UUID として不正（トランスポート境界で拒否）
/// - `404 Not Found`: id がレコードに解決できない
#[tracing::instrument(skip_all, fields(%flat_id))]
pub async fn get_flat(
    State(state): State<Arc<FlatState>>,
    Path(flat_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let flat = state.usecase.get_flat(&FlatId::from_uuid(flat_id)).await?;

    Ok((StatusCode::OK, Json(FlatDto::from(&flat))))
}

/// POST /flat
///
/// ## レスポンス
///
/// - `201 Created`: 採番済み id を含む作成後の物件
/// - `400 Bad Request`: address_full の欠落・空（何も永続化されない）
#[tracing::instrument(skip_all)]
pub async fn create_flat(
    State(state): State<Arc<FlatState>>,
    Json(req): Json<CreateFlatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateFlatInput {
        address_full: req.address_full,
        district:     req.district,
        area_sqm:     req.area_sqm,
        rooms:        req.rooms,
        rent:         req.rent,
        landlord:     req.landlord,
    };

    let flat = state.usecase.create_flat(input).await?;

    Ok((StatusCode::CREATED, Json(FlatDto::from(&flat))))
}

/// PATCH /flat/{id}
///
/// ## レスポンス
///
/// - `200 OK`: **更新後**の物件（更新前のスナップショットではない）
/// - `400 Bad Request`: address_full を空文字列に変更しようとした
/// - `404 Not Found`: id がレコードに解決できない
#[tracing::instrument(skip_all, fields(%flat_id))]
pub async fn update_flat(
    State(state): State<Arc<FlatState>>,
    Path(flat_id): Path<Uuid>,
    Json(req): Json<UpdateFlatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = UpdateFlatInput {
        flat_id:      FlatId::from_uuid(flat_id),
        address_full: req.address_full,
        district:     req.district,
        area_sqm:     req.area_sqm,
        rooms:        req.rooms,
        rent:         req.rent,
        landlord:     req.landlord,
    };

    let flat = state.usecase.update_flat(input).await?;

    Ok((StatusCode::OK, Json(FlatDto::from(&flat))))
}

/// DELETE /flat/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除前の物件内容
/// - `204 No Content`: 対象が存在しない（Get / Update と異なりエラーに
///   しない。この非対称は維持すべき契約）
#[tracing::instrument(skip_all, fields(%flat_id))]
pub async fn delete_flat(
    State(state): State<Arc<FlatState>>,
    Path(flat_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let deleted = state
        .usecase
        .delete_flat(&FlatId::from_uuid(flat_id))
        .await?;

    match deleted {
        Some(flat) => Ok((StatusCode::OK, Json(FlatDto::from(&flat))).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
