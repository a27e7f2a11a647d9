//! # FlatRepository
//!
//! 物件の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **単一ドキュメント操作のみ**: 全操作が 1 レコード（または全件スキャン）で
//!   完結し、複数レコードにまたがるトランザクションは存在しない。一貫性は
//!   1 文の SQL のアトミシティに委譲する
//! - **find-and-update / find-and-delete**: 部分更新は `COALESCE` と
//!   `RETURNING` を組み合わせた 1 文で実行し、更新後の状態を返す。削除は
//!   `RETURNING` で削除前の状態を返す

use async_trait::async_trait;
use flatify_domain::flat::{AddressFull, Flat, FlatId, FlatPatch};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// 物件リポジトリトレイト
///
/// flats コレクションに対する find-all / find-by-id / create /
/// find-and-update / find-and-delete を定義する。
#[async_trait]
pub trait FlatRepository: Send + Sync {
    /// 全物件を id 順（= 挿入順）で取得する
    async fn find_all(&self) -> Result<Vec<Flat>, InfraError>;

    /// ID で物件を検索する
    async fn find_by_id(&self, id: &FlatId) -> Result<Option<Flat>, InfraError>;

    /// 物件を挿入する
    async fn insert(&self, flat: &Flat) -> Result<(), InfraError>;

    /// 物件を部分更新し、更新後の状態を返す
    ///
    /// パッチに含まれないフィールドは変更しない。
    /// 対象が存在しない場合は `Ok(None)`。
    async fn update(&self, id: &FlatId, patch: &FlatPatch) -> Result<Option<Flat>, InfraError>;

    /// 物件を削除し、削除前の状態を返す
    ///
    /// 対象が存在しない場合は `Ok(None)`（エラーにはしない）。
    async fn delete(&self, id: &FlatId) -> Result<Option<Flat>, InfraError>;
}

/// PostgreSQL 実装の FlatRepository
#[derive(Debug, Clone)]
pub struct PostgresFlatRepository {
    pool: PgPool,
}

impl PostgresFlatRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// flats テーブルの行表現
#[derive(sqlx::FromRow)]
struct FlatRow {
    id:           Uuid,
    address_full: String,
    district:     Option<String>,
    area_sqm:     Option<f64>,
    rooms:        i32,
    rent:         Option<f64>,
    landlord:     Option<String>,
}

impl FlatRow {
    fn into_domain(self) -> Flat {
        // DB の NOT NULL / CHECK 制約により address_full は常に有効
        let address_full =
            AddressFull::new(self.address_full).expect("DB に格納された address_full は常に有効");
        Flat::from_db(
            FlatId::from_uuid(self.id),
            address_full,
            self.district,
            self.area_sqm,
            self.rooms,
            self.rent,
            self.landlord,
        )
    }
}

const FLAT_COLUMNS: &str = "id, address_full, district, area_sqm, rooms, rent, landlord";

#[async_trait]
impl FlatRepository for PostgresFlatRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Flat>, InfraError> {
        let rows: Vec<FlatRow> = sqlx::query_as(&format!(
            "SELECT {FLAT_COLUMNS} FROM flats ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FlatRow::into_domain).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &FlatId) -> Result<Option<Flat>, InfraError> {
        let row: Option<FlatRow> =
            sqlx::query_as(&format!("SELECT {FLAT_COLUMNS} FROM flats WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(FlatRow::into_domain))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %flat.id()))]
    async fn insert(&self, flat: &Flat) -> Result<(), InfraError> {
        sqlx::query(
            r"
            INSERT INTO flats (id, address_full, district, area_sqm, rooms, rent, landlord)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(flat.id().as_uuid())
        .bind(flat.address_full().as_str())
        .bind(flat.district())
        .bind(flat.area_sqm())
        .bind(flat.rooms())
        .bind(flat.rent())
        .bind(flat.landlord())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id, empty_patch = patch.is_empty()))]
    async fn update(&self, id: &FlatId, patch: &FlatPatch) -> Result<Option<Flat>, InfraError> {
        // COALESCE により NULL（= パッチ未指定）のフィールドは現在値を維持する。
        // RETURNING は更新後の状態を返す。
        let row: Option<FlatRow> = sqlx::query_as(&format!(
            r"
            UPDATE flats
            SET address_full = COALESCE($2, address_full),
                district     = COALESCE($3, district),
                area_sqm     = COALESCE($4, area_sqm),
                rooms        = COALESCE($5, rooms),
                rent         = COALESCE($6, rent),
                landlord     = COALESCE($7, landlord)
            WHERE id = $1
            RETURNING {FLAT_COLUMNS}
            ",
        ))
        .bind(id.as_uuid())
        .bind(patch.address_full.as_ref().map(AddressFull::as_str))
        .bind(patch.district.as_deref())
        .bind(patch.area_sqm)
        .bind(patch.rooms)
        .bind(patch.rent)
        .bind(patch.landlord.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FlatRow::into_domain))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &FlatId) -> Result<Option<Flat>, InfraError> {
        let row: Option<FlatRow> = sqlx::query_as(&format!(
            "DELETE FROM flats WHERE id = $1 RETURNING {FLAT_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FlatRow::into_domain))
    }
}
