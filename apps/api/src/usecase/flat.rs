//! 物件 CRUD ユースケース

use std::sync::Arc;

use flatify_domain::flat::{AddressFull, Flat, FlatId, FlatPatch};
use flatify_infra::repository::FlatRepository;

use crate::error::ApiError;

/// 物件作成の入力
///
/// `address_full` 以外はすべて任意。`rooms` 未指定時はドメイン層で
/// デフォルトの 1 が適用される。
pub struct CreateFlatInput {
    pub address_full: Option<String>,
    pub district:     Option<String>,
    pub area_sqm:     Option<f64>,
    pub rooms:        Option<i32>,
    pub rent:         Option<f64>,
    pub landlord:     Option<String>,
}

/// 物件更新の入力
///
/// `None` のフィールドは「変更しない」を意味する。
pub struct UpdateFlatInput {
    pub flat_id:      FlatId,
    pub address_full: Option<String>,
    pub district:     Option<String>,
    pub area_sqm:     Option<f64>,
    pub rooms:        Option<i32>,
    pub rent:         Option<f64>,
    pub landlord:     Option<String>,
}

/// 物件 CRUD ユースケース
///
/// 各操作はステートレスな 1 リクエスト = 1 ストレージ呼び出しであり、
/// リトライや冪等性キーは持たない。
pub struct FlatUseCaseImpl {
    flat_repository: Arc<dyn FlatRepository>,
}

impl FlatUseCaseImpl {
    pub fn new(flat_repository: Arc<dyn FlatRepository>) -> Self {
        Self { flat_repository }
    }

    /// 物件一覧を取得する（id 順 = 挿入順）
    pub async fn list_flats(&self) -> Result<Vec<Flat>, ApiError> {
        let flats = self.flat_repository.find_all().await?;
        Ok(flats)
    }

    /// ID で物件を取得する
    ///
    /// 解決できない ID はルックアップエラーとして呼び出し元へ伝播する。
    pub async fn get_flat(&self, flat_id: &FlatId) -> Result<Flat, ApiError> {
        self.flat_repository
            .find_by_id(flat_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(flat_id.to_string()))
    }

    /// 物件を作成する
    ///
    /// 1. address_full バリデーション（欠落・空は 400、何も永続化しない）
    /// 2. ID 採番（UUID v7）と rooms デフォルト適用
    /// 3. 挿入し、採番済み ID を含む作成後レコードを返す
    pub async fn create_flat(&self, input: CreateFlatInput) -> Result<Flat, ApiError> {
        let address_full = AddressFull::new(input.address_full.unwrap_or_default())
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let flat = Flat::new(
            FlatId::new(),
            address_full,
            input.district,
            input.area_sqm,
            input.rooms,
            input.rent,
            input.landlord,
        );

        self.flat_repository.insert(&flat).await?;

        Ok(flat)
    }

    /// 物件を部分更新する
    ///
    /// パッチに含まれるフィールドのみ変更し、**更新後**の状態を返す
    /// （更新前のスナップショットではない）。解決できない ID は
    /// ルックアップエラー。
    pub async fn update_flat(&self, input: UpdateFlatInput) -> Result<Flat, ApiError> {
        let address_full = input
            .address_full
            .map(AddressFull::new)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        let patch = FlatPatch {
            address_full,
            district: input.district,
            area_sqm: input.area_sqm,
            rooms: input.rooms,
            rent: input.rent,
            landlord: input.landlord,
        };

        self.flat_repository
            .update(&input.flat_id, &patch)
            .await?
            .ok_or_else(|| ApiError::NotFound(input.flat_id.to_string()))
    }

    /// 物件を削除する
    ///
    /// 削除した場合は削除前の内容を返す。対象が存在しない場合は
    /// `Ok(None)` — Get / Update と異なりエラーにしない。この非対称は
    /// 意図的に維持している契約である。
    pub async fn delete_flat(&self, flat_id: &FlatId) -> Result<Option<Flat>, ApiError> {
        let deleted = self.flat_repository.delete(flat_id).await?;
        Ok(deleted)
    }
}
