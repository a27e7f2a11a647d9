//! # 賃貸物件（Flat）
//!
//! Flatify が管理する賃貸物件リスティングのドメインモデル。
//!
//! ## 設計判断
//!
//! ### Newtype パターンの採用
//!
//! `FlatId` は `Uuid` をラップした Newtype である。これにより:
//!
//! - 型安全性: 生の `Uuid` との取り違えをコンパイラが検出
//! - ゼロコスト: 実行時のオーバーヘッドなし
//!
//! ### UUID v7 の採用
//!
//! UUID v7 はタイムスタンプベースの UUID であり、生成順にソート可能。
//! 物件一覧の「挿入順」はこの性質に依存する（別途シーケンス列を持たない）。
//!
//! ### スキーマルールのドメイン層への移動
//!
//! 「address_full 必須」「rooms デフォルト 1」のルールはストレージの
//! スキーマではなくこの層で enforce する。ストレージ技術を差し替えても
//! 契約が維持される。

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// 物件の一意識別子
///
/// ストレージ層ではなく作成ユースケースが採番する（UUID v7）。
/// 作成後は不変であり、PATCH で変更されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct FlatId(Uuid);

impl FlatId {
    /// 新しい物件 ID を生成する
    ///
    /// UUID v7 を使用するため、生成順にソート可能。
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// 既存の UUID から物件 ID を作成する
    ///
    /// データベースから取得した値や、リクエストパスの値を
    /// 型安全な `FlatId` に変換する際に使用する。
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 内部の UUID 参照を取得する
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FlatId {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// AddressFull（所在地住所）
// =========================================================================

/// 物件の所在地住所（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない（前後の空白をトリミングした後）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AddressFull(String);

impl AddressFull {
    /// 住所を作成する
    ///
    /// # バリデーション
    ///
    /// - 前後の空白はトリミング
    /// - 空文字列は拒否
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "address_full は必須です".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

// =========================================================================
// Flat（物件エンティティ）
// =========================================================================

/// 賃貸物件エンティティ
///
/// 親子関係を持たない単独のドキュメントであり、バージョン列や
/// タイムスタンプは持たない。
///
/// # 不変条件
///
/// - `id` はシステム内で一意
/// - `address_full` は非空
#[derive(Debug, Clone, PartialEq)]
pub struct Flat {
    id:           FlatId,
    address_full: AddressFull,
    district:     Option<String>,
    area_sqm:     Option<f64>,
    rooms:        i32,
    rent:         Option<f64>,
    landlord:     Option<String>,
}

impl Flat {
    /// 新しい物件を作成する
    ///
    /// `rooms` を省略した場合はデフォルトの 1 が適用される。
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: FlatId,
        address_full: AddressFull,
        district: Option<String>,
        area_sqm: Option<f64>,
        rooms: Option<i32>,
        rent: Option<f64>,
        landlord: Option<String>,
    ) -> Self {
        Self {
            id,
            address_full,
            district,
            area_sqm,
            rooms: rooms.unwrap_or(1),
            rent,
            landlord,
        }
    }

    /// データベースから物件を復元する
    ///
    /// DB の NOT NULL 制約により `rooms` は常に値を持つため、
    /// デフォルト適用は行わない。
    #[allow(clippy::too_many_arguments)]
    pub fn from_db(
        id: FlatId,
        address_full: AddressFull,
        district: Option<String>,
        area_sqm: Option<f64>,
        rooms: i32,
        rent: Option<f64>,
        landlord: Option<String>,
    ) -> Self {
        Self {
            id,
            address_full,
            district,
            area_sqm,
            rooms,
            rent,
            landlord,
        }
    }

    /// 部分更新を適用する
    ///
    /// パッチに含まれるフィールドのみを上書きし、含まれないフィールドは
    /// 変更しない。`id` はパッチの対象外。
    pub fn apply(&mut self, patch: &FlatPatch) {
        if let Some(address_full) = &patch.address_full {
            self.address_full = address_full.clone();
        }
        if let Some(district) = &patch.district {
            self.district = Some(district.clone());
        }
        if let Some(area_sqm) = patch.area_sqm {
            self.area_sqm = Some(area_sqm);
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
        if let Some(rent) = patch.rent {
            self.rent = Some(rent);
        }
        if let Some(landlord) = &patch.landlord {
            self.landlord = Some(landlord.clone());
        }
    }

    /// 物件 ID を取得する
    pub fn id(&self) -> &FlatId {
        &self.id
    }

    /// 所在地住所を取得する
    pub fn address_full(&self) -> &AddressFull {
        &self.address_full
    }

    /// 地区を取得する
    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// 面積（平方メートル）を取得する
    pub fn area_sqm(&self) -> Option<f64> {
        self.area_sqm
    }

    /// 部屋数を取得する
    pub fn rooms(&self) -> i32 {
        self.rooms
    }

    /// 賃料を取得する
    pub fn rent(&self) -> Option<f64> {
        self.rent
    }

    /// 貸主を取得する
    pub fn landlord(&self) -> Option<&str> {
        self.landlord.as_deref()
    }
}

// =========================================================================
// FlatPatch（部分更新）
// =========================================================================

/// 物件の部分更新パッチ
///
/// `None` のフィールドは「変更しない」を意味する。フィールドを
/// 未設定状態に戻す（unset）操作は存在しない。
///
/// `address_full` は [`AddressFull`] として保持するため、パッチ構築の
/// 時点で非空バリデーション済みであることが型で保証される。
#[derive(Debug, Clone, Default)]
pub struct FlatPatch {
    pub address_full: Option<AddressFull>,
    pub district:     Option<String>,
    pub area_sqm:     Option<f64>,
    pub rooms:        Option<i32>,
    pub rent:         Option<f64>,
    pub landlord:     Option<String>,
}

impl FlatPatch {
    /// すべてのフィールドが `None` かどうか
    ///
    /// 空パッチの更新は全フィールド無変更の post-state を返すため、
    /// 呼び出し側での特別扱いは不要だが、ログ出力の参考情報として使う。
    pub fn is_empty(&self) -> bool {
        self.address_full.is_none()
            && self.district.is_none()
            && self.area_sqm.is_none()
            && self.rooms.is_none()
            && self.rent.is_none()
            && self.landlord.is_none()
    }
}
