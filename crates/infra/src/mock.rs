//! # テスト用モックリポジトリ
//!
//! ハンドラテストや統合テストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! flatify-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 部分更新のマージは [`Flat::apply`] に委譲しており、PostgreSQL 実装の
//! `COALESCE` と同じ意味論になる。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use flatify_domain::flat::{Flat, FlatId, FlatPatch};

use crate::{error::InfraError, repository::FlatRepository};

/// インメモリ実装の FlatRepository
#[derive(Clone, Default)]
pub struct MockFlatRepository {
    flats: Arc<Mutex<Vec<Flat>>>,
}

impl MockFlatRepository {
    pub fn new() -> Self {
        Self {
            flats: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 初期データ付きで作成する
    pub fn with_flats(flats: Vec<Flat>) -> Self {
        Self {
            flats: Arc::new(Mutex::new(flats)),
        }
    }

    /// 保持している件数を返す
    pub fn len(&self) -> usize {
        self.flats.lock().unwrap().len()
    }

    /// 1 件も保持していないかどうか
    pub fn is_empty(&self) -> bool {
        self.flats.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl FlatRepository for MockFlatRepository {
    async fn find_all(&self) -> Result<Vec<Flat>, InfraError> {
        // 挿入順で返す（PostgreSQL 実装は ORDER BY id、id は UUID v7 の
        // ため挿入順と一致する）
        Ok(self.flats.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &FlatId) -> Result<Option<Flat>, InfraError> {
        Ok(self
            .flats
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id() == id)
            .cloned())
    }

    async fn insert(&self, flat: &Flat) -> Result<(), InfraError> {
        let mut flats = self.flats.lock().unwrap();
        if flats.iter().any(|f| f.id() == flat.id()) {
            return Err(InfraError::unexpected(format!(
                "id が重複しています: {}",
                flat.id()
            )));
        }
        flats.push(flat.clone());
        Ok(())
    }

    async fn update(&self, id: &FlatId, patch: &FlatPatch) -> Result<Option<Flat>, InfraError> {
        let mut flats = self.flats.lock().unwrap();
        let Some(flat) = flats.iter_mut().find(|f| f.id() == id) else {
            return Ok(None);
        };
        flat.apply(patch);
        Ok(Some(flat.clone()))
    }

    async fn delete(&self, id: &FlatId) -> Result<Option<Flat>, InfraError> {
        let mut flats = self.flats.lock().unwrap();
        let Some(pos) = flats.iter().position(|f| f.id() == id) else {
            return Ok(None);
        };
        Ok(Some(flats.remove(pos)))
    }
}
