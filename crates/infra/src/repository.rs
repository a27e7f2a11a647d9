//! # リポジトリ実装
//!
//! flats コレクションへの単一ドキュメント操作を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイトをインフラ層で定義し、API 層はトレイト経由で利用
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod flat_repository;

pub use flat_repository::{FlatRepository, PostgresFlatRepository};
