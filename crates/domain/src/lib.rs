//! # Flatify ドメイン層
//!
//! 賃貸物件（Flat）のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`flat::Flat`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`flat::FlatId`],
//!   [`flat::AddressFull`]）
//! - **ドメインエラー**: バリデーション違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//! 物件データの不変条件（address_full 必須、rooms デフォルト 1）は
//! このクレートで enforce され、ストレージ技術の選択に依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`flat`] - 賃貸物件エンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! use flatify_domain::flat::{AddressFull, Flat, FlatId};
//!
//! let address = AddressFull::new("Turmstraße 33, 10551 Berlin").unwrap();
//! let flat = Flat::new(FlatId::new(), address, None, None, None, None, None);
//! assert_eq!(flat.rooms(), 1); // rooms 未指定時のデフォルト
//! ```

pub mod error;
pub mod flat;

pub use error::DomainError;
