//! # Flatify API ライブラリ
//!
//! 賃貸物件 CRUD API のコアモジュール。
//! 統合テストからルーター構築とハンドラにアクセスできるよう公開する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State 注入とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: API エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: ストレージ呼び出しへの薄い委譲層

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
