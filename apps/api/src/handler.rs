//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、各 HTTP 動詞 + パスをちょうど 1 回の
//!   ストレージ呼び出しへ対応させる

pub mod flat;
pub mod health;

pub use flat::{FlatState, create_flat, delete_flat, get_flat, list_flats, update_flat};
pub use health::health_check;
