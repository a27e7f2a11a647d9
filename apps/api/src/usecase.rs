//! # ユースケース層
//!
//! ハンドラとリポジトリの間の薄い委譲層。
//! 本システムにドメインロジックはほぼ存在しないため、各ユースケースは
//! バリデーションと 1 回のストレージ呼び出しのみで構成される。

pub mod flat;

pub use flat::{CreateFlatInput, FlatUseCaseImpl, UpdateFlatInput};
