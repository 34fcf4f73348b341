//! オブジェクト生成パターン集
//!
//! - [`factories`]: コンストラクタの代わりの静的ファクトリーメソッド
//! - [`nutrition`]: 選択パラメータが多い場合のビルダー（比較用の二方式付き）
//! - [`pizza`]: 型の階層に沿った階層的ビルダー
//! - [`singleton`]: インスタンスが一つだけであることの保証

pub mod cli;
pub mod core;
pub mod factories;
pub mod nutrition;
pub mod pizza;
pub mod singleton;

pub use crate::core::{ConstructionError, ConstructionResult, Rejected};
