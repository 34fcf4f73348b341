//! 静的ファクトリーモジュール
//!
//! コンストラクタを公開せず、名前付きの関連関数でインスタンスを配る。

pub mod static_factory;

pub use static_factory::{Flag, FALSE, TRUE};
