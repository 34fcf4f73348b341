//! 静的ファクトリーメソッド
//!
//! コンストラクタの代わりにインスタンスを返す関連関数を提供する：
//! - 名前を持てる（`value_of`, `parse`）
//! - 呼び出しごとに新しいインスタンスを作る必要がない
//! - 戻り値の型を呼び出し側から隠せる

use crate::core::{ConstructionError, ConstructionResult};
use serde::Serialize;
use std::fmt;

/// 真偽値を包む不変オブジェクト
///
/// インスタンスは [`TRUE`] と [`FALSE`] の二つだけ。
/// フィールドが非公開なのでモジュール外からは生成できない。
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Flag(bool);

/// 真を表す唯一のインスタンス
pub static TRUE: Flag = Flag(true);

/// 偽を表す唯一のインスタンス
pub static FALSE: Flag = Flag(false);

impl Flag {
    /// `bool` に対応するキャッシュ済みインスタンスを返す
    pub fn value_of(value: bool) -> &'static Flag {
        if value {
            &TRUE
        } else {
            &FALSE
        }
    }

    /// 文字列からインスタンスを取得（大文字小文字は区別しない）
    pub fn parse(input: &str) -> ConstructionResult<&'static Flag> {
        match input.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(&TRUE),
            "false" => Ok(&FALSE),
            _ => Err(ConstructionError::invalid_argument(
                "flag",
                input,
                "true または false を指定してください",
            )),
        }
    }

    pub fn get(&self) -> bool {
        self.0
    }
}

impl From<bool> for &'static Flag {
    fn from(value: bool) -> Self {
        Flag::value_of(value)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
