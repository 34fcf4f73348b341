// 公開 static 値によるシングルトン
//
// 非公開フィールドがあるので、モジュール外では `ELVIS` 以外の値を作れない。

use super::{Performer, FAREWELL};

#[derive(Debug)]
pub struct Elvis {
    stage_name: &'static str,
}

/// 唯一のインスタンス
pub static ELVIS: Elvis = Elvis {
    stage_name: "Elvis",
};

impl Performer for Elvis {
    fn stage_name(&self) -> &'static str {
        self.stage_name
    }

    fn leave_the_building(&self) -> String {
        FAREWELL.to_string()
    }
}
