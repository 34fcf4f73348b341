// ヴァリアントが一つだけの列挙型によるシングルトン
//
// 追加の作業なしにシリアライズでき、二つ目の値は型の上で存在し得ない。

use super::{Performer, FAREWELL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumElvis {
    Instance,
}

impl Performer for EnumElvis {
    fn stage_name(&self) -> &'static str {
        "EnumElvis"
    }

    fn leave_the_building(&self) -> String {
        FAREWELL.to_string()
    }
}
