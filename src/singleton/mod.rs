//! シングルトン
//!
//! インスタンスが一つしか存在しない型を四通りの方法で作る：
//! - `field`: 公開 static 値
//! - `factory`: 遅延初期化したインスタンスを返す関連関数
//! - `serial`: デシリアライズしても同じインスタンスに解決される
//! - `enum_instance`: ヴァリアントが一つだけの列挙型
//!
//! シングルトンを直接使うクライアントはテストで差し替えができないため、
//! 振る舞いは [`Performer`] トレイトで抽象化しておく。

pub mod enum_instance;
pub mod factory;
pub mod field;
pub mod serial;

pub use enum_instance::EnumElvis;
pub use factory::LazyElvis;
pub use field::{Elvis, ELVIS};
pub use serial::SerialElvis;

use mockall::automock;

/// シングルトンの振る舞いを抽象化するトレイト
#[automock]
pub trait Performer {
    /// 芸名
    fn stage_name(&self) -> &'static str;

    fn leave_the_building(&self) -> String;
}

/// `Performer` を使うクライアント
pub fn encore(performer: &dyn Performer) -> String {
    format!(
        "{}: {}",
        performer.stage_name(),
        performer.leave_the_building()
    )
}

/// 全ての実装方式のインスタンスを列挙
pub fn roll_call() -> Vec<&'static dyn Performer> {
    let performers: [&'static dyn Performer; 4] = [
        &ELVIS,
        LazyElvis::instance(),
        SerialElvis::instance(),
        &EnumElvis::Instance,
    ];
    performers.to_vec()
}

pub(crate) const FAREWELL: &str = "Whoa baby, I'm outta here!";
