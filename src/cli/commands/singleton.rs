use crate::factories::Flag;
use crate::singleton::{encore, roll_call, EnumElvis, LazyElvis, Performer, SerialElvis, ELVIS};
use anyhow::Result;
use std::fmt::Write;

/// 文字列に対応するキャッシュ済み Flag を表示
pub fn execute_flag(value: &str) -> Result<String> {
    let flag = Flag::parse(value)?;
    let cached = std::ptr::eq(flag, Flag::value_of(flag.get()));
    Ok(format!("{flag} (cached instance: {cached})"))
}

/// 各シングルトンを二回取得し、同じインスタンスかどうかを表示
pub fn execute_elvis() -> Result<String> {
    let restored: &'static SerialElvis =
        serde_json::from_str(&serde_json::to_string(SerialElvis::instance())?)?;

    let checks = [
        (ELVIS.stage_name(), std::ptr::eq(&ELVIS, &ELVIS)),
        (
            LazyElvis::instance().stage_name(),
            std::ptr::eq(LazyElvis::instance(), LazyElvis::instance()),
        ),
        (
            SerialElvis::instance().stage_name(),
            std::ptr::eq(restored, SerialElvis::instance()),
        ),
        (
            EnumElvis::Instance.stage_name(),
            serde_json::from_str::<EnumElvis>(&serde_json::to_string(&EnumElvis::Instance)?)?
                == EnumElvis::Instance,
        ),
    ];

    let mut report = String::new();
    for (name, same) in checks {
        writeln!(report, "{name}: single instance = {same}")?;
    }
    for performer in roll_call() {
        writeln!(report, "{}", encore(performer))?;
    }
    Ok(report)
}
