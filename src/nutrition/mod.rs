// 栄養成分表示 - 選択パラメータが多い場合の三つの生成方法
// builder が推奨。telescoping と beans は比較用。

pub mod beans;
pub mod builder;
pub mod telescoping;

pub use builder::{NutritionFacts, NutritionFactsBuilder};
