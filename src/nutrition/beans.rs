// セッターで組み立てる可変レコード - 一貫性が崩れ、不変にできない
//
// 生成は簡単だが、全ての値を設定し終えるまでは不完全な状態が外から見える。
// 必須項目の欠落は実行時にしか検出できない。

use super::builder;
use crate::core::{ConstructionError, ConstructionResult};

/// 栄養成分表示（可変版）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionFacts {
    serving_size: Option<u32>,
    servings: Option<u32>,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_serving_size(&mut self, serving_size: u32) {
        self.serving_size = Some(serving_size);
    }

    pub fn set_servings(&mut self, servings: u32) {
        self.servings = Some(servings);
    }

    pub fn set_calories(&mut self, calories: u32) {
        self.calories = calories;
    }

    pub fn set_fat(&mut self, fat: u32) {
        self.fat = fat;
    }

    pub fn set_sodium(&mut self, sodium: u32) {
        self.sodium = sodium;
    }

    pub fn set_carbohydrate(&mut self, carbohydrate: u32) {
        self.carbohydrate = carbohydrate;
    }

    /// 必須項目が全て設定済みかどうか
    pub fn is_complete(&self) -> bool {
        self.serving_size.is_some() && self.servings.is_some()
    }

    /// 現在の値から不変オブジェクトを作る
    ///
    /// 最初に見つかった未設定の必須項目を `MissingField` として返す。
    pub fn freeze(&self) -> ConstructionResult<builder::NutritionFacts> {
        let serving_size = self
            .serving_size
            .ok_or_else(|| ConstructionError::missing_field("serving_size"))?;
        let servings = self
            .servings
            .ok_or_else(|| ConstructionError::missing_field("servings"))?;

        Ok(builder::NutritionFacts::builder(serving_size, servings)
            .with_calories(self.calories)
            .with_fat(self.fat)
            .with_sodium(self.sodium)
            .with_carbohydrate(self.carbohydrate)
            .build())
    }
}
