// テレスコーピングコンストラクタ - 拡張しにくい
//
// 必須パラメータだけを取る関数から始め、選択パラメータを一つずつ増やした関数を並べる。
// 引数が増えると呼び出し側で何番目が何の値かを追えなくなる。

use super::builder;

/// 栄養成分表示（テレスコーピングコンストラクタ版）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionFacts {
    serving_size: u32,
    servings: u32,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFacts {
    pub fn new(serving_size: u32, servings: u32) -> Self {
        Self::with_calories(serving_size, servings, 0)
    }

    pub fn with_calories(serving_size: u32, servings: u32, calories: u32) -> Self {
        Self::with_fat(serving_size, servings, calories, 0)
    }

    pub fn with_fat(serving_size: u32, servings: u32, calories: u32, fat: u32) -> Self {
        Self::with_sodium(serving_size, servings, calories, fat, 0)
    }

    pub fn with_sodium(
        serving_size: u32,
        servings: u32,
        calories: u32,
        fat: u32,
        sodium: u32,
    ) -> Self {
        Self::with_all(serving_size, servings, calories, fat, sodium, 0)
    }

    pub fn with_all(
        serving_size: u32,
        servings: u32,
        calories: u32,
        fat: u32,
        sodium: u32,
        carbohydrate: u32,
    ) -> Self {
        Self {
            serving_size,
            servings,
            calories,
            fat,
            sodium,
            carbohydrate,
        }
    }

    pub fn serving_size(&self) -> u32 {
        self.serving_size
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn fat(&self) -> u32 {
        self.fat
    }

    pub fn sodium(&self) -> u32 {
        self.sodium
    }

    pub fn carbohydrate(&self) -> u32 {
        self.carbohydrate
    }
}

impl From<NutritionFacts> for builder::NutritionFacts {
    fn from(facts: NutritionFacts) -> Self {
        builder::NutritionFacts::builder(facts.serving_size, facts.servings)
            .with_calories(facts.calories)
            .with_fat(facts.fat)
            .with_sodium(facts.sodium)
            .with_carbohydrate(facts.carbohydrate)
            .build()
    }
}
