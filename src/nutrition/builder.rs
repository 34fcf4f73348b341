// ビルダーパターンによる栄養成分表示
//
// 必須パラメータだけでビルダーを作り、選択パラメータをメソッドチェーンで設定し、
// 最後に build で不変オブジェクトを得る。

use serde::Serialize;

/// 栄養成分表示（不変）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionFacts {
    serving_size: u32,
    servings: u32,
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFacts {
    /// 必須パラメータでビルダーを作成
    pub fn builder(serving_size: u32, servings: u32) -> NutritionFactsBuilder {
        NutritionFactsBuilder::new(serving_size, servings)
    }

    /// 1回の提供量 (ml)
    pub fn serving_size(&self) -> u32 {
        self.serving_size
    }

    /// 総提供回数
    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// 1回の提供量あたりのカロリー
    pub fn calories(&self) -> u32 {
        self.calories
    }

    /// 脂質 (g)
    pub fn fat(&self) -> u32 {
        self.fat
    }

    /// ナトリウム (mg)
    pub fn sodium(&self) -> u32 {
        self.sodium
    }

    /// 炭水化物 (g)
    pub fn carbohydrate(&self) -> u32 {
        self.carbohydrate
    }
}

/// `NutritionFacts` のビルダー
#[derive(Debug, Clone)]
#[must_use = "ビルダーは build() を呼ぶまで何も生成しない"]
pub struct NutritionFactsBuilder {
    // 必須
    serving_size: u32,
    servings: u32,

    // 選択 - 既定値で初期化
    calories: u32,
    fat: u32,
    sodium: u32,
    carbohydrate: u32,
}

impl NutritionFactsBuilder {
    pub fn new(serving_size: u32, servings: u32) -> Self {
        Self {
            serving_size,
            servings,
            calories: 0,
            fat: 0,
            sodium: 0,
            carbohydrate: 0,
        }
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_fat(mut self, fat: u32) -> Self {
        self.fat = fat;
        self
    }

    pub fn with_sodium(mut self, sodium: u32) -> Self {
        self.sodium = sodium;
        self
    }

    pub fn with_carbohydrate(mut self, carbohydrate: u32) -> Self {
        self.carbohydrate = carbohydrate;
        self
    }

    /// ビルダーを消費して不変オブジェクトを生成
    ///
    /// `build` 後のビルダーは移動済みなので再利用できない。
    ///
    /// ```compile_fail
    /// use construction_patterns::nutrition::NutritionFacts;
    ///
    /// let builder = NutritionFacts::builder(240, 8);
    /// let facts = builder.build();
    /// let more = builder.with_calories(100).build();
    /// ```
    ///
    /// ```compile_fail
    /// use construction_patterns::nutrition::NutritionFacts;
    ///
    /// let mut facts = NutritionFacts::builder(240, 8).build();
    /// facts.calories = 100;
    /// ```
    pub fn build(self) -> NutritionFacts {
        let facts = NutritionFacts {
            serving_size: self.serving_size,
            servings: self.servings,
            calories: self.calories,
            fat: self.fat,
            sodium: self.sodium,
            carbohydrate: self.carbohydrate,
        };
        tracing::debug!(?facts, "NutritionFacts を生成");
        facts
    }
}
