use crate::nutrition::NutritionFacts;
use anyhow::Result;

/// 任意の栄養成分を指定して NutritionFacts を JSON で出力
pub fn execute_nutrition(
    serving_size: u32,
    servings: u32,
    calories: Option<u32>,
    fat: Option<u32>,
    sodium: Option<u32>,
    carbohydrate: Option<u32>,
) -> Result<String> {
    let mut builder = NutritionFacts::builder(serving_size, servings);

    // 指定されたものだけ設定し、残りは既定値のまま
    if let Some(calories) = calories {
        builder = builder.with_calories(calories);
    }
    if let Some(fat) = fat {
        builder = builder.with_fat(fat);
    }
    if let Some(sodium) = sodium {
        builder = builder.with_sodium(sodium);
    }
    if let Some(carbohydrate) = carbohydrate {
        builder = builder.with_carbohydrate(carbohydrate);
    }

    Ok(serde_json::to_string_pretty(&builder.build())?)
}
