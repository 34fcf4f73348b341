// JSON で記述されたピザ注文
//
// サイズやトッピングは文字列のまま受け取り、ビルダーの検証付き入口を通して組み立てる。

use super::{AnyPizza, Calzone, NyPizzaBuilder, PizzaBuilder};
use crate::core::{ConstructionError, ConstructionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ピザ注文（`kind` でピザの種類を指定）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum PizzaOrder {
    Ny {
        size: String,
        #[serde(default)]
        toppings: Vec<String>,
    },
    Calzone {
        #[serde(default)]
        sauce_inside: bool,
        #[serde(default)]
        toppings: Vec<String>,
    },
}

impl PizzaOrder {
    /// JSON文字列から注文を読み込む
    pub fn from_json(json: &str) -> ConstructionResult<Self> {
        serde_json::from_str(json).map_err(ConstructionError::from)
    }

    /// JSONファイルから注文を読み込む
    pub fn from_file(path: impl AsRef<Path>) -> ConstructionResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ConstructionError::configuration(format!(
                "注文ファイルを読み込めません: {} - {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> ConstructionResult<String> {
        serde_json::to_string_pretty(self).map_err(ConstructionError::from)
    }

    /// ピザを作らずに注文の妥当性だけを確認
    pub fn validate(&self) -> ConstructionResult<()> {
        self.clone().into_pizza().map(|_| ())
    }

    /// 注文からピザを組み立てる
    pub fn into_pizza(self) -> ConstructionResult<AnyPizza> {
        match self {
            Self::Ny { size, toppings } => {
                let builder = add_named_toppings(NyPizzaBuilder::try_new(&size)?, &toppings)?;
                Ok(builder.build().into())
            }
            Self::Calzone {
                sauce_inside,
                toppings,
            } => {
                let mut builder = add_named_toppings(Calzone::builder(), &toppings)?;
                if sauce_inside {
                    builder = builder.with_sauce_inside();
                }
                Ok(builder.build().into())
            }
        }
    }
}

fn add_named_toppings<B: PizzaBuilder>(builder: B, names: &[String]) -> ConstructionResult<B> {
    names.iter().try_fold(builder, |builder, name| {
        builder.try_add_topping(name).map_err(ConstructionError::from)
    })
}
