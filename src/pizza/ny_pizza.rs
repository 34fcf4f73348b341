// ニューヨークピザ - 必須パラメータとしてサイズを取る

use super::{Pizza, PizzaBase, PizzaBuilder, Toppings};
use crate::core::{ConstructionError, ConstructionResult};
use serde::Serialize;
use strum::{Display, EnumString};

/// ピザのサイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NyPizza {
    toppings: Toppings,
    size: Size,
}

impl NyPizza {
    pub fn builder(size: Size) -> NyPizzaBuilder {
        NyPizzaBuilder::new(size)
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Pizza for NyPizza {
    fn toppings(&self) -> &Toppings {
        &self.toppings
    }

    fn kind(&self) -> &'static str {
        "ny"
    }
}

#[derive(Debug, Clone)]
#[must_use = "ビルダーは build() を呼ぶまで何も生成しない"]
pub struct NyPizzaBuilder {
    base: PizzaBase,
    size: Size,
}

impl NyPizzaBuilder {
    pub fn new(size: Size) -> Self {
        Self {
            base: PizzaBase::new(),
            size,
        }
    }

    /// サイズ名からビルダーを作成（前後の空白は無視する）
    pub fn try_new(size: &str) -> ConstructionResult<Self> {
        let size = size.trim().parse::<Size>().map_err(|_| {
            tracing::warn!(size, "未知のサイズを拒否");
            ConstructionError::invalid_argument(
                "size",
                size,
                "small / medium / large のいずれかを指定してください",
            )
        })?;
        Ok(Self::new(size))
    }
}

impl PizzaBuilder for NyPizzaBuilder {
    type Output = NyPizza;

    fn base_mut(&mut self) -> &mut PizzaBase {
        &mut self.base
    }

    fn build(self) -> NyPizza {
        let pizza = NyPizza {
            toppings: self.base.into_toppings(),
            size: self.size,
        };
        tracing::debug!(size = %pizza.size, toppings = pizza.toppings.len(), "NyPizza を生成");
        pizza
    }
}
