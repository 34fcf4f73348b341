// カルツォーネ - ソースを中に入れるかどうかを選択パラメータで持つ

use super::{Pizza, PizzaBase, PizzaBuilder, Toppings};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calzone {
    toppings: Toppings,
    sauce_inside: bool,
}

impl Calzone {
    pub fn builder() -> CalzoneBuilder {
        CalzoneBuilder::new()
    }

    pub fn sauce_inside(&self) -> bool {
        self.sauce_inside
    }
}

impl Pizza for Calzone {
    fn toppings(&self) -> &Toppings {
        &self.toppings
    }

    fn kind(&self) -> &'static str {
        "calzone"
    }
}

#[derive(Debug, Clone, Default)]
#[must_use = "ビルダーは build() を呼ぶまで何も生成しない"]
pub struct CalzoneBuilder {
    base: PizzaBase,
    // 既定値は false
    sauce_inside: bool,
}

impl CalzoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sauce_inside(mut self) -> Self {
        self.sauce_inside = true;
        self
    }
}

impl PizzaBuilder for CalzoneBuilder {
    type Output = Calzone;

    fn base_mut(&mut self) -> &mut PizzaBase {
        &mut self.base
    }

    fn build(self) -> Calzone {
        let calzone = Calzone {
            toppings: self.base.into_toppings(),
            sauce_inside: self.sauce_inside,
        };
        tracing::debug!(
            sauce_inside = calzone.sauce_inside,
            toppings = calzone.toppings.len(),
            "Calzone を生成"
        );
        calzone
    }
}
