use crate::pizza::{AnyPizza, PizzaOrder};
use anyhow::{Context, Result};
use std::path::Path;

/// 注文を組み立ててピザを JSON で出力
pub fn execute_order(order: PizzaOrder) -> Result<String> {
    let pizza: AnyPizza = order.into_pizza()?;
    Ok(serde_json::to_string_pretty(&pizza)?)
}

/// NYピザを組み立てる
pub fn execute_ny_pizza(size: String, toppings: Vec<String>) -> Result<String> {
    execute_order(PizzaOrder::Ny { size, toppings })
}

/// カルツォーネを組み立てる
pub fn execute_calzone(sauce_inside: bool, toppings: Vec<String>) -> Result<String> {
    execute_order(PizzaOrder::Calzone {
        sauce_inside,
        toppings,
    })
}

/// 注文ファイルを読み込んでピザを組み立てる
pub fn execute_order_file(order_file: &Path) -> Result<String> {
    let order = PizzaOrder::from_file(order_file)
        .with_context(|| format!("注文を読み込めません: {}", order_file.display()))?;
    execute_order(order)
}
