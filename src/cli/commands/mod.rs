pub mod nutrition;
pub mod pizza;
pub mod singleton;

pub use nutrition::*;
pub use pizza::*;
pub use singleton::*;

use super::args::Commands;
use anyhow::Result;

/// サブコマンドを実行し、出力する文字列を返す
pub fn run(command: Commands) -> Result<String> {
    tracing::debug!(?command, "コマンド実行");

    match command {
        Commands::Nutrition {
            serving_size,
            servings,
            calories,
            fat,
            sodium,
            carbohydrate,
        } => execute_nutrition(serving_size, servings, calories, fat, sodium, carbohydrate),
        Commands::NyPizza { size, toppings } => execute_ny_pizza(size, toppings),
        Commands::Calzone {
            sauce_inside,
            toppings,
        } => execute_calzone(sauce_inside, toppings),
        Commands::Order { order_file } => execute_order_file(&order_file),
        Commands::Flag { value } => execute_flag(&value),
        Commands::Elvis => execute_elvis(),
    }
}
