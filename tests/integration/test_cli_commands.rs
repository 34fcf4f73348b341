// CLIコマンドの統合テスト
use clap::Parser;
use construction_patterns::cli::{run, Cli, Commands};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("construction_patterns").chain(args.iter().copied()))?;
    run(cli.command)
}

#[test]
fn test_nutrition_command() {
    let output = run_args(&["nutrition", "240", "8", "--calories", "100", "--sodium", "35"]).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["calories"], 100);
    assert_eq!(json["sodium"], 35);
    assert_eq!(json["carbohydrate"], 0);
}

#[test]
fn test_ny_pizza_command() {
    let output = run_args(&["ny-pizza", "--size", "small", "-t", "sausage", "-t", "onion", "-t", "sausage"]).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["kind"], "ny");
    assert_eq!(json["size"], "small");
    assert_eq!(json["toppings"], serde_json::json!(["onion", "sausage"]));
}

#[test]
fn test_calzone_command() {
    let output = run_args(&["calzone", "--sauce-inside", "--topping", "ham"]).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["kind"], "calzone");
    assert_eq!(json["sauce_inside"], true);
    assert_eq!(json["toppings"], serde_json::json!(["ham"]));
}

#[test]
fn test_order_command_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let order_path = temp_dir.path().join("order.json");
    fs::write(
        &order_path,
        r#"{"kind": "calzone", "toppings": ["ham", "pepper"]}"#,
    )
    .unwrap();

    let output = run(Commands::Order {
        order_file: order_path,
    })
    .unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["sauce_inside"], false);
    assert_eq!(json["toppings"], serde_json::json!(["ham", "pepper"]));
}

#[test]
fn test_order_command_with_invalid_topping() {
    let temp_dir = TempDir::new().unwrap();
    let order_path = temp_dir.path().join("order.json");
    fs::write(&order_path, r#"{"kind": "ny", "size": "small", "toppings": ["anchovy"]}"#).unwrap();

    let error = run(Commands::Order {
        order_file: order_path,
    })
    .unwrap_err();
    assert!(format!("{error:#}").contains("anchovy"));
}

#[test]
fn test_missing_order_file() {
    let result = run(Commands::Order {
        order_file: "nonexistent_order.json".into(),
    });
    assert!(result.is_err());
}

#[test]
fn test_flag_and_elvis_commands() {
    assert_eq!(run_args(&["flag", "false"]).unwrap(), "false (cached instance: true)");
    assert!(run_args(&["flag", "perhaps"]).is_err());

    let report = run_args(&["elvis"]).unwrap();
    assert!(!report.contains("single instance = false"));
}

#[test]
fn test_ny_pizza_requires_size() {
    assert!(run_args(&["ny-pizza", "-t", "ham"]).is_err());
}
