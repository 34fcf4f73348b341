use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "construction_patterns")]
#[command(about = "Build value objects with static factories, builders and singletons")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build nutrition facts with the flat builder
    Nutrition {
        /// Serving size in ml
        serving_size: u32,

        /// Number of servings per container
        servings: u32,

        /// Calories per serving
        #[arg(long)]
        calories: Option<u32>,

        /// Fat in grams per serving
        #[arg(long)]
        fat: Option<u32>,

        /// Sodium in milligrams per serving
        #[arg(long)]
        sodium: Option<u32>,

        /// Carbohydrate in grams per serving
        #[arg(long)]
        carbohydrate: Option<u32>,
    },

    /// Build a New York style pizza
    NyPizza {
        /// Pizza size: small, medium or large
        #[arg(short, long)]
        size: String,

        /// Topping to add (repeatable)
        #[arg(short, long = "topping")]
        toppings: Vec<String>,
    },

    /// Build a calzone
    Calzone {
        /// Put the sauce inside
        #[arg(long)]
        sauce_inside: bool,

        /// Topping to add (repeatable)
        #[arg(short, long = "topping")]
        toppings: Vec<String>,
    },

    /// Build a pizza from a JSON order file
    Order {
        /// Order file path
        order_file: PathBuf,
    },

    /// Look up the cached flag instance for a boolean
    Flag {
        /// true or false
        value: String,
    },

    /// Show that every singleton accessor yields one instance
    Elvis,
}
