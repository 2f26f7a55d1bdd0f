pub mod bar;
pub mod bartender;
pub mod catalog_reader;
pub mod cocktail_bar;
pub mod constants;
pub mod drink;
pub mod errors;
pub mod ingredient;
pub mod mixer;
pub mod recipe;
pub mod report;

use std::process;

use log::{error, info};
use simple_logger::SimpleLogger;

use catalog_reader::read_catalog;
use cocktail_bar::CocktailBar;
use constants::{DEFAULT_CATALOG_PATH, LOG_LEVEL, N_BARTENDERS};
use errors::BarError;
use report::{drinks_to_json, sort_by_alcohol_contents, statistics};

fn run(catalog_path: &str) -> Result<(), BarError> {
    let catalog = read_catalog(catalog_path)?;
    let cocktail_bar = CocktailBar::new(catalog, N_BARTENDERS)?;

    let mut drinks = cocktail_bar.serve()?;
    sort_by_alcohol_contents(&mut drinks);
    info!("{}", drinks_to_json(&drinks)?);
    info!("{}", statistics(&cocktail_bar.ingredients()?));
    Ok(())
}

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LOG_LEVEL).env().init() {
        eprintln!("Error initializing logger: {}", err);
    }

    let catalog_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

    if let Err(err) = run(&catalog_path) {
        error!("{}", err);
        process::exit(1);
    }
}
