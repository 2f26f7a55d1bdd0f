use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::BarError;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;

#[derive(Deserialize, Debug)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

fn read_catalog_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let catalog: Catalog = serde_json::from_reader(reader)?;
    Ok(catalog)
}

/// Reads the ingredients and recipes from the JSON catalog at `path`.
/// Stats in the file are ignored, every ingredient starts unused.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, BarError> {
    match read_catalog_from_file(&path) {
        Ok(mut catalog) => {
            for ingredient in catalog.ingredients.iter_mut() {
                ingredient.consumption_oz = 0.0;
                ingredient.use_frequency = 0;
            }
            info!(
                "[READER] Loaded {} ingredients and {} recipes",
                catalog.ingredients.len(),
                catalog.recipes.len()
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "[READER] Error reading catalog {}: {}",
                path.as_ref().display(),
                err
            );
            Err(BarError::FileReaderError)
        }
    }
}
