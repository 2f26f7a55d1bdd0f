//! Reporte final: tragos ordenados por contenido alcoholico y estadisticas de ingredientes.
use crate::{drink::Drink, errors::BarError, ingredient::Ingredient};

/// Sorts in ascending order of alcohol contents. Drinks with equal contents keep their order.
pub fn sort_by_alcohol_contents(drinks: &mut [Drink]) {
    drinks.sort_by(|a, b| a.alcohol_contents.total_cmp(&b.alcohol_contents));
}

pub fn drinks_to_json(drinks: &[Drink]) -> Result<String, BarError> {
    Ok(serde_json::to_string(drinks)?)
}

pub fn statistics(ingredients: &[Ingredient]) -> String {
    let mut statistics = String::from("[STATISTICS] Ingredient=(consumed oz, uses) |");
    for ingredient in ingredients {
        statistics.push_str(&format!(
            " {}=({},{}) ",
            ingredient.name, ingredient.consumption_oz, ingredient.use_frequency
        ));
    }
    statistics
}
