//! Inventario del bar. Registra el consumo de cada ingrediente servido.
use std::collections::HashMap;

use log::{debug, warn};

use crate::{drink::Portion, errors::BarError, ingredient::Ingredient};

/// Representa al inventario del bar.
/// Mantiene los ingredientes en el orden del catalogo y un indice por nombre para buscarlos.
#[derive(Debug)]
pub struct Bar {
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
}

impl Bar {
    /// Builds the inventory, rejecting repeated names and alcohol fractions outside `[0, 1]`.
    pub fn new(ingredients: Vec<Ingredient>) -> Result<Bar, BarError> {
        let mut index = HashMap::with_capacity(ingredients.len());
        for (position, ingredient) in ingredients.iter().enumerate() {
            let contents = ingredient.alcohol_contents;
            if !(0.0..=1.0).contains(&contents) {
                return Err(BarError::InvalidAlcoholContents(
                    ingredient.name.clone(),
                    contents,
                ));
            }
            if index.insert(ingredient.name.clone(), position).is_some() {
                return Err(BarError::DuplicateIngredient(ingredient.name.clone()));
            }
        }
        Ok(Bar { ingredients, index })
    }

    /// Pours `oz` of the ingredient called `name`, recording the consumption.
    /// Returns `None` when the bar does not stock it; nothing is recorded in that case.
    pub fn pour(&mut self, name: &str, oz: f64) -> Option<Portion> {
        let Some(&position) = self.index.get(name) else {
            warn!("[BAR] Ingredient {} not found", name);
            return None;
        };
        let ingredient = &mut self.ingredients[position];
        ingredient.record_use(oz);
        debug!(
            "[BAR] Poured {} oz of {}, {} oz used so far",
            oz, ingredient.name, ingredient.consumption_oz
        );
        Some(Portion::new(&ingredient.name, ingredient.alcohol_contents, oz))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}
