//! Bartender del bar. Prepara las recetas pendientes sirviendo del inventario compartido.
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use log::debug;

use crate::{
    bar::Bar,
    drink::{Drink, Portion},
    errors::BarError,
    mixer::mix,
    recipe::{Recipe, RecipePour},
};

/// Representa a un bartender.
/// Tiene referencias a la cola de recetas pendientes (cada una con su posicion en el menu)
/// y al inventario del bar, que comparte con el resto de los bartenders.
pub struct Bartender {
    id: usize,
    recipes: Arc<Mutex<VecDeque<(usize, Recipe)>>>,
    bar: Arc<Mutex<Bar>>,
}

impl Bartender {
    pub fn new(
        id: usize,
        recipes: Arc<Mutex<VecDeque<(usize, Recipe)>>>,
        bar: Arc<Mutex<Bar>>,
    ) -> Bartender {
        Bartender { id, recipes, bar }
    }

    /// Prepares recipes until the queue is empty. Each drink is tagged with its menu position.
    pub fn handle_recipes(&self) -> Result<Vec<(usize, Drink)>, BarError> {
        let mut served = Vec::new();
        loop {
            let next = self.recipes.lock()?.pop_front();
            let Some((position, recipe)) = next else {
                debug!("[BARTENDER {}] No more recipes left", self.id);
                return Ok(served);
            };

            debug!("[BARTENDER {}] Takes recipe {}", self.id, recipe.name);
            served.push((position, self.prepare(&recipe)?));
        }
    }

    fn prepare(&self, recipe: &Recipe) -> Result<Drink, BarError> {
        let portions = recipe
            .pours
            .iter()
            .map(|pour| self.pour(pour))
            .collect::<Result<Vec<Option<Portion>>, BarError>>()?;
        Ok(mix(&recipe.name, &recipe.method, portions))
    }

    fn pour(&self, pour: &RecipePour) -> Result<Option<Portion>, BarError> {
        let mut bar = self.bar.lock()?;
        Ok(bar.pour(&pour.ingredient, pour.oz))
    }
}
