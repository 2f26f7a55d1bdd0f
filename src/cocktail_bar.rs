use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
};

use log::info;

use crate::{
    bar::Bar, bartender::Bartender, catalog_reader::Catalog, drink::Drink, errors::BarError,
    ingredient::Ingredient, recipe::Recipe,
};

/// Orquesta a los bartenders: reparte las recetas del catalogo y junta los tragos servidos.
pub struct CocktailBar {
    bar: Arc<Mutex<Bar>>,
    recipes: Vec<Recipe>,
    n_bartenders: usize,
}

impl CocktailBar {
    pub fn new(catalog: Catalog, n_bartenders: usize) -> Result<CocktailBar, BarError> {
        Ok(CocktailBar {
            bar: Arc::new(Mutex::new(Bar::new(catalog.ingredients)?)),
            recipes: catalog.recipes,
            n_bartenders: n_bartenders.max(1),
        })
    }

    /// Prepares every recipe and returns the drinks in menu order.
    pub fn serve(&self) -> Result<Vec<Drink>, BarError> {
        let queue: VecDeque<(usize, Recipe)> =
            self.recipes.iter().cloned().enumerate().collect();
        let queue = Arc::new(Mutex::new(queue));

        let bartender_threads: Vec<JoinHandle<Result<Vec<(usize, Drink)>, BarError>>> =
            (0..self.n_bartenders)
            .map(|id| {
                let bartender = Bartender::new(id, queue.clone(), self.bar.clone());
                thread::spawn(move || bartender.handle_recipes())
            })
            .collect();

        let mut served = Vec::with_capacity(self.recipes.len());
        for (id, bartender) in bartender_threads.into_iter().enumerate() {
            let drinks = bartender
                .join()
                .map_err(|_| BarError::BartenderPanicked(id))??;
            served.extend(drinks);
        }
        served.sort_by_key(|(position, _)| *position);
        info!("[BAR] Served {} drinks", served.len());

        Ok(served.into_iter().map(|(_, drink)| drink).collect())
    }

    /// Snapshot of the inventory with its consumption stats.
    pub fn ingredients(&self) -> Result<Vec<Ingredient>, BarError> {
        Ok(self.bar.lock()?.ingredients().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            ingredients: vec![
                Ingredient::new("Vodka", 0.4),
                Ingredient::new("Cointreau", 0.4),
                Ingredient::new("Lime Juice", 0.0),
                Ingredient::new("Cranberry Juice", 0.0),
            ],
            recipes: vec![
                Recipe::new(
                    "Cosmopolitan",
                    "Shake",
                    vec![
                        ("Vodka", 1.0),
                        ("Cointreau", 0.5),
                        ("Lime Juice", 0.5),
                        ("Cranberry Juice", 1.0),
                    ],
                ),
                Recipe::new("Vodka Cranberry", "Stir", vec![("Vodka", 1.0), ("Cranberry Juice", 3.0)]),
                Recipe::new("Tequila Shot", "", vec![("Tequila", 1.0)]),
            ],
        }
    }

    #[test]
    fn should_serve_drinks_in_menu_order() {
        let cocktail_bar = CocktailBar::new(catalog(), 3).unwrap();
        let drinks = cocktail_bar.serve().unwrap();

        let names: Vec<&str> = drinks.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(vec!["Cosmopolitan", "Vodka Cranberry", "Tequila Shot"], names);
        assert_eq!(3.0, drinks[0].volume_oz);
        assert_eq!(0.2, drinks[0].alcohol_contents);
        assert_eq!(4, drinks[0].recipe.len());
        assert_eq!(0.1, drinks[1].alcohol_contents);
        assert_eq!(0.0, drinks[2].volume_oz);
        assert_eq!(0.0, drinks[2].alcohol_contents);
    }

    #[test]
    fn should_record_consumption_of_every_bartender() {
        let cocktail_bar = CocktailBar::new(catalog(), 2).unwrap();
        cocktail_bar.serve().unwrap();
        let ingredients = cocktail_bar.ingredients().unwrap();

        assert_eq!("Vodka", ingredients[0].name);
        assert_eq!(2.0, ingredients[0].consumption_oz);
        assert_eq!(2, ingredients[0].use_frequency);
        assert_eq!(4.0, ingredients[3].consumption_oz);
        assert_eq!(2, ingredients[3].use_frequency);
    }

    #[test]
    fn should_keep_counters_consistent_with_many_bartenders() {
        let recipes = (0..200)
            .map(|i| Recipe::new(&format!("Shot {}", i), "", vec![("Vodka", 0.5)]))
            .collect();
        let cocktail_bar = CocktailBar::new(
            Catalog {
                ingredients: vec![Ingredient::new("Vodka", 0.4)],
                recipes,
            },
            8,
        )
        .unwrap();

        assert_eq!(200, cocktail_bar.serve().unwrap().len());
        let vodka = &cocktail_bar.ingredients().unwrap()[0];
        assert_eq!(100.0, vodka.consumption_oz);
        assert_eq!(200, vodka.use_frequency);
    }

    #[test]
    fn should_use_at_least_one_bartender() {
        let cocktail_bar = CocktailBar::new(catalog(), 0).unwrap();
        assert_eq!(3, cocktail_bar.serve().unwrap().len());
    }

    #[test]
    fn should_reject_an_invalid_catalog() {
        let mut catalog = catalog();
        catalog.ingredients.push(Ingredient::new("Vodka", 0.5));
        assert_eq!(
            BarError::DuplicateIngredient("Vodka".to_string()),
            CocktailBar::new(catalog, 1).err().unwrap()
        );
    }
}
