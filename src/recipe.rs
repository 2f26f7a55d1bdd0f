use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipePour {
    pub ingredient: String,
    pub oz: f64,
}

/// Receta de un trago: que servir, cuanto, y como prepararlo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub method: String,
    pub pours: Vec<RecipePour>,
}

#[cfg(test)]
impl Recipe {
    pub fn new(name: &str, method: &str, pours: Vec<(&str, f64)>) -> Recipe {
        Recipe {
            name: name.to_string(),
            method: method.to_string(),
            pours: pours
                .into_iter()
                .map(|(ingredient, oz)| RecipePour {
                    ingredient: ingredient.to_string(),
                    oz,
                })
                .collect(),
        }
    }
}
