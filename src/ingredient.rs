use serde::{Deserialize, Serialize};

/// Ingrediente del bar junto con sus estadisticas de consumo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub alcohol_contents: f64,
    #[serde(default)]
    pub consumption_oz: f64,
    #[serde(default)]
    pub use_frequency: u64,
}

impl Ingredient {
    pub fn new(name: &str, alcohol_contents: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            alcohol_contents,
            consumption_oz: 0.0,
            use_frequency: 0,
        }
    }

    /// Registers that `oz` of this ingredient were poured.
    pub fn record_use(&mut self, oz: f64) {
        self.consumption_oz += oz;
        self.use_frequency += 1;
    }
}
