//! Tragos servidos: porciones de un ingrediente y tragos terminados.
use serde::Serialize;

/// Una porcion servida de un ingrediente. Copia el contenido alcoholico al momento de servirla.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portion {
    pub name: String,
    #[serde(rename = "alcoholContents")]
    pub alcohol_contents: f64,
    #[serde(rename = "oz")]
    pub volume_oz: f64,
}

impl Portion {
    pub fn new(name: &str, alcohol_contents: f64, volume_oz: f64) -> Portion {
        Portion {
            name: name.to_string(),
            alcohol_contents,
            volume_oz,
        }
    }
}

/// Un trago terminado, resultado de mezclar porciones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drink {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub method: String,
    #[serde(rename = "alcoholContents")]
    pub alcohol_contents: f64,
    #[serde(rename = "oz")]
    pub volume_oz: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipe: Vec<Portion>,
}
