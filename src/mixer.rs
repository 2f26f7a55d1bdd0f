//! Mezcla de porciones en un trago terminado.
use log::{debug, warn};

use crate::{
    constants::ALCOHOL_DECIMALS,
    drink::{Drink, Portion},
};

/// Mixes the present portions into a drink named `name`, prepared with `method`.
///
/// Missing portions (`None`, from a failed pour) are skipped and left out of the recipe.
/// The alcohol contents is the volume weighted average of the portions, rounded to
/// [`ALCOHOL_DECIMALS`]. A drink with no volume has no alcohol.
pub fn mix<I>(name: &str, method: &str, portions: I) -> Drink
where
    I: IntoIterator<Item = Option<Portion>>,
{
    let mut recipe = Vec::new();
    let mut drink_oz = 0.0;
    let mut alcohol_oz = 0.0;

    for portion in portions {
        let Some(portion) = portion else {
            warn!("[MIXER] Received missing portion for {}", name);
            continue;
        };
        drink_oz += portion.volume_oz;
        alcohol_oz += portion.volume_oz * portion.alcohol_contents;
        recipe.push(portion);
    }

    let alcohol_contents = if drink_oz == 0.0 {
        0.0
    } else {
        round_to(alcohol_oz / drink_oz, ALCOHOL_DECIMALS)
    };
    debug!(
        "[MIXER] {} {} oz at {} alcohol",
        name, drink_oz, alcohol_contents
    );

    Drink {
        name: name.to_string(),
        method: method.to_string(),
        alcohol_contents,
        volume_oz: drink_oz,
        recipe,
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
