//! Parametros de configuracion del bar

use log::LevelFilter;

/// Archivo con el catalogo de ingredientes y recetas, si no se pasa otro por linea de comandos
pub const DEFAULT_CATALOG_PATH: &str = "bar.json";

/// Cantidad de decimales con los que se reporta el contenido alcoholico de un trago
pub const ALCOHOL_DECIMALS: i32 = 2;

/// Cantidad de bartenders preparando tragos en simultaneo
pub const N_BARTENDERS: usize = 4;

/// Nivel de log por defecto (se puede pisar con RUST_LOG)
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

