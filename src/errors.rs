use std::fmt;

#[derive(Debug, PartialEq)]
pub enum BarError {
    LockError,
    FileReaderError,
    DuplicateIngredient(String),
    InvalidAlcoholContents(String, f64),
    SerializationError,
    BartenderPanicked(usize),
}

impl fmt::Display for BarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarError::LockError => write!(f, "a lock was poisoned"),
            BarError::FileReaderError => write!(f, "could not read the catalog file"),
            BarError::DuplicateIngredient(name) => {
                write!(f, "ingredient {} is listed more than once", name)
            }
            BarError::InvalidAlcoholContents(name, contents) => {
                write!(f, "ingredient {} has invalid alcohol contents {}", name, contents)
            }
            BarError::SerializationError => write!(f, "could not serialize the drinks"),
            BarError::BartenderPanicked(id) => write!(f, "bartender {} panicked", id),
        }
    }
}

impl std::error::Error for BarError {}

impl<T> From<std::sync::PoisonError<T>> for BarError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        BarError::LockError
    }
}

impl From<serde_json::Error> for BarError {
    fn from(_: serde_json::Error) -> Self {
        BarError::SerializationError
    }
}
