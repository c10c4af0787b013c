pub mod cs;
pub mod error;
pub mod words;

pub use cs::dynamic;
pub use cs::dynamic::edit_distance::{
    distance_matrix, levenshtein, levenshtein_distance, levenshtein_distance_bytes,
    levenshtein_distance_with, EditDistance, Unit,
};
pub use error::{Error, Result};
