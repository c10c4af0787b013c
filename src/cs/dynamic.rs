pub mod edit_distance;

pub use edit_distance::{
    distance_matrix, levenshtein, levenshtein_distance, levenshtein_distance_bytes,
    levenshtein_distance_with, EditDistance, Unit,
};
