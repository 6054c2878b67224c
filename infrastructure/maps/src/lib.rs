pub mod client;
pub mod distance_matrix;
