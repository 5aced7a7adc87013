//! Utility modules

pub mod paths;
pub mod random;

pub use paths::{config_path, data_dir};
pub use random::{generate, generate_with, random_array, random_array_with, ArrayKind};
