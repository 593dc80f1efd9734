mod seed_dataset;

pub use seed_dataset::{seed_dataset, SeedDatasetReader};
