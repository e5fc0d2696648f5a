mod persistence;
mod store;

pub use persistence::{load_dataset, load_dataset_or_empty, save_dataset};
pub use store::DatasetStore;
