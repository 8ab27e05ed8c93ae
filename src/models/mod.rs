mod dataset;
mod item;

pub use dataset::Dataset;
pub use item::Item;
