mod catalog;
mod error;
mod flower;

pub use catalog::FlowerCatalog;
pub use error::DomainError;
pub use flower::{detect_artwork_format, ArtworkFormat, Flower, ImageRef};
