mod error;
mod navigation;
mod ports;
mod service;
mod state;
mod use_cases;
mod view;

pub use error::ApplicationError;
pub use navigation::{Intent, NavigationController};
pub use ports::{Artwork, ArtworkLoader, ArtworkSource};
pub use service::BrowserService;
pub use state::BrowserState;
pub use use_cases::{CurrentViewQuery, DispatchIntentCommand, ListCatalogQuery, LoadArtworkCommand};
pub use view::{CatalogEntry, FlowerView};
