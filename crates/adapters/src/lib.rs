pub mod fs;
pub mod presenters;

pub use fs::ImageCrateArtworkLoader;
pub use presenters::{present_catalog_row, present_state, present_step_json, present_view};
