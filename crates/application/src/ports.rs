use std::path::PathBuf;

use flower_browser_domain::ImageRef;

use crate::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkSource {
    Asset(PathBuf),
    Placeholder,
}

/// Decoded RGBA8 pixels ready to upload as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub source: ArtworkSource,
}

pub trait ArtworkLoader {
    fn load(&self, image_ref: &ImageRef) -> Result<Artwork, ApplicationError>;
}
