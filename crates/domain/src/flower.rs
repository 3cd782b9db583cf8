use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Serialize;

use crate::DomainError;

/// Name of a static image asset, relative to the asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyImageRef);
        }
        Ok(Self(value))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkFormat {
    Jpeg,
    Png,
    Unsupported,
}

pub fn detect_artwork_format(path: &Path) -> ArtworkFormat {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ArtworkFormat::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => ArtworkFormat::Jpeg,
        "png" => ArtworkFormat::Png,
        _ => ArtworkFormat::Unsupported,
    }
}

/// A catalog entry. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flower {
    image_ref: ImageRef,
    title: String,
    description: String,
}

impl Flower {
    pub fn new(
        image_ref: ImageRef,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        Ok(Self {
            image_ref,
            title,
            description: description.into(),
        })
    }

    pub(crate) fn from_static(
        image_ref: &'static str,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            image_ref: ImageRef::from_static(image_ref),
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn image_ref(&self) -> &ImageRef {
        &self.image_ref
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
