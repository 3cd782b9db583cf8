use flower_browser_domain::{Flower, ImageRef};
use serde::Serialize;

/// What the render surface needs to draw the current flower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowerView {
    pub image_ref: ImageRef,
    pub title: String,
    pub description: String,
    pub description_visible: bool,
}

impl FlowerView {
    pub(crate) fn project(flower: &Flower, description_visible: bool) -> Self {
        Self {
            image_ref: flower.image_ref().clone(),
            title: flower.title().to_string(),
            description: flower.description().to_string(),
            description_visible,
        }
    }

    pub fn visible_description(&self) -> Option<&str> {
        self.description_visible.then_some(self.description.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub position: usize,
    pub image_ref: ImageRef,
    pub title: String,
}
