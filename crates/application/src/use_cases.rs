use flower_browser_domain::ImageRef;

use crate::Intent;

#[derive(Debug, Clone, Copy)]
pub struct DispatchIntentCommand {
    pub intent: Intent,
}

#[derive(Debug, Clone, Default)]
pub struct CurrentViewQuery;

#[derive(Debug, Clone, Default)]
pub struct ListCatalogQuery;

#[derive(Debug, Clone)]
pub struct LoadArtworkCommand {
    pub image_ref: ImageRef,
}
