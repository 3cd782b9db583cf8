use flower_browser_domain::FlowerCatalog;
use tracing::{debug, warn};

use crate::{
    ApplicationError, Artwork, ArtworkLoader, ArtworkSource, BrowserState, CatalogEntry,
    CurrentViewQuery, DispatchIntentCommand, FlowerView, ListCatalogQuery, LoadArtworkCommand,
    NavigationController,
};

pub struct BrowserService {
    navigation: NavigationController,
    artwork: Box<dyn ArtworkLoader>,
}

impl BrowserService {
    pub fn new(catalog: FlowerCatalog, artwork: Box<dyn ArtworkLoader>) -> Self {
        Self {
            navigation: NavigationController::new(catalog),
            artwork,
        }
    }

    pub fn dispatch(&mut self, command: DispatchIntentCommand) -> FlowerView {
        let before = self.navigation.state();
        let view = self.navigation.dispatch(command.intent);
        let after = self.navigation.state();
        debug!(
            intent = ?command.intent,
            from_index = before.current_index(),
            to_index = after.current_index(),
            description_visible = after.description_visible(),
            "browser state transition"
        );
        view
    }

    pub fn current_view(&self, _query: CurrentViewQuery) -> FlowerView {
        self.navigation.current_view()
    }

    pub fn catalog_entries(&self, _query: ListCatalogQuery) -> Vec<CatalogEntry> {
        self.navigation
            .catalog()
            .iter()
            .enumerate()
            .map(|(position, flower)| CatalogEntry {
                position,
                image_ref: flower.image_ref().clone(),
                title: flower.title().to_string(),
            })
            .collect()
    }

    pub fn load_artwork(&self, command: LoadArtworkCommand) -> Result<Artwork, ApplicationError> {
        let artwork = self.artwork.load(&command.image_ref)?;
        match &artwork.source {
            ArtworkSource::Asset(path) => debug!(
                image_ref = %command.image_ref,
                path = %path.display(),
                width = artwork.width,
                height = artwork.height,
                "artwork loaded"
            ),
            ArtworkSource::Placeholder => warn!(
                image_ref = %command.image_ref,
                "artwork asset missing, using placeholder"
            ),
        }
        Ok(artwork)
    }

    pub fn state(&self) -> BrowserState {
        self.navigation.state()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use flower_browser_domain::ImageRef;

    use super::*;
    use crate::Intent;

    struct FakeArtworkLoader;

    impl ArtworkLoader for FakeArtworkLoader {
        fn load(&self, image_ref: &ImageRef) -> Result<Artwork, ApplicationError> {
            if image_ref.as_str() == "broken.jpg" {
                return Err(ApplicationError::Decode("corrupt".to_string()));
            }
            Ok(Artwork {
                width: 1,
                height: 1,
                rgba: vec![0, 0, 0, 255],
                source: ArtworkSource::Asset(PathBuf::from(image_ref.as_str())),
            })
        }
    }

    fn service() -> BrowserService {
        BrowserService::new(FlowerCatalog::builtin(), Box::new(FakeArtworkLoader))
    }

    #[test]
    fn dispatch_returns_refreshed_view() {
        let mut service = service();
        let view = service.dispatch(DispatchIntentCommand {
            intent: Intent::NextPressed,
        });
        assert_eq!(view.title, "Mawar");
        assert_eq!(view, service.current_view(CurrentViewQuery));

        let view = service.dispatch(DispatchIntentCommand {
            intent: Intent::ImageTapped,
        });
        assert!(view.description_visible);
        assert_eq!(service.state(), BrowserState::new(1, true));
    }

    #[test]
    fn catalog_entries_follow_catalog_order() {
        let entries = service().catalog_entries(ListCatalogQuery);
        let positions: Vec<usize> = entries.iter().map(|entry| entry.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(entries[2].title, "Tulip");
        assert_eq!(entries[2].image_ref.as_str(), "tulip.jpg");
    }

    #[test]
    fn load_artwork_delegates_to_loader() {
        let service = service();
        let artwork = service
            .load_artwork(LoadArtworkCommand {
                image_ref: ImageRef::new("mawar.jpg").expect("image ref"),
            })
            .expect("artwork");
        assert_eq!(artwork.width, 1);

        let error = service
            .load_artwork(LoadArtworkCommand {
                image_ref: ImageRef::new("broken.jpg").expect("image ref"),
            })
            .expect_err("decode failure");
        assert!(matches!(error, ApplicationError::Decode(_)));
    }
}
