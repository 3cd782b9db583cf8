use flower_browser_domain::{DomainError, FlowerCatalog};

use crate::{BrowserState, FlowerView};

/// User input forwarded by the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    PreviousPressed,
    NextPressed,
    ImageTapped,
}

/// Owns the catalog and the single [`BrowserState`].
///
/// `previous` saturates at the first flower while `next` wraps from the last
/// flower back to the first. Both hide the description.
#[derive(Debug, Clone)]
pub struct NavigationController {
    catalog: FlowerCatalog,
    state: BrowserState,
}

impl NavigationController {
    pub fn new(catalog: FlowerCatalog) -> Self {
        Self {
            catalog,
            state: BrowserState::default(),
        }
    }

    pub fn with_state(catalog: FlowerCatalog, state: BrowserState) -> Result<Self, DomainError> {
        if state.current_index >= catalog.len() {
            return Err(DomainError::OutOfRange {
                index: state.current_index,
                size: catalog.len(),
            });
        }
        Ok(Self { catalog, state })
    }

    pub fn previous(&mut self) {
        self.state.current_index = self.state.current_index.saturating_sub(1);
        self.state.description_visible = false;
    }

    pub fn next(&mut self) {
        self.state.current_index = (self.state.current_index + 1) % self.catalog.len();
        self.state.description_visible = false;
    }

    pub fn toggle_description(&mut self) {
        self.state.description_visible = !self.state.description_visible;
    }

    pub fn dispatch(&mut self, intent: Intent) -> FlowerView {
        match intent {
            Intent::PreviousPressed => self.previous(),
            Intent::NextPressed => self.next(),
            Intent::ImageTapped => self.toggle_description(),
        }
        self.current_view()
    }

    pub fn current_view(&self) -> FlowerView {
        FlowerView::project(
            &self.catalog[self.state.current_index],
            self.state.description_visible,
        )
    }

    pub fn state(&self) -> BrowserState {
        self.state
    }

    pub fn catalog(&self) -> &FlowerCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use flower_browser_domain::{Flower, ImageRef};

    use super::*;

    fn catalog_of(size: usize) -> FlowerCatalog {
        let flowers = (0..size)
            .map(|i| {
                Flower::new(
                    ImageRef::new(format!("{i}.png")).expect("image ref"),
                    format!("flower {i}"),
                    format!("about flower {i}"),
                )
                .expect("flower")
            })
            .collect();
        FlowerCatalog::new(flowers).expect("catalog")
    }

    fn snapshot(controller: &NavigationController) -> (usize, bool) {
        let state = controller.state();
        (state.current_index(), state.description_visible())
    }

    #[test]
    fn walkthrough_over_three_flowers() {
        let mut controller = NavigationController::new(catalog_of(3));
        assert_eq!(snapshot(&controller), (0, false));

        controller.toggle_description();
        assert_eq!(snapshot(&controller), (0, true));
        controller.next();
        assert_eq!(snapshot(&controller), (1, false));
        controller.next();
        assert_eq!(snapshot(&controller), (2, false));
        controller.next();
        assert_eq!(snapshot(&controller), (0, false));
        controller.previous();
        assert_eq!(snapshot(&controller), (0, false));
    }

    #[test]
    fn previous_saturates_at_first_flower() {
        let mut controller = NavigationController::new(catalog_of(3));
        for _ in 0..5 {
            controller.previous();
            assert_eq!(controller.state().current_index(), 0);
        }
    }

    #[test]
    fn next_wraps_from_last_flower() {
        let catalog = catalog_of(4);
        let mut controller =
            NavigationController::with_state(catalog, BrowserState::new(3, true)).expect("state");
        controller.next();
        assert_eq!(snapshot(&controller), (0, false));
    }

    #[test]
    fn navigation_always_hides_description() {
        for intent in [Intent::PreviousPressed, Intent::NextPressed] {
            for visible in [false, true] {
                let mut controller =
                    NavigationController::with_state(catalog_of(3), BrowserState::new(1, visible))
                        .expect("state");
                let view = controller.dispatch(intent);
                assert!(!view.description_visible);
                assert!(!controller.state().description_visible());
            }
        }
    }

    #[test]
    fn toggle_flips_flag_and_keeps_index() {
        let mut controller =
            NavigationController::with_state(catalog_of(3), BrowserState::new(2, false))
                .expect("state");
        controller.toggle_description();
        assert_eq!(snapshot(&controller), (2, true));
        controller.toggle_description();
        assert_eq!(snapshot(&controller), (2, false));
    }

    #[test]
    fn index_stays_in_bounds_for_every_catalog_size() {
        let intents = [
            Intent::NextPressed,
            Intent::ImageTapped,
            Intent::PreviousPressed,
            Intent::NextPressed,
            Intent::NextPressed,
        ];
        for size in 1..=6 {
            let mut controller = NavigationController::new(catalog_of(size));
            for step in 0..50 {
                controller.dispatch(intents[(step * 7 + size) % intents.len()]);
                assert!(controller.state().current_index() < size);
            }
        }
    }

    #[test]
    fn single_flower_catalog_never_moves() {
        let mut controller = NavigationController::new(catalog_of(1));
        controller.next();
        controller.previous();
        assert_eq!(snapshot(&controller), (0, false));
    }

    #[test]
    fn current_view_is_repeatable() {
        let mut controller = NavigationController::new(catalog_of(3));
        controller.dispatch(Intent::NextPressed);
        controller.dispatch(Intent::ImageTapped);
        let first = controller.current_view();
        let second = controller.current_view();
        assert_eq!(first, second);
        assert_eq!(first.title, "flower 1");
        assert_eq!(first.visible_description(), Some("about flower 1"));
    }

    #[test]
    fn hidden_description_is_not_exposed() {
        let controller = NavigationController::new(catalog_of(2));
        let view = controller.current_view();
        assert_eq!(view.visible_description(), None);
        assert_eq!(view.description, "about flower 0");
    }

    #[test]
    fn with_state_rejects_index_outside_catalog() {
        let result = NavigationController::with_state(catalog_of(3), BrowserState::new(3, false));
        assert!(matches!(
            result,
            Err(DomainError::OutOfRange { index: 3, size: 3 })
        ));
    }
}
