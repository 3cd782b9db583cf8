use serde::Serialize;

/// Position in the catalog plus the description toggle.
///
/// Only [`crate::NavigationController`] mutates a state it owns, which keeps
/// `current_index` inside the catalog bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BrowserState {
    pub(crate) current_index: usize,
    pub(crate) description_visible: bool,
}

impl BrowserState {
    pub fn new(current_index: usize, description_visible: bool) -> Self {
        Self {
            current_index,
            description_visible,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn description_visible(&self) -> bool {
        self.description_visible
    }
}
