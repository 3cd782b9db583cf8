use flower_browser_application::FlowerView;

pub const ASSET_DIR_ENV: &str = "FLOWER_BROWSER_ASSETS";
pub const DESCRIPTION_MODE_ENV: &str = "FLOWER_BROWSER_DESCRIPTION";

/// How the window treats the description toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionMode {
    /// Tapping the image shows or hides the description.
    Toggle,
    /// The description is always drawn; the toggle is tracked but not shown.
    AlwaysShown,
}

impl DescriptionMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "toggle" => Some(Self::Toggle),
            "always" | "always-shown" => Some(Self::AlwaysShown),
            _ => None,
        }
    }

    pub fn description(self, view: &FlowerView) -> Option<&str> {
        match self {
            Self::Toggle => view.visible_description(),
            Self::AlwaysShown => Some(view.description.as_str()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub asset_dir: String,
    pub window_width: f32,
    pub window_height: f32,
    pub max_artwork_edge: u32,
    pub description_mode: DescriptionMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: "assets".to_string(),
            window_width: 480.0,
            window_height: 720.0,
            max_artwork_edge: 512,
            description_mode: DescriptionMode::Toggle,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(dir) = lookup(ASSET_DIR_ENV) {
            if dir.trim().is_empty() {
                return Err(format!("{ASSET_DIR_ENV} must not be empty"));
            }
            config.asset_dir = dir;
        }

        if let Some(mode) = lookup(DESCRIPTION_MODE_ENV) {
            config.description_mode = DescriptionMode::parse(&mode).ok_or_else(|| {
                format!("{DESCRIPTION_MODE_ENV} must be `toggle` or `always`, got `{mode}`")
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use flower_browser_application::NavigationController;
    use flower_browser_domain::FlowerCatalog;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_uses_local_assets_and_toggle_mode() {
        let config = AppConfig::default();
        assert_eq!(config.asset_dir, "assets");
        assert_eq!(config.max_artwork_edge, 512);
        assert_eq!(config.description_mode, DescriptionMode::Toggle);
    }

    #[test]
    fn env_overrides_asset_dir_and_mode() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ASSET_DIR_ENV, "/srv/flowers"),
            (DESCRIPTION_MODE_ENV, "Always"),
        ]))
        .expect("config");
        assert_eq!(config.asset_dir, "/srv/flowers");
        assert_eq!(config.description_mode, DescriptionMode::AlwaysShown);
    }

    #[test]
    fn unknown_description_mode_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(DESCRIPTION_MODE_ENV, "sometimes")]));
        assert!(result.is_err());
    }

    #[test]
    fn always_shown_ignores_toggle_flag() {
        let controller = NavigationController::new(FlowerCatalog::builtin());
        let view = controller.current_view();
        assert!(!view.description_visible);
        assert_eq!(DescriptionMode::Toggle.description(&view), None);
        assert!(DescriptionMode::AlwaysShown
            .description(&view)
            .is_some_and(|text| text.contains("hibiscus")));
    }
}
