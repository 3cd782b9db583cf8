use flower_browser_application::{BrowserState, CatalogEntry, FlowerView};
use serde_json::json;

pub fn present_catalog_row(entry: &CatalogEntry) -> String {
    format!("{}\t{}\t{}", entry.position, entry.image_ref, entry.title)
}

pub fn present_state(state: &BrowserState) -> String {
    format!(
        "state index={} description_visible={}",
        state.current_index(),
        state.description_visible()
    )
}

pub fn present_view(view: &FlowerView) -> String {
    let mut out = format!("[{}] {}", view.image_ref, view.title);
    match view.visible_description() {
        Some(description) => {
            out.push('\n');
            out.push_str(description.trim_end());
        }
        None => out.push_str("\n(tap the image to show the description)"),
    }
    out
}

pub fn present_step_json(
    step: usize,
    state: &BrowserState,
    view: &FlowerView,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&json!({
        "step": step,
        "state": state,
        "view": view,
    }))
}
