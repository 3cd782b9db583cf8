use std::collections::HashMap;

use eframe::egui;
use flower_browser_application::{
    BrowserService, CurrentViewQuery, DispatchIntentCommand, FlowerView, Intent,
    LoadArtworkCommand,
};
use flower_browser_domain::ImageRef;
use tracing::{info, warn};

use crate::config::{AppConfig, DescriptionMode};

const OUTER_PADDING: f32 = 16.0;
const IMAGE_HEIGHT: f32 = 200.0;
const SECTION_GAP: f32 = 16.0;
const BUTTON_GAP: f32 = 8.0;
const BUTTON_HEIGHT: f32 = 36.0;
const TITLE_SIZE: f32 = 24.0;
const DESCRIPTION_SIZE: f32 = 16.0;

enum ArtworkSlot {
    Ready(egui::TextureHandle),
    Failed(String),
}

pub struct FlowerBrowserApp {
    service: BrowserService,
    description_mode: DescriptionMode,
    textures: HashMap<ImageRef, ArtworkSlot>,
}

impl FlowerBrowserApp {
    fn new(service: BrowserService, description_mode: DescriptionMode) -> Self {
        Self {
            service,
            description_mode,
            textures: HashMap::new(),
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.service.dispatch(DispatchIntentCommand { intent });
    }

    fn artwork_slot(&mut self, ctx: &egui::Context, image_ref: &ImageRef) -> &ArtworkSlot {
        let service = &self.service;
        self.textures.entry(image_ref.clone()).or_insert_with(|| {
            match service.load_artwork(LoadArtworkCommand {
                image_ref: image_ref.clone(),
            }) {
                Ok(artwork) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [artwork.width as usize, artwork.height as usize],
                        &artwork.rgba,
                    );
                    ArtworkSlot::Ready(ctx.load_texture(
                        image_ref.as_str(),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(error) => {
                    warn!(image_ref = %image_ref, %error, "failed to load artwork");
                    ArtworkSlot::Failed(error.to_string())
                }
            }
        })
    }

    fn draw_artwork(&mut self, ui: &mut egui::Ui, view: &FlowerView) -> bool {
        let size = egui::vec2(ui.available_width(), IMAGE_HEIGHT);
        let ctx = ui.ctx().clone();
        match self.artwork_slot(&ctx, &view.image_ref) {
            ArtworkSlot::Ready(texture) => {
                let image = egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(size)
                    .maintain_aspect_ratio(true)
                    .sense(egui::Sense::click());
                ui.add_sized(size, image).clicked()
            }
            ArtworkSlot::Failed(message) => {
                let label = egui::Label::new(format!("image unavailable: {message}"))
                    .sense(egui::Sense::click());
                ui.add_sized(size, label).clicked()
            }
        }
    }
}

impl eframe::App for FlowerBrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents: Vec<Intent> = ctx.input(keyboard_intents);

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(OUTER_PADDING))
            .show(ctx, |ui| {
                let view = self.service.current_view(CurrentViewQuery);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if self.draw_artwork(ui, &view) {
                        intents.push(Intent::ImageTapped);
                    }

                    ui.add_space(SECTION_GAP);
                    ui.label(egui::RichText::new(&view.title).size(TITLE_SIZE).strong());

                    ui.add_space(SECTION_GAP);
                    if let Some(description) = self.description_mode.description(&view) {
                        ui.label(
                            egui::RichText::new(description.trim_end()).size(DESCRIPTION_SIZE),
                        );
                        ui.add_space(SECTION_GAP);
                    }

                    ui.horizontal(|ui| {
                        let width = ((ui.available_width() - BUTTON_GAP) / 2.0).max(0.0);
                        if ui
                            .add_sized([width, BUTTON_HEIGHT], egui::Button::new("Previous"))
                            .clicked()
                        {
                            intents.push(Intent::PreviousPressed);
                        }
                        ui.add_space(BUTTON_GAP);
                        if ui
                            .add_sized([width, BUTTON_HEIGHT], egui::Button::new("Next"))
                            .clicked()
                        {
                            intents.push(Intent::NextPressed);
                        }
                    });
                });
            });

        for intent in intents {
            self.dispatch(intent);
        }
    }
}

fn keyboard_intents(input: &egui::InputState) -> Vec<Intent> {
    let mut intents = Vec::new();
    if input.key_pressed(egui::Key::ArrowLeft) {
        intents.push(Intent::PreviousPressed);
    }
    if input.key_pressed(egui::Key::ArrowRight) {
        intents.push(Intent::NextPressed);
    }
    if input.key_pressed(egui::Key::Space) {
        intents.push(Intent::ImageTapped);
    }
    intents
}

pub fn launch_window(service: BrowserService, config: &AppConfig) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    info!(
        asset_dir = %config.asset_dir,
        description_mode = ?config.description_mode,
        "opening flower browser window"
    );

    let description_mode = config.description_mode;
    eframe::run_native(
        "flower-browser",
        options,
        Box::new(move |_cc| Ok(Box::new(FlowerBrowserApp::new(service, description_mode)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
