use crossbeam::channel::Sender;
use eframe::egui::*;
use std::path::PathBuf;

use crate::app::{GenPanel, GenUpdate};
use crate::fal::models;
use crate::fal::types::{ImageEditRequest, ImageOutput};
use crate::fal::FalClient;
use crate::settings::StudioSettings;
use crate::ui::status::{GlobalStatusIndicator, StatusState, EDIT_STATUS};
use crate::ui::text_to_image::GeneratedImage;

/// Where the editor's source image comes from: a local file picked with the
/// native dialog, or the session's last generated URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSource {
    Local(PathBuf),
    Url(String),
}

impl EditSource {
    fn preview_uri(&self) -> String {
        match self {
            EditSource::Local(path) => format!("file://{}", path.display()),
            EditSource::Url(url) => url.clone(),
        }
    }
}

#[derive(Default)]
pub struct ImageEditPanel {
    pub source: Option<EditSource>,
    pub prompt: String,
    pub busy: bool,
    pub result: Option<GeneratedImage>,
}

impl ImageEditPanel {
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        gen_tx: &Sender<GenUpdate>,
        toast_tx: &Sender<(egui_toast::ToastKind, String)>,
        settings: &StudioSettings,
        last_generated_url: Option<&str>,
    ) {
        ui.heading("Image Editor");
        ui.label("Pick an image and describe the changes you want to make.");
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Pick Image…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_title("Choose image to edit")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file()
                {
                    self.source = Some(EditSource::Local(path));
                    self.result = None;
                }
            }
            let reuse = ui
                .add_enabled(last_generated_url.is_some(), Button::new("Use Last Generated Image"))
                .on_disabled_hover_text("Generate an image in the Text to Image tab first");
            if reuse.clicked() {
                if let Some(url) = last_generated_url {
                    self.source = Some(EditSource::Url(url.to_string()));
                    self.result = None;
                }
            }
        });

        let Some(source) = self.source.clone() else {
            ui.weak("No image selected.");
            return;
        };

        ui.add_space(6.0);
        Image::new(source.preview_uri())
            .max_size(ui.available_size() / 2.5)
            .ui(ui);
        match &source {
            EditSource::Local(path) => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Source:").underline().strong());
                    ui.monospace(path.display().to_string());
                });
                // The schnell edit endpoint is prompt-driven; local files are
                // never uploaded, so the edit starts from the prompt alone.
                ui.weak("Local files are not uploaded; the edit is driven by your prompt only.");
            }
            EditSource::Url(url) => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Source:").underline().strong());
                    ui.monospace(url);
                });
            }
        }

        ui.separator();
        ui.add_sized(
            [ui.available_width(), 80.0],
            TextEdit::multiline(&mut self.prompt)
                .hint_text("What would you like to change? e.g. 'Change the sky to purple'"),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let can_run = !self.busy && settings.has_api_key();
            let apply = ui
                .add_enabled(can_run, Button::new("Apply Edits"))
                .on_disabled_hover_text(if self.busy {
                    "A request is already in flight"
                } else {
                    "Set your fal.ai API key in Preferences (or the FAL_KEY env var)"
                });
            if apply.clicked() {
                if self.prompt.trim().is_empty() {
                    let _ = toast_tx.try_send((
                        egui_toast::ToastKind::Error,
                        "Please describe the changes you want".to_string(),
                    ));
                } else {
                    self.busy = true;
                    self.submit(gen_tx, settings);
                }
            }
            if self.busy {
                Spinner::new().ui(ui);
                ui.weak("Editing image…");
            }
        });

        if let Some(result) = &self.result {
            ui.separator();
            Image::new(result.url.as_str())
                .max_size(ui.available_size() / 1.3)
                .ui(ui);
            ui.weak("Edited Image");
            ui.horizontal(|ui| {
                if ui.button("Download Edited Image").clicked() {
                    crate::download::save_asset_dialog(&result.url, &result.prompt, toast_tx);
                }
                if ui.button("Open in Browser").clicked() {
                    let _ = open::that(&result.url);
                }
            });
        }
    }

    fn submit(&self, gen_tx: &Sender<GenUpdate>, settings: &StudioSettings) {
        let request = ImageEditRequest {
            prompt: self.prompt.clone(),
            safety_tolerance: settings.safety_tolerance(),
            num_inference_steps: models::EDIT_STEPS,
        };
        let api_key = settings.api_key.clone().unwrap_or_default();
        let tx = gen_tx.clone();
        EDIT_STATUS.clear_error();
        EDIT_STATUS.set_state(StatusState::Running, format!("{} steps", request.num_inference_steps));
        tokio::spawn(async move {
            let client = FalClient::new(api_key);
            let prompt = request.prompt.clone();
            let sent = match client
                .run::<_, ImageOutput>(models::FLUX_SCHNELL, &request)
                .await
            {
                Ok(out) => match out.first_url() {
                    Ok(url) => tx.try_send(GenUpdate::ImageReady {
                        panel: GenPanel::ImageEdit,
                        url: url.to_string(),
                        prompt,
                        seed: out.seed,
                    }),
                    Err(e) => tx.try_send(GenUpdate::Failed {
                        panel: GenPanel::ImageEdit,
                        error: e.to_string(),
                    }),
                },
                Err(e) => {
                    log::error!("[edit] request failed: {e}");
                    tx.try_send(GenUpdate::Failed {
                        panel: GenPanel::ImageEdit,
                        error: e.to_string(),
                    })
                }
            };
            if let Err(e) = sent {
                log::warn!("[edit] result dropped, channel closed: {e}");
            }
        });
    }
}
