use crossbeam::channel::Sender;
use eframe::egui::*;

use crate::app::{GenPanel, GenUpdate};
use crate::fal::models;
use crate::fal::types::{AspectRatio, ImageOutput, TextToImageRequest};
use crate::fal::FalClient;
use crate::settings::StudioSettings;
use crate::ui::status::{GlobalStatusIndicator, StatusState, T2I_STATUS};

/// A successfully generated asset as shown in a panel.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    pub prompt: String,
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct TextToImagePanel {
    pub prompt: String,
    pub aspect: AspectRatio,
    pub busy: bool,
    pub result: Option<GeneratedImage>,
}

impl TextToImagePanel {
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        gen_tx: &Sender<GenUpdate>,
        toast_tx: &Sender<(egui_toast::ToastKind, String)>,
        settings: &StudioSettings,
    ) {
        ui.heading("Generate Images from Text");
        ui.label("Describe what you want to create, and Flux will generate it.");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Aspect Ratio:");
            ComboBox::new("t2i-aspect", "")
                .selected_text(self.aspect.label())
                .show_ui(ui, |ui| {
                    for a in AspectRatio::ALL {
                        ui.selectable_value(&mut self.aspect, a, a.label());
                    }
                });
        });

        ui.add_sized(
            [ui.available_width(), 100.0],
            TextEdit::multiline(&mut self.prompt)
                .hint_text("e.g. 'A serene mountain landscape at sunset with golden light'"),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let can_generate = !self.busy && settings.has_api_key();
            let generate = ui
                .add_enabled(can_generate, Button::new("Generate Image"))
                .on_disabled_hover_text(if self.busy {
                    "A request is already in flight"
                } else {
                    "Set your fal.ai API key in Preferences (or the FAL_KEY env var)"
                });
            if generate.clicked() {
                if self.prompt.trim().is_empty() {
                    let _ = toast_tx.try_send((
                        egui_toast::ToastKind::Error,
                        "Please enter a prompt".to_string(),
                    ));
                } else {
                    self.busy = true;
                    self.submit(gen_tx, settings);
                }
            }
            if self.busy {
                Spinner::new().ui(ui);
                ui.weak("Generating image…");
            }
        });

        if let Some(result) = &self.result {
            ui.separator();
            Image::new(result.url.as_str())
                .max_size(ui.available_size() / 1.3)
                .ui(ui);
            ui.weak(&result.prompt);
            if let Some(seed) = result.seed {
                ui.weak(format!("seed {seed}"));
            }
            ui.horizontal(|ui| {
                if ui.button("Download Image").clicked() {
                    crate::download::save_asset_dialog(&result.url, &result.prompt, toast_tx);
                }
                if ui.button("Open in Browser").clicked() {
                    let _ = open::that(&result.url);
                }
            });
            ui.label("You can now reuse this image in the Image Editor tab.");
        }
    }

    fn submit(&self, gen_tx: &Sender<GenUpdate>, settings: &StudioSettings) {
        let request = TextToImageRequest {
            prompt: self.prompt.clone(),
            aspect_ratio: self.aspect,
            safety_tolerance: settings.safety_tolerance(),
            seed: Some(models::T2I_SEED),
        };
        let api_key = settings.api_key.clone().unwrap_or_default();
        let tx = gen_tx.clone();
        T2I_STATUS.clear_error();
        T2I_STATUS.set_state(StatusState::Running, format!("tolerance {:.1}", request.safety_tolerance));
        tokio::spawn(async move {
            let client = FalClient::new(api_key);
            let prompt = request.prompt.clone();
            let sent = match client
                .run::<_, ImageOutput>(models::FLUX_PRO_V1_1, &request)
                .await
            {
                Ok(out) => match out.first_url() {
                    Ok(url) => tx.try_send(GenUpdate::ImageReady {
                        panel: GenPanel::TextToImage,
                        url: url.to_string(),
                        prompt,
                        seed: out.seed,
                    }),
                    Err(e) => tx.try_send(GenUpdate::Failed {
                        panel: GenPanel::TextToImage,
                        error: e.to_string(),
                    }),
                },
                Err(e) => {
                    log::error!("[t2i] generation failed: {e}");
                    tx.try_send(GenUpdate::Failed {
                        panel: GenPanel::TextToImage,
                        error: e.to_string(),
                    })
                }
            };
            if let Err(e) = sent {
                log::warn!("[t2i] result dropped, channel closed: {e}");
            }
        });
    }
}
