use eframe::egui::*;

use crate::app::{GenPanel, GenUpdate};
use crate::settings::{SafetyLevel, StudioSettings};
use crate::ui::status::{
    GlobalStatusIndicator, StatusState, EDIT_STATUS, SETTINGS_STATUS, T2I_STATUS,
};
use crate::ui::text_to_image::GeneratedImage;

impl crate::app::StudioApp {
    /// Per-frame pump: first-run init, then drain every channel feeding the
    /// UI thread, then render the preferences viewport if requested.
    pub fn receive(&mut self, ctx: &Context) {
        let c = &mut self.context;

        if c.first_run {
            // URL and file:// image sources need the loaders installed once.
            egui_extras::install_image_loaders(ctx);
            let settings_tx = c.settings_tx.clone();
            tokio::spawn(async move {
                SETTINGS_STATUS.set_state(StatusState::Initializing, "Loading settings");
                match crate::settings::get_settings().await {
                    Ok(settings) => {
                        log::info!("Loaded settings: safety={:?}", settings.safety_level);
                        let _ = settings_tx.try_send(settings);
                        SETTINGS_STATUS.set_state(StatusState::Idle, "Ready");
                    }
                    Err(e) => {
                        log::error!("[settings] load failed: {e}");
                        SETTINGS_STATUS.set_error(format!("{e}"));
                        let _ = settings_tx.try_send(StudioSettings::default());
                    }
                }
            });
            c.first_run = false;
        }

        if let Ok(settings) = c.settings_rx.try_recv() {
            c.settings = settings;
        }

        // Global request to open preferences (e.g. from the navbar)
        if crate::app::OPEN_SETTINGS_REQUEST.swap(false, std::sync::atomic::Ordering::Relaxed) {
            c.open_settings_modal = true;
        }

        while let Ok(update) = c.gen_rx.try_recv() {
            match update {
                GenUpdate::ImageReady { panel, url, prompt, seed } => {
                    let generated = GeneratedImage { url: url.clone(), prompt, seed };
                    match panel {
                        GenPanel::TextToImage => {
                            c.text_to_image.busy = false;
                            c.text_to_image.result = Some(generated);
                            c.last_generated_image_url = Some(url);
                            T2I_STATUS.set_state(StatusState::Idle, "Ready");
                            let _ = c.toast_tx.try_send((
                                egui_toast::ToastKind::Success,
                                "Image generated! You can now use it in other tabs.".to_string(),
                            ));
                        }
                        GenPanel::ImageEdit => {
                            c.image_edit.busy = false;
                            c.image_edit.result = Some(generated);
                            EDIT_STATUS.set_state(StatusState::Idle, "Ready");
                            let _ = c.toast_tx.try_send((
                                egui_toast::ToastKind::Success,
                                "Image edited!".to_string(),
                            ));
                        }
                    }
                }
                GenUpdate::Failed { panel, error } => {
                    match panel {
                        GenPanel::TextToImage => {
                            c.text_to_image.busy = false;
                            T2I_STATUS.set_error(error.clone());
                        }
                        GenPanel::ImageEdit => {
                            c.image_edit.busy = false;
                            EDIT_STATUS.set_error(error.clone());
                        }
                    }
                    let _ = c
                        .toast_tx
                        .try_send((egui_toast::ToastKind::Error, format!("Error: {error}")));
                }
            }
            ctx.request_repaint();
        }

        while let Ok((kind, text)) = c.toast_rx.try_recv() {
            c.toasts.add(egui_toast::Toast {
                text: text.into(),
                kind,
                options: egui_toast::ToastOptions::default()
                    .duration_in_seconds(4.0)
                    .show_progress(true),
                ..Default::default()
            });
        }

        if c.open_settings_modal {
            let mut draft = c
                .settings_draft
                .take()
                .unwrap_or_else(|| c.settings.clone());
            let mut save = false;
            let mut close = false;

            ctx.show_viewport_immediate(
                ViewportId::from_hash_of("Preferences Viewport"),
                ViewportBuilder::default()
                    .with_title("Preferences")
                    .with_inner_size([420.0, 380.0]),
                |ctx, _| {
                    CentralPanel::default().show(ctx, |ui| {
                        ui.heading("Preferences");
                        ui.separator();

                        ui.collapsing("Safety", |ui| {
                            ui.checkbox(&mut draft.safety_enabled, "Safety features enabled");
                            ui.horizontal(|ui| {
                                ui.label("Safety level:");
                                for level in SafetyLevel::ALL {
                                    ui.selectable_value(&mut draft.safety_level, level, level.label());
                                }
                            });
                            ui.label(format!("Active tolerance: {:.1}", draft.safety_tolerance()));
                            ui.weak(
                                "Creative mode gives maximum freedom. \
                                 Use Strict for family-friendly content.",
                            );
                        });
                        ui.separator();

                        ui.collapsing("Video", |ui| {
                            ComboBox::new("video-duration", "Video duration (seconds)")
                                .selected_text(format!("{}s", draft.video_duration_s))
                                .show_ui(ui, |ui| {
                                    for d in StudioSettings::VIDEO_DURATIONS {
                                        ui.selectable_value(
                                            &mut draft.video_duration_s,
                                            d,
                                            format!("{d}s"),
                                        );
                                    }
                                });
                            ui.checkbox(&mut draft.show_advanced, "Show advanced options");
                        });
                        ui.separator();

                        ui.collapsing("Provider", |ui| {
                            ui.label("fal.ai API key:");
                            let mut key_buf = draft.api_key.clone().unwrap_or_default();
                            ui.add_sized(
                                [ui.available_width(), 20.0],
                                TextEdit::singleline(&mut key_buf)
                                    .password(true)
                                    .hint_text("taken from FAL_KEY when empty"),
                            );
                            draft.api_key = if key_buf.trim().is_empty() {
                                None
                            } else {
                                Some(key_buf)
                            };
                        });
                        ui.separator();

                        ui.horizontal(|ui| {
                            if ui.button(RichText::new("Save").strong()).clicked() {
                                save = true;
                            }
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                if ui.button("Close").clicked() {
                                    close = true;
                                }
                            });
                        });
                    });
                    if ctx.input(|i| i.viewport().close_requested()) {
                        close = true;
                    }
                },
            );

            if save {
                c.settings = draft;
                crate::settings::save_settings(&c.settings);
                let _ = c.toast_tx.try_send((
                    egui_toast::ToastKind::Success,
                    "Preferences saved".to_string(),
                ));
                c.settings_draft = None;
                c.open_settings_modal = false;
            } else if close {
                c.settings_draft = None;
                c.open_settings_modal = false;
            } else {
                c.settings_draft = Some(draft);
            }
        }
    }
}
