use eframe::egui::*;
use egui_dock::SurfaceIndex;

use crate::ui::{status, tabs::TABS};

impl crate::app::StudioApp {
    pub fn navbar(&mut self, ctx: &Context) {
        TopBottomPanel::top("StudioTopPanel")
            .exact_height(24.)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.menu_button(" File ", |ui| {
                        if ui.button("Preferences").clicked() {
                            crate::app::OPEN_SETTINGS_REQUEST
                                .store(true, std::sync::atomic::Ordering::Relaxed);
                            ui.close();
                        }
                        ui.separator();
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(ViewportCommand::Close);
                        }
                    });

                    ui.menu_button(" View ", |ui| {
                        for tab in TABS {
                            if ui
                                .selectable_label(self.context.open_tabs.contains(tab), tab)
                                .clicked()
                            {
                                if let Some(index) = self.tree.find_tab(&tab.to_string()) {
                                    self.tree.remove_tab(index);
                                    self.context.open_tabs.remove(tab);
                                } else {
                                    self.tree[SurfaceIndex::main()]
                                        .push_to_focused_leaf(tab.to_string());
                                    self.context.open_tabs.insert(tab.to_string());
                                }
                                ui.close();
                            }
                        }
                    });

                    ui.add_space(5.);
                    ui.separator();
                    ui.add_space(5.);
                    ui.label(RichText::new("Character Animation Studio").strong());

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        status::status_bar_inline(ui);
                        if !self.context.settings.has_api_key() {
                            ui.colored_label(
                                ui.style().visuals.error_fg_color,
                                "No API key — set FAL_KEY or open Preferences",
                            );
                        }
                    });
                });
            });

        TopBottomPanel::bottom("StudioBottomPanel")
            .exact_height(24.)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let s = &self.context.settings;
                    let level = if s.safety_enabled {
                        s.safety_level.label()
                    } else {
                        "Off"
                    };
                    ui.label(format!(
                        "Safety: {level} (tolerance {:.1})",
                        s.safety_tolerance()
                    ));
                    ui.separator();
                    ui.label(format!("Video duration: {}s", s.video_duration_s));
                    if s.show_advanced {
                        ui.separator();
                        ui.weak("advanced options on");
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.weak("Powered by fal.ai");
                        ui.separator();
                        ui.weak("Free credits: $10/month (~20-50 videos)");
                    });
                });
            });
    }
}
