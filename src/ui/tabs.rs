use eframe::egui::*;
use egui_dock::{tab_viewer::OnCloseResponse, NodeIndex, SurfaceIndex};

pub const TABS: [&str; 5] = [
    "Text to Image",
    "Image Editor",
    "Character Animation",
    "Video Generator",
    "Logs",
];

impl egui_dock::TabViewer for crate::app::StudioContext {
    type Tab = String;

    fn title(&mut self, tab: &mut Self::Tab) -> WidgetText {
        tab.as_str().into()
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        self.active_tab_title = Some(tab.clone());
        match tab.as_str() {
            "Text to Image" => {
                self.text_to_image
                    .ui(ui, &self.gen_tx, &self.toast_tx, &self.settings)
            }
            "Image Editor" => self.image_edit.ui(
                ui,
                &self.gen_tx,
                &self.toast_tx,
                &self.settings,
                self.last_generated_image_url.as_deref(),
            ),
            "Character Animation" => self.animation.ui(ui, &self.toast_tx),
            "Video Generator" => self.video.ui(ui, &self.toast_tx, &self.settings),
            "Logs" => egui_logger::logger_ui()
                .warn_color(Color32::from_rgb(94, 215, 221))
                .error_color(Color32::from_rgb(255, 55, 102))
                .log_levels([true, true, true, false, false])
                .enable_category("eframe".to_string(), false)
                .enable_category("eframe::native::glow_integration".to_string(), false)
                .enable_category("egui_glow::shader_version".to_string(), false)
                .enable_category("egui_glow::painter".to_string(), false)
                .show(ui),
            _ => {
                ui.label(tab.as_str());
            }
        }
    }

    fn context_menu(
        &mut self,
        _ui: &mut Ui,
        _tab: &mut Self::Tab,
        _surface: SurfaceIndex,
        _node: NodeIndex,
    ) {
    }

    fn is_closeable(&self, _: &Self::Tab) -> bool {
        true
    }

    fn on_close(&mut self, tab: &mut Self::Tab) -> OnCloseResponse {
        self.open_tabs.remove(tab);
        OnCloseResponse::Close
    }
}
