use crossbeam::channel::{Receiver, Sender};
use egui_dock::{DockState, SurfaceIndex};
use egui_toast::Toasts;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::settings::StudioSettings;
use crate::ui::{
    animation::AnimationPanel, image_edit::ImageEditPanel, text_to_image::TextToImagePanel,
    video::VideoPanel,
};

// Global atomic flag to request opening the preferences viewport from anywhere
// (e.g. navbar without direct &mut StudioApp access).
pub static OPEN_SETTINGS_REQUEST: Lazy<std::sync::atomic::AtomicBool> =
    Lazy::new(|| std::sync::atomic::AtomicBool::new(false));

/// Which request/response panel a background task reports back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenPanel {
    TextToImage,
    ImageEdit,
}

/// Result of one remote generation task, delivered to the UI thread through
/// the context's channel and routed in `receive()`.
#[derive(Debug, Clone)]
pub enum GenUpdate {
    ImageReady {
        panel: GenPanel,
        url: String,
        prompt: String,
        seed: Option<u64>,
    },
    Failed {
        panel: GenPanel,
        error: String,
    },
}

pub struct StudioApp {
    pub tree: DockState<String>,
    pub context: StudioContext,
}

pub struct StudioContext {
    pub first_run: bool,
    pub settings: StudioSettings,
    pub settings_tx: Sender<StudioSettings>,
    pub settings_rx: Receiver<StudioSettings>,
    // Draft copy of settings while editing in the preferences viewport
    pub settings_draft: Option<StudioSettings>,
    pub open_settings_modal: bool,
    // Results from background generation tasks
    pub gen_tx: Sender<GenUpdate>,
    pub gen_rx: Receiver<GenUpdate>,
    // Toasts manager and channel for async notifications
    pub toasts: Toasts,
    pub toast_tx: Sender<(egui_toast::ToastKind, String)>,
    pub toast_rx: Receiver<(egui_toast::ToastKind, String)>,
    pub open_tabs: HashSet<String>,
    // Currently focused tab title (updated by TabViewer::ui)
    pub active_tab_title: Option<String>,
    /// The single piece of session state: last successfully generated image
    /// URL. Overwritten on each text-to-image success, read by the editor.
    pub last_generated_image_url: Option<String>,
    pub text_to_image: TextToImagePanel,
    pub image_edit: ImageEditPanel,
    pub animation: AnimationPanel,
    pub video: VideoPanel,
}

impl StudioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (settings_tx, settings_rx) = crossbeam::channel::bounded(1);
        let (gen_tx, gen_rx) = crossbeam::channel::unbounded();
        let (toast_tx, toast_rx) = crossbeam::channel::unbounded();

        let tree = DockState::new(crate::ui::tabs::TABS.iter().map(|t| t.to_string()).collect());

        let mut open_tabs = HashSet::new();
        for node in tree[SurfaceIndex::main()].iter() {
            if let Some(tabs) = node.tabs() {
                for tab in tabs {
                    open_tabs.insert(tab.clone());
                }
            }
        }

        let context = StudioContext {
            first_run: true,
            settings: StudioSettings::default(),
            settings_tx,
            settings_rx,
            settings_draft: None,
            open_settings_modal: false,
            gen_tx,
            gen_rx,
            toasts: Toasts::new().anchor(eframe::egui::Align2::RIGHT_TOP, (-10.0, 10.0)),
            toast_tx,
            toast_rx,
            open_tabs,
            active_tab_title: None,
            last_generated_image_url: None,
            text_to_image: TextToImagePanel::default(),
            image_edit: ImageEditPanel::default(),
            animation: AnimationPanel::default(),
            video: VideoPanel::default(),
        };

        Self { tree, context }
    }
}

impl StudioContext {
    /// Record a fresh generation for reuse by the editor tab. Last write wins
    /// for the lifetime of the session; nothing is persisted.
    pub fn record_generated_image(&mut self, url: &str) {
        self.last_generated_image_url = Some(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_context() -> StudioContext {
        let (settings_tx, settings_rx) = crossbeam::channel::bounded(1);
        let (gen_tx, gen_rx) = crossbeam::channel::unbounded();
        let (toast_tx, toast_rx) = crossbeam::channel::unbounded();
        StudioContext {
            first_run: true,
            settings: StudioSettings::default(),
            settings_tx,
            settings_rx,
            settings_draft: None,
            open_settings_modal: false,
            gen_tx,
            gen_rx,
            toasts: Toasts::new(),
            toast_tx,
            toast_rx,
            open_tabs: HashSet::new(),
            active_tab_title: None,
            last_generated_image_url: None,
            text_to_image: TextToImagePanel::default(),
            image_edit: ImageEditPanel::default(),
            animation: AnimationPanel::default(),
            video: VideoPanel::default(),
        }
    }

    #[test]
    fn last_generated_url_is_last_write_wins() {
        let mut ctx = bare_context();
        assert!(ctx.last_generated_image_url.is_none());
        ctx.record_generated_image("https://fal.media/a.png");
        ctx.record_generated_image("https://fal.media/b.png");
        assert_eq!(
            ctx.last_generated_image_url.as_deref(),
            Some("https://fal.media/b.png")
        );
    }
}
