use eframe::egui::*;
use once_cell::sync::Lazy;
use std::sync::RwLock;

/// High-level lifecycle state for one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusState {
    Idle,
    Initializing,
    Running,
    Error,
}

impl StatusState {
    pub fn color(self, style: &Style) -> Color32 {
        match self {
            StatusState::Idle | StatusState::Initializing | StatusState::Running => {
                style.visuals.warn_fg_color
            }
            StatusState::Error => style.visuals.error_fg_color,
        }
    }
}

/// Snapshot describing one indicator.
#[derive(Debug, Clone)]
pub struct StatusMeta {
    pub name: &'static str,
    pub model: Option<&'static str>,
    pub detail: String,
    pub state: StatusState,
    pub error: Option<String>,
}

impl Default for StatusMeta {
    fn default() -> Self {
        Self {
            name: "",
            model: None,
            detail: String::new(),
            state: StatusState::Idle,
            error: None,
        }
    }
}

/// Anything that can render itself as a compact indicator + hover card.
pub trait GlobalStatusIndicator {
    fn key(&self) -> &'static str;
    fn snapshot(&self) -> StatusMeta;
    fn set_state(&self, state: StatusState, detail: impl Into<String>);
    fn set_detail(&self, detail: impl Into<String>);
    /// Set an error message and mark state as Error (shown in the hover card).
    fn set_error(&self, err: impl Into<String>);
    fn clear_error(&self);
}

#[derive(Debug)]
struct GlobalStatusInner {
    meta: StatusMeta,
}

static STATUSES: Lazy<RwLock<std::collections::HashMap<&'static str, GlobalStatusInner>>> =
    Lazy::new(|| RwLock::new(Default::default()));

/// Handle for a registered global status.
#[derive(Clone)]
pub struct RegisteredStatus {
    key: &'static str,
}

impl RegisteredStatus {
    pub fn register(name: &'static str, model: Option<&'static str>) -> Self {
        let mut w = STATUSES.write().unwrap();
        w.entry(name).or_insert_with(|| GlobalStatusInner {
            meta: StatusMeta {
                name,
                model,
                ..Default::default()
            },
        });
        Self { key: name }
    }
}

impl GlobalStatusIndicator for RegisteredStatus {
    fn key(&self) -> &'static str {
        self.key
    }
    fn snapshot(&self) -> StatusMeta {
        STATUSES
            .read()
            .unwrap()
            .get(self.key)
            .map(|i| i.meta.clone())
            .unwrap_or_default()
    }
    fn set_state(&self, state: StatusState, detail: impl Into<String>) {
        if let Some(inner) = STATUSES.write().unwrap().get_mut(self.key) {
            inner.meta.state = state;
            inner.meta.detail = detail.into();
        }
    }
    fn set_detail(&self, detail: impl Into<String>) {
        if let Some(inner) = STATUSES.write().unwrap().get_mut(self.key) {
            inner.meta.detail = detail.into();
        }
    }
    fn set_error(&self, err: impl Into<String>) {
        if let Some(inner) = STATUSES.write().unwrap().get_mut(self.key) {
            inner.meta.error = Some(err.into());
            inner.meta.state = StatusState::Error;
        }
    }
    fn clear_error(&self) {
        if let Some(inner) = STATUSES.write().unwrap().get_mut(self.key) {
            inner.meta.error = None;
        }
    }
}

pub fn all_snapshots() -> Vec<StatusMeta> {
    STATUSES
        .read()
        .map(|m| m.values().map(|i| i.meta.clone()).collect())
        .unwrap_or_default()
}

// One indicator per remote operation, plus the settings loader.
pub static T2I_STATUS: Lazy<RegisteredStatus> =
    Lazy::new(|| RegisteredStatus::register("T2I", Some(crate::fal::models::FLUX_PRO_V1_1)));
pub static EDIT_STATUS: Lazy<RegisteredStatus> =
    Lazy::new(|| RegisteredStatus::register("EDIT", Some(crate::fal::models::FLUX_SCHNELL)));
pub static SETTINGS_STATUS: Lazy<RegisteredStatus> =
    Lazy::new(|| RegisteredStatus::register("SETTINGS", None));

/// Compact horizontal status section suitable for embedding in a toolbar.
pub fn status_bar_inline(ui: &mut Ui) {
    for meta in all_snapshots() {
        indicator_small(ui, &meta);
    }
}

fn indicator_small(ui: &mut Ui, meta: &StatusMeta) {
    ui.add_space(5.);
    let busy = matches!(meta.state, StatusState::Initializing | StatusState::Running);
    let response = ui
        .horizontal(|ui| {
            if busy {
                Spinner::new().size(12.).ui(ui);
            }
            ui.colored_label(meta.state.color(ui.style()), meta.name)
        })
        .inner;

    response.on_hover_ui(|ui| {
        ui.set_max_width(420.);
        ui.vertical_centered(|ui| {
            ui.heading(meta.name);
            ui.separator();
        });

        if let Some(model) = meta.model {
            ui.horizontal(|ui| {
                ui.colored_label(ui.style().visuals.warn_fg_color, RichText::new("Model").underline());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.monospace(model);
                });
            });
        }

        ui.horizontal(|ui| {
            ui.colored_label(ui.style().visuals.warn_fg_color, RichText::new("State").underline());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("{:?}", meta.state));
            });
        });

        if !meta.detail.is_empty() {
            ui.horizontal(|ui| {
                ui.colored_label(ui.style().visuals.warn_fg_color, RichText::new("Detail").underline());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(&meta.detail);
                });
            });
        }

        if let Some(err) = &meta.error {
            ui.horizontal(|ui| {
                ui.colored_label(ui.style().visuals.error_fg_color, RichText::new("Error").underline());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.colored_label(ui.style().visuals.error_fg_color, err);
                });
            });
        }
    });
    ui.add_space(5.);
}
