use crossbeam::channel::Sender;
use eframe::egui::*;
use std::path::PathBuf;

use crate::fal::models;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStyle {
    #[default]
    TalkingAvatar,
    MotionTransfer,
    FullAnimation,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 3] = [
        AnimationStyle::TalkingAvatar,
        AnimationStyle::MotionTransfer,
        AnimationStyle::FullAnimation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnimationStyle::TalkingAvatar => "Talking Avatar (Kling Avatar v2)",
            AnimationStyle::MotionTransfer => "Motion Transfer (Copy a dance/action)",
            AnimationStyle::FullAnimation => "Full Character Animation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionKind {
    #[default]
    FullMotion,
    CameraOnly,
}

impl MotionKind {
    pub fn label(self) -> &'static str {
        match self {
            MotionKind::FullMotion => "video (full motion - max 30s)",
            MotionKind::CameraOnly => "image (camera movement - max 10s)",
        }
    }
}

/// Character animation tab. Collects and validates the inputs, but the
/// generation itself needs the media hosted where fal can fetch it, which is
/// out of scope here. Valid submissions get hosted-console guidance instead.
#[derive(Default)]
pub struct AnimationPanel {
    pub style: AnimationStyle,
    pub portrait: Option<PathBuf>,
    pub audio: Option<PathBuf>,
    pub reference_video: Option<PathBuf>,
    pub motion_kind: MotionKind,
    /// Console URL to surface after a valid submission.
    pub console_help: Option<&'static str>,
}

impl AnimationPanel {
    /// Validation message for the talking-avatar form, if incomplete.
    pub fn avatar_missing(&self) -> Option<&'static str> {
        if self.portrait.is_none() || self.audio.is_none() {
            Some("Please upload both portrait and audio")
        } else {
            None
        }
    }

    /// Validation message for the motion-transfer form, if incomplete.
    pub fn motion_missing(&self) -> Option<&'static str> {
        if self.portrait.is_none() || self.reference_video.is_none() {
            Some("Please upload both character image and reference video")
        } else {
            None
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, toast_tx: &Sender<(egui_toast::ToastKind, String)>) {
        ui.heading("Character Animation");
        ui.label("Choose an animation style for your character.");
        ui.separator();

        let before = self.style;
        ComboBox::new("animation-style", "Animation Style")
            .selected_text(self.style.label())
            .show_ui(ui, |ui| {
                for s in AnimationStyle::ALL {
                    ui.selectable_value(&mut self.style, s, s.label());
                }
            });
        if self.style != before {
            self.console_help = None;
        }
        ui.add_space(8.0);

        match self.style {
            AnimationStyle::TalkingAvatar => self.talking_avatar_ui(ui, toast_tx),
            AnimationStyle::MotionTransfer => self.motion_transfer_ui(ui, toast_tx),
            AnimationStyle::FullAnimation => {
                ui.label("Full character animation is only available on the hosted console for now.");
                ui.hyperlink(models::KLING_VIDEO_CONSOLE);
            }
        }

        if let Some(url) = self.console_help {
            ui.add_space(8.0);
            ui.colored_label(
                ui.style().visuals.warn_fg_color,
                "Generating from local files requires hosting them first (S3 or fal storage). \
                 Until then, run this workflow on the fal.ai console:",
            );
            ui.hyperlink(url);
            ui.weak("Upload the same portrait/audio there and generate.");
        }
    }

    fn talking_avatar_ui(&mut self, ui: &mut Ui, toast_tx: &Sender<(egui_toast::ToastKind, String)>) {
        ui.label(RichText::new("Create a Talking Avatar").strong());
        ui.label("Pick a portrait, add audio, and create a talking avatar video.");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("Pick Portrait…").clicked() {
                if let Some(p) = rfd::FileDialog::new()
                    .set_title("Portrait image (square, 1080x1080 recommended)")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file()
                {
                    self.portrait = Some(p);
                }
            }
            if let Some(p) = &self.portrait {
                ui.monospace(p.display().to_string());
            } else {
                ui.weak("no portrait selected");
            }
        });
        if let Some(p) = &self.portrait {
            Image::new(format!("file://{}", p.display()))
                .max_size(Vec2::splat(200.0))
                .ui(ui);
        }

        ui.horizontal(|ui| {
            if ui.button("Pick Audio…").clicked() {
                if let Some(p) = rfd::FileDialog::new()
                    .set_title("Audio file")
                    .add_filter("Audio", &["mp3", "wav", "m4a"])
                    .pick_file()
                {
                    self.audio = Some(p);
                }
            }
            if let Some(p) = &self.audio {
                ui.monospace(p.display().to_string());
            } else {
                ui.weak("no audio selected");
            }
        });

        ui.add_space(6.0);
        if ui.button("Generate Talking Avatar").clicked() {
            if let Some(msg) = self.avatar_missing() {
                let _ = toast_tx.try_send((egui_toast::ToastKind::Error, msg.to_string()));
            } else {
                self.console_help = Some(models::KLING_AVATAR_CONSOLE);
            }
        }
    }

    fn motion_transfer_ui(&mut self, ui: &mut Ui, toast_tx: &Sender<(egui_toast::ToastKind, String)>) {
        ui.label(RichText::new("Transfer Motion from Reference Video").strong());
        ui.label("Pick a character portrait and a reference video with the motion you want.");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("Pick Character Image…").clicked() {
                if let Some(p) = rfd::FileDialog::new()
                    .set_title("Character portrait")
                    .add_filter("Images", &["png", "jpg", "jpeg"])
                    .pick_file()
                {
                    self.portrait = Some(p);
                }
            }
            if let Some(p) = &self.portrait {
                ui.monospace(p.display().to_string());
            } else {
                ui.weak("no character image selected");
            }
        });
        if let Some(p) = &self.portrait {
            Image::new(format!("file://{}", p.display()))
                .max_size(Vec2::splat(200.0))
                .ui(ui);
        }

        ui.horizontal(|ui| {
            if ui.button("Pick Reference Video…").clicked() {
                if let Some(p) = rfd::FileDialog::new()
                    .set_title("Reference video (dance, action, etc.)")
                    .add_filter("Video", &["mp4", "mov"])
                    .pick_file()
                {
                    self.reference_video = Some(p);
                }
            }
            if let Some(p) = &self.reference_video {
                ui.monospace(p.display().to_string());
            } else {
                ui.weak("no reference video selected");
            }
        });

        ComboBox::new("motion-kind", "Motion Type")
            .selected_text(self.motion_kind.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.motion_kind, MotionKind::FullMotion, MotionKind::FullMotion.label());
                ui.selectable_value(&mut self.motion_kind, MotionKind::CameraOnly, MotionKind::CameraOnly.label());
            });

        ui.add_space(6.0);
        if ui.button("Transfer Motion").clicked() {
            if let Some(msg) = self.motion_missing() {
                let _ = toast_tx.try_send((egui_toast::ToastKind::Error, msg.to_string()));
            } else {
                self.console_help = Some(models::KLING_MOTION_CONSOLE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_needs_both_portrait_and_audio() {
        let mut panel = AnimationPanel::default();
        assert!(panel.avatar_missing().is_some());
        panel.portrait = Some(PathBuf::from("face.png"));
        assert!(panel.avatar_missing().is_some());
        panel.audio = Some(PathBuf::from("voice.mp3"));
        assert!(panel.avatar_missing().is_none());
    }

    #[test]
    fn motion_transfer_needs_image_and_video() {
        let mut panel = AnimationPanel::default();
        panel.portrait = Some(PathBuf::from("face.png"));
        assert!(panel.motion_missing().is_some());
        panel.reference_video = Some(PathBuf::from("dance.mp4"));
        assert!(panel.motion_missing().is_none());
    }
}
