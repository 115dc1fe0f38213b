use crossbeam::channel::Sender;
use eframe::egui::*;
use std::path::PathBuf;

use crate::fal::models;
use crate::settings::StudioSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoKind {
    #[default]
    ImageToVideo,
    TextToVideo,
}

impl VideoKind {
    pub fn label(self) -> &'static str {
        match self {
            VideoKind::ImageToVideo => "Image-to-Video (cinematic motion)",
            VideoKind::TextToVideo => "Text-to-Video (full generation)",
        }
    }
}

/// Video generator tab. Like the animation tab this is a guided stub: inputs
/// are collected and validated, then the user is pointed at the Kling console
/// (video runs burn paid credits, and image sources would need hosting).
#[derive(Default)]
pub struct VideoPanel {
    pub kind: VideoKind,
    pub image: Option<PathBuf>,
    pub motion_prompt: String,
    pub text_prompt: String,
    pub show_console_help: bool,
}

impl VideoPanel {
    /// Validation message for the currently selected form, if incomplete.
    pub fn missing(&self) -> Option<&'static str> {
        match self.kind {
            VideoKind::ImageToVideo => {
                if self.image.is_none() {
                    Some("Please pick an image first")
                } else if self.motion_prompt.trim().is_empty() {
                    Some("Please describe the motion")
                } else {
                    None
                }
            }
            VideoKind::TextToVideo => {
                if self.text_prompt.trim().is_empty() {
                    Some("Please enter a video description")
                } else {
                    None
                }
            }
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        toast_tx: &Sender<(egui_toast::ToastKind, String)>,
        settings: &StudioSettings,
    ) {
        ui.heading("Video Generator");
        ui.label("Generate short videos from images or text prompts.");
        ui.separator();

        let before = self.kind;
        ComboBox::new("video-kind", "What would you like to create?")
            .selected_text(self.kind.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.kind, VideoKind::ImageToVideo, VideoKind::ImageToVideo.label());
                ui.selectable_value(&mut self.kind, VideoKind::TextToVideo, VideoKind::TextToVideo.label());
            });
        if self.kind != before {
            self.show_console_help = false;
        }
        ui.add_space(8.0);

        match self.kind {
            VideoKind::ImageToVideo => {
                ui.label(RichText::new("Transform Image into Video").strong());
                ui.horizontal(|ui| {
                    if ui.button("Pick Image…").clicked() {
                        if let Some(p) = rfd::FileDialog::new()
                            .set_title("Source image")
                            .add_filter("Images", &["png", "jpg", "jpeg"])
                            .pick_file()
                        {
                            self.image = Some(p);
                        }
                    }
                    if let Some(p) = &self.image {
                        ui.monospace(p.display().to_string());
                    } else {
                        ui.weak("no image selected");
                    }
                });
                if let Some(p) = &self.image {
                    Image::new(format!("file://{}", p.display()))
                        .max_size(Vec2::new(300.0, 300.0))
                        .ui(ui);
                }
                ui.add_sized(
                    [ui.available_width(), 60.0],
                    TextEdit::multiline(&mut self.motion_prompt)
                        .hint_text("Describe the motion, e.g. 'Camera pans left, slow gentle motion'"),
                );
            }
            VideoKind::TextToVideo => {
                ui.label(RichText::new("Generate Video from Text").strong());
                ui.add_sized(
                    [ui.available_width(), 100.0],
                    TextEdit::multiline(&mut self.text_prompt).hint_text(
                        "e.g. 'A cat walking through a sunny garden, slow cinematic motion'",
                    ),
                );
            }
        }

        ui.add_space(6.0);
        if ui.button("Generate Video").clicked() {
            if let Some(msg) = self.missing() {
                let _ = toast_tx.try_send((egui_toast::ToastKind::Error, msg.to_string()));
            } else {
                self.show_console_help = true;
            }
        }

        if self.show_console_help {
            ui.add_space(8.0);
            ui.colored_label(
                ui.style().visuals.warn_fg_color,
                format!(
                    "Video generation spends fal credits (roughly 0.5-2 per {}s clip; the free tier \
                     covers ~20-50 videos per month). Run it on the hosted console:",
                    settings.video_duration_s
                ),
            );
            ui.hyperlink(models::KLING_VIDEO_CONSOLE);
            ui.weak("Upload your image and prompt there.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_to_video_needs_image_then_motion_prompt() {
        let mut panel = VideoPanel::default();
        assert_eq!(panel.missing(), Some("Please pick an image first"));
        panel.image = Some(PathBuf::from("scene.png"));
        assert_eq!(panel.missing(), Some("Please describe the motion"));
        panel.motion_prompt = "camera pans left".into();
        assert!(panel.missing().is_none());
    }

    #[test]
    fn text_to_video_needs_a_prompt() {
        let mut panel = VideoPanel {
            kind: VideoKind::TextToVideo,
            ..Default::default()
        };
        assert_eq!(panel.missing(), Some("Please enter a video description"));
        panel.text_prompt = "  ".into();
        assert!(panel.missing().is_some());
        panel.text_prompt = "a cat in a garden".into();
        assert!(panel.missing().is_none());
    }
}
