use anyhow::Result;
use serde::{Deserialize, Serialize, Serializer};

/// Aspect ratios offered by the text-to-image panel. Serialized as the wire
/// value the provider expects ("1:1", "16:9", "9:16").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    #[default]
    Square,
    Landscape,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Square,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1 (Square)",
            AspectRatio::Landscape => "16:9 (Landscape)",
            AspectRatio::Portrait => "9:16 (Portrait)",
        }
    }

    pub fn api_value(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.api_value())
    }
}

/// Job submission for `fal-ai/flux-pro/v1.1`.
#[derive(Debug, Clone, Serialize)]
pub struct TextToImageRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub safety_tolerance: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Job submission for `fal-ai/flux-schnell`. The source image is not
/// transmitted; the edit endpoint is driven by the prompt alone.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEditRequest {
    pub prompt: String,
    pub safety_tolerance: f32,
    pub num_inference_steps: u32,
}

/// One output asset in a provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Provider response for both image endpoints: a list of output assets plus
/// the seed actually used. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageOutput {
    #[serde(default)]
    pub images: Vec<ImageAsset>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ImageOutput {
    pub fn first_url(&self) -> Result<&str> {
        self.images
            .first()
            .map(|a| a.url.as_str())
            .ok_or_else(|| anyhow::anyhow!("no image in provider response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_to_image_request_serializes_displayed_parameters() {
        let req = TextToImageRequest {
            prompt: "a serene mountain landscape at sunset".into(),
            aspect_ratio: AspectRatio::Landscape,
            safety_tolerance: 0.7,
            seed: Some(42),
        };
        let v = serde_json::to_value(&req).expect("serialize");
        assert_eq!(v["prompt"], "a serene mountain landscape at sunset");
        assert_eq!(v["aspect_ratio"], "16:9");
        assert!((v["safety_tolerance"].as_f64().expect("tolerance") - 0.7).abs() < 1e-6);
        assert_eq!(v["seed"], 42);
    }

    #[test]
    fn seed_is_omitted_when_unset() {
        let req = TextToImageRequest {
            prompt: "p".into(),
            aspect_ratio: AspectRatio::Square,
            safety_tolerance: 0.9,
            seed: None,
        };
        let v = serde_json::to_value(&req).expect("serialize");
        assert!(v.get("seed").is_none());
        assert_eq!(v["aspect_ratio"], "1:1");
    }

    #[test]
    fn edit_request_carries_steps() {
        let req = ImageEditRequest {
            prompt: "change the sky to purple".into(),
            safety_tolerance: 0.5,
            num_inference_steps: 4,
        };
        let v = serde_json::to_value(&req).expect("serialize");
        assert_eq!(v["num_inference_steps"], 4);
    }

    #[test]
    fn response_parse_yields_first_asset_url() {
        let raw = r#"{
            "images": [
                {"url": "https://fal.media/files/abc/out.png", "width": 1024, "height": 1024, "content_type": "image/png"},
                {"url": "https://fal.media/files/abc/out2.png"}
            ],
            "seed": 42,
            "timings": {"inference": 1.8},
            "has_nsfw_concepts": [false]
        }"#;
        let out: ImageOutput = serde_json::from_str(raw).expect("parse");
        assert_eq!(out.first_url().expect("url"), "https://fal.media/files/abc/out.png");
        assert_eq!(out.seed, Some(42));
        assert_eq!(out.images[0].width, Some(1024));
    }

    #[test]
    fn empty_image_list_is_an_error_not_a_panic() {
        let out: ImageOutput = serde_json::from_str(r#"{"images": []}"#).expect("parse");
        assert!(out.first_url().is_err());
    }
}
