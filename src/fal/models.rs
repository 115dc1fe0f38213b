//! Model identifiers and hosted-console URLs for the fal.ai endpoints the
//! studio talks to (or, for the animation/video paths, points the user at).

/// Text-to-image generation.
pub const FLUX_PRO_V1_1: &str = "fal-ai/flux-pro/v1.1";
/// Fast prompt-driven edits (4 inference steps).
pub const FLUX_SCHNELL: &str = "fal-ai/flux-schnell";

// File-based workflows (portrait + audio, motion reference videos) need the
// media hosted somewhere fal can fetch it. That is out of scope here, so the
// animation and video panels direct users to the hosted consoles instead.
pub const KLING_AVATAR_CONSOLE: &str =
    "https://fal.ai/models/fal-ai/kling-video/ai-avatar/v2/pro";
pub const KLING_MOTION_CONSOLE: &str =
    "https://fal.ai/models/fal-ai/kling-video/v2.6/standard/motion-control";
pub const KLING_VIDEO_CONSOLE: &str =
    "https://fal.ai/models/fal-ai/kling-video/v2.6/standard";

/// Fixed seed for text-to-image so reruns of the same prompt are comparable.
pub const T2I_SEED: u64 = 42;

/// Inference steps for the schnell edit path.
pub const EDIT_STEPS: u32 = 4;
