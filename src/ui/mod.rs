pub mod animation;
pub mod image_edit;
pub mod navbar;
pub mod status;
pub mod tabs;
pub mod text_to_image;
pub mod video;
