pub mod detect;
pub mod landing;
pub mod settings;
