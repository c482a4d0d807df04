//! Endpoints operating on the signed-in user's own account

pub mod details;
pub mod image;
pub mod me;

pub use details::update_details;
pub use image::{delete_image, upload_image};
pub use me::me;
