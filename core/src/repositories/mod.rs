pub mod image;
pub mod revocation;
pub mod user;

pub use image::{ImageRepository, InMemoryImageRepository};
pub use revocation::{InMemoryRevocationStore, RevocationStore};
pub use user::{InMemoryUserRepository, UserRepository};
