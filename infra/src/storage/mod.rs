//! Profile image storage adapters

pub mod local_image_repository;

pub use local_image_repository::LocalImageRepository;
