//! User service module: account lifecycle and profile management

mod object_name;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use object_name::object_name_from_url;
pub use password::PasswordHasher;
pub use service::UserService;
