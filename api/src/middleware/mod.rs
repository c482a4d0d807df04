pub mod auth;
pub mod timeout;

pub use auth::{AuthContext, JwtAuth};
pub use timeout::Timeout;
