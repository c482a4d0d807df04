pub mod auth;
pub mod user;

pub use auth::{MessageResponse, RefreshTokenRequest, SigninRequest, SignupRequest, TokensResponse};
pub use user::{DetailsRequest, ImageResponse, UserResponse};
