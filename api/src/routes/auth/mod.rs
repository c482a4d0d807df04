//! Session endpoints
//!
//! - Account creation and sign in, both answering with a fresh token pair
//! - Refresh token exchange
//! - Sign out of every session

pub mod signin;
pub mod signout;
pub mod signup;
pub mod tokens;

pub use signin::signin;
pub use signout::signout;
pub use signup::signup;
pub use tokens::refresh_tokens;
