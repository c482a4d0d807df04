use std::sync::Arc;
use std::time::Duration;

use account_core::{
    ImageRepository, OpContext, PasswordHasher, RevocationStore, TokenService, UserRepository,
    UserService,
};
use account_shared::config::ServerConfig;

/// Application state shared by every handler
pub struct AppState<R, U, I, P>
where
    R: RevocationStore,
    U: UserRepository,
    I: ImageRepository,
    P: PasswordHasher,
{
    pub token_service: Arc<TokenService<R>>,
    pub user_service: Arc<UserService<U, I, P>>,
    /// Upper bound on the work done for one request
    pub handler_timeout: Duration,
    /// Largest accepted profile image
    pub max_body_bytes: usize,
}

impl<R, U, I, P> AppState<R, U, I, P>
where
    R: RevocationStore,
    U: UserRepository,
    I: ImageRepository,
    P: PasswordHasher,
{
    pub fn new(
        token_service: TokenService<R>,
        user_service: UserService<U, I, P>,
        server: &ServerConfig,
    ) -> Self {
        Self {
            token_service: Arc::new(token_service),
            user_service: Arc::new(user_service),
            handler_timeout: server.handler_timeout_duration(),
            max_body_bytes: server.max_body_bytes,
        }
    }

    /// Operation context carrying this request's deadline
    pub fn op_context(&self) -> OpContext {
        OpContext::with_timeout(self.handler_timeout)
    }
}
