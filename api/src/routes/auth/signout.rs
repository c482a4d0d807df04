use account_core::{ImageRepository, PasswordHasher, RevocationStore, UserRepository};
use actix_web::{web, HttpResponse};

use crate::dto::MessageResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for POST /signout
///
/// Invalidates every refresh token of the authenticated user. Identity
/// tokens already handed out stay usable until they expire.
///
/// # Headers
/// - Authorization: Bearer {id_token}
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "user signed out successfully!"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid identity token
/// - 500 Internal Server Error: Store failure
pub async fn signout<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    R: RevocationStore + 'static,
    U: UserRepository + 'static,
    I: ImageRepository + 'static,
    P: PasswordHasher + 'static,
{
    let ctx = state.op_context();

    match state.token_service.signout(&ctx, auth.user.uid).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("user signed out successfully!")),
        Err(error) => handle_domain_error(error),
    }
}
