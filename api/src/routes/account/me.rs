use account_core::{ImageRepository, PasswordHasher, RevocationStore, UserRepository};
use actix_web::{web, HttpResponse};

use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /me
///
/// Returns the stored user, not the snapshot carried in the identity token.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid identity token
/// - 404 Not Found: User no longer exists
pub async fn me<R, U, I, P>(
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

    match state.user_service.get(&ctx, auth.user.uid).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
