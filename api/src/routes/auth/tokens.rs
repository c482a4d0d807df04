use account_core::{ImageRepository, PasswordHasher, RevocationStore, UserRepository};
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{RefreshTokenRequest, TokensResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /tokens
///
/// Exchanges a refresh token for a new pair. The presented refresh token is
/// consumed; presenting it again fails.
///
/// # Request Body
///
/// ```json
/// {
///     "refreshToken": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "tokens": { "idToken": "eyJ...", "refreshToken": "eyJ..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing refresh token
/// - 401 Unauthorized: Invalid, expired, reused or signed out refresh token
/// - 404 Not Found: The token's user no longer exists
pub async fn refresh_tokens<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    R: RevocationStore + 'static,
    U: UserRepository + 'static,
    I: ImageRepository + 'static,
    P: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let refresh = match state.token_service.validate_refresh(&request.refresh_token) {
        Ok(refresh) => refresh,
        Err(error) => return handle_domain_error(error),
    };

    let ctx = state.op_context();

    let user = match state.user_service.get(&ctx, refresh.uid).await {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state
        .token_service
        .issue_pair(&ctx, &user, Some(refresh.id))
        .await
    {
        Ok(tokens) => HttpResponse::Ok().json(TokensResponse::from(tokens)),
        Err(error) => handle_domain_error(error),
    }
}
