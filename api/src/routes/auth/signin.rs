use account_core::{ImageRepository, PasswordHasher, RevocationStore, UserRepository};
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{SigninRequest, TokensResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /signin
///
/// Starts a new session. Earlier sessions of the same user stay valid.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "bob@bob.com",
///     "password": "password"
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
/// - 400 Bad Request: Invalid email or password length
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn signin<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    request: web::Json<SigninRequest>,
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

    let ctx = state.op_context();

    let user = match state
        .user_service
        .signin(&ctx, &request.email, &request.password)
        .await
    {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.token_service.issue_pair(&ctx, &user, None).await {
        Ok(tokens) => HttpResponse::Ok().json(TokensResponse::from(tokens)),
        Err(error) => handle_domain_error(error),
    }
}
