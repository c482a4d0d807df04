use account_core::{ImageRepository, PasswordHasher, RevocationStore, UserRepository};
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{SignupRequest, TokensResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::state::AppState;

/// Handler for POST /signup
///
/// Creates an account and signs it in.
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
/// ## Success (201 Created)
/// ```json
/// {
///     "tokens": { "idToken": "eyJ...", "refreshToken": "eyJ..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email or password length
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Hashing, signing or store failure
pub async fn signup<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    request: web::Json<SignupRequest>,
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
        .signup(&ctx, &request.email, &request.password)
        .await
    {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.token_service.issue_pair(&ctx, &user, None).await {
        Ok(tokens) => HttpResponse::Created().json(TokensResponse::from(tokens)),
        Err(error) => handle_domain_error(error),
    }
}
