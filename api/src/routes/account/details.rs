use account_core::{ImageRepository, PasswordHasher, RevocationStore, UserRepository};
use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{DetailsRequest, UserResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for PUT /details
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Bob",
///     "email": "bob@bob.com",
///     "website": "https://bob.dev"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email, name too long or malformed website
/// - 401 Unauthorized: Missing or invalid identity token
/// - 409 Conflict: Email belongs to another account
pub async fn update_details<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    auth: AuthContext,
    request: web::Json<DetailsRequest>,
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

    match state
        .user_service
        .update_details(
            &ctx,
            auth.user.uid,
            &request.name,
            &request.email,
            &request.website,
        )
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
