//! Application factory wiring routes, middleware and shared state

use std::sync::Arc;

use account_core::{
    DomainError, IdentityValidator, ImageRepository, PasswordHasher, RevocationStore,
    UserRepository,
};
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use crate::handlers::ApiError;
use crate::middleware::{JwtAuth, Timeout};
use crate::routes::{account, auth, health};
use crate::state::AppState;

/// Creates and configures the application with all routes and middleware
///
/// Every endpoint lives under `base_url`; `/health` sits at the root.
pub fn create_app<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    base_url: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: RevocationStore + 'static,
    U: UserRepository + 'static,
    I: ImageRepository + 'static,
    P: PasswordHasher + 'static,
{
    let validator: Arc<dyn IdentityValidator> = state.token_service.clone();
    let timeout = Timeout::new(state.handler_timeout);

    App::new()
        .app_data(state)
        .app_data(json_config())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope(base_url)
                .wrap(timeout)
                .route("/signup", web::post().to(auth::signup::<R, U, I, P>))
                .route("/signin", web::post().to(auth::signin::<R, U, I, P>))
                .route("/tokens", web::post().to(auth::refresh_tokens::<R, U, I, P>))
                .service(
                    web::resource("/signout")
                        .route(web::post().to(auth::signout::<R, U, I, P>))
                        .wrap(JwtAuth::new(validator.clone())),
                )
                .service(
                    web::resource("/me")
                        .route(web::get().to(account::me::<R, U, I, P>))
                        .wrap(JwtAuth::new(validator.clone())),
                )
                .service(
                    web::resource("/details")
                        .route(web::put().to(account::update_details::<R, U, I, P>))
                        .wrap(JwtAuth::new(validator.clone())),
                )
                .service(
                    web::resource("/image")
                        .route(web::post().to(account::upload_image::<R, U, I, P>))
                        .route(web::delete().to(account::delete_image::<R, U, I, P>))
                        .wrap(JwtAuth::new(validator)),
                ),
        )
        .default_service(web::route().to(health::not_found))
}

/// Malformed JSON bodies answer with the standard 400 envelope
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError(DomainError::bad_request(format!("invalid request body: {}", err))).into()
    })
}
