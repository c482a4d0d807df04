//! Profile image upload and removal
//!
//! The image travels as the raw request body with a `Content-Type` of
//! `image/jpeg` or `image/png`.

use account_core::{
    DomainError, ImageRepository, PasswordHasher, RevocationStore, UserRepository,
};
use actix_web::{
    http::header::CONTENT_LENGTH,
    web::{self, BytesMut},
    HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::StreamExt;

use crate::dto::{ImageResponse, MessageResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

const ACCEPTED_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Handler for POST /image
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "imageUrl": "http://localhost:8080/images/6f1c....png",
///     "message": "success"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty body
/// - 401 Unauthorized: Missing or invalid identity token
/// - 413 Payload Too Large: Image over the configured limit
/// - 415 Unsupported Media Type: Not a JPEG or PNG
pub async fn upload_image<R, U, I, P>(
    state: web::Data<AppState<R, U, I, P>>,
    auth: AuthContext,
    req: HttpRequest,
    payload: web::Payload,
) -> HttpResponse
where
    R: RevocationStore + 'static,
    U: UserRepository + 'static,
    I: ImageRepository + 'static,
    P: PasswordHasher + 'static,
{
    let content_type = req.content_type().to_ascii_lowercase();
    if !ACCEPTED_TYPES.contains(&content_type.as_str()) {
        let message = if content_type.is_empty() {
            "image content type is required".to_string()
        } else {
            format!("{} is not a supported image type", content_type)
        };
        return handle_domain_error(DomainError::unsupported_media_type(message));
    }

    if let Some(declared) = declared_length(&req) {
        if declared > state.max_body_bytes {
            return handle_domain_error(DomainError::PayloadTooLarge {
                max_bytes: state.max_body_bytes,
                content_length: declared,
            });
        }
    }

    let bytes = match read_limited(payload, state.max_body_bytes).await {
        Ok(bytes) if bytes.is_empty() => {
            return handle_domain_error(DomainError::bad_request("image body is required"))
        }
        Ok(bytes) => bytes,
        Err(error) => return handle_domain_error(error),
    };

    let ctx = state.op_context();

    match state
        .user_service
        .set_profile_image(&ctx, auth.user.uid, bytes, &content_type)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ImageResponse {
            image_url: user.image_url,
            message: "success".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /image
///
/// Succeeds for users without an image as well.
pub async fn delete_image<R, U, I, P>(
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

    match state.user_service.clear_profile_image(&ctx, auth.user.uid).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("success")),
        Err(error) => handle_domain_error(error),
    }
}

fn declared_length(req: &HttpRequest) -> Option<usize> {
    req.headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

async fn read_limited(mut payload: web::Payload, max_bytes: usize) -> Result<Vec<u8>, DomainError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| DomainError::bad_request(format!("unable to read image body: {}", e)))?;

        if body.len() + chunk.len() > max_bytes {
            return Err(DomainError::PayloadTooLarge {
                max_bytes,
                content_length: body.len() + chunk.len(),
            });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body.to_vec())
}
