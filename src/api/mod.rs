use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{get, web, HttpResponse, Responder, Result};

use crate::error::ApiError;
use crate::models::response::{ApiResponse, VersionResponse};

pub mod todos;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(VersionResponse {
        message: "Hello, World!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ApiResponse::error("Resource not found", None)))
}

/// Turns server errors that did not already render an envelope into one.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler_server(render_internal_error)
}

fn render_internal_error<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .response()
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().starts_with(b"application/json"));
    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, res) = res.into_parts();
    let detail = res.error().map(|err| err.to_string());
    tracing::error!(status = %res.status(), error = ?detail, "unhandled server error");
    let response = HttpResponse::InternalServerError()
        .json(ApiResponse::error("Internal server error", detail));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::InvalidJson(err.to_string()).into()),
    )
    .service(index)
    .service(
        web::scope("/api")
            .service(todos::get_todos)
            .service(todos::get_todo_by_id)
            .service(todos::create_todo)
            .service(todos::update_todo_by_id)
            .service(todos::complete_todo_by_id)
            .service(todos::delete_todo_by_id),
    );
}
