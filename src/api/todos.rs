use std::str::FromStr;

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;
use crate::models::response::ApiResponse;
use crate::models::todo::{TodoDto, TodoRequest};
use crate::repository::TodoRepository;

type Repository = web::Data<dyn TodoRepository>;

fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::from_str(id).map_err(ApiError::InvalidId)
}

fn require_body(request: TodoRequest) -> Result<String, ApiError> {
    if request.body.is_empty() {
        return Err(ApiError::MissingBody);
    }
    Ok(request.body)
}

fn parse_request(payload: &[u8]) -> Result<TodoRequest, ApiError> {
    serde_json::from_slice(payload).map_err(|err| ApiError::InvalidJson(err.to_string()))
}

fn ensure_matched(count: u64) -> Result<(), ApiError> {
    if count == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(())
}

#[get("/todos")]
pub async fn get_todos(db: Repository) -> Result<HttpResponse, ApiError> {
    let todos = db
        .list()
        .await
        .map_err(ApiError::repository("Error retrieving todos"))?;
    let todos: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::success("Todos retrieved successfully", todos)))
}

#[get("/todos/{id}")]
pub async fn get_todo_by_id(
    db: Repository,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let todo = db
        .get(&id)
        .await
        .map_err(ApiError::repository("Error retrieving todo"))?
        .ok_or(ApiError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Todo retrieved successfully",
        TodoDto::from(&todo),
    )))
}

#[post("/todos")]
pub async fn create_todo(
    db: Repository,
    new_todo: web::Json<TodoRequest>,
) -> Result<HttpResponse, ApiError> {
    let body = require_body(new_todo.into_inner())?;
    let todo = db
        .create(body)
        .await
        .map_err(ApiError::repository("Error creating todo"))?;
    tracing::info!(id = ?todo.id, "todo created");
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Todo created",
        TodoDto::from(&todo),
    )))
}

#[put("/todos/{id}")]
pub async fn update_todo_by_id(
    db: Repository,
    id: web::Path<String>,
    payload: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    // The id is checked before the payload is looked at.
    let id = parse_id(&id)?;
    let body = require_body(parse_request(&payload)?)?;
    let matched = db
        .update_body(&id, body)
        .await
        .map_err(ApiError::repository("Error updating todo"))?;
    ensure_matched(matched)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("Todo updated")))
}

#[patch("/todos/{id}")]
pub async fn complete_todo_by_id(
    db: Repository,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let matched = db
        .complete(&id)
        .await
        .map_err(ApiError::repository("Error updating todo"))?;
    ensure_matched(matched)?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("Todo completed")))
}

#[delete("/todos/{id}")]
pub async fn delete_todo_by_id(
    db: Repository,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let deleted = db
        .delete(&id)
        .await
        .map_err(ApiError::repository("Error deleting todo"))?;
    ensure_matched(deleted)?;
    tracing::info!(%id, "todo deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::ok("Todo deleted")))
}
