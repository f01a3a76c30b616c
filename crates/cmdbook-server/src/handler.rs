use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};
use serde_json::json;

use cmdbook_service::CommandService;
use cmdbook_types::{Command, CommandDraft, CommandId};

use crate::error::ServerError;

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /commands`
pub async fn list_commands(
    State(service): State<CommandService>,
) -> Result<Json<Vec<Command>>, ServerError> {
    Ok(Json(service.list()?))
}

/// `GET /commands/:id`
pub async fn get_command(
    State(service): State<CommandService>,
    Path(id): Path<u64>,
) -> Result<Json<Command>, ServerError> {
    Ok(Json(service.get(CommandId::new(id))?))
}

/// `POST /commands`
pub async fn create_command(
    State(service): State<CommandService>,
    Json(draft): Json<CommandDraft>,
) -> Result<impl IntoResponse, ServerError> {
    let created = service.create(draft)?;
    let location = format!("/commands/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// `PUT /commands/:id`
pub async fn update_command(
    State(service): State<CommandService>,
    Path(id): Path<u64>,
    Json(record): Json<Command>,
) -> Result<StatusCode, ServerError> {
    service.update(CommandId::new(id), record)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /commands/:id`
pub async fn delete_command(
    State(service): State<CommandService>,
    Path(id): Path<u64>,
) -> Result<Json<Command>, ServerError> {
    Ok(Json(service.delete(CommandId::new(id))?))
}
