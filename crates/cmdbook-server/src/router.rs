use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use cmdbook_service::CommandService;

use crate::handler;

/// Build the axum router with all catalog endpoints.
pub fn build_router(service: CommandService) -> Router {
    Router::new()
        .route(
            "/commands",
            get(handler::list_commands).post(handler::create_command),
        )
        .route(
            "/commands/:id",
            get(handler::get_command)
                .put(handler::update_command)
                .delete(handler::delete_command),
        )
        .route("/health", get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
