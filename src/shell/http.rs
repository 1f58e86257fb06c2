use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::register_account::inbound::http as register_http;
use crate::modules::accounts::use_cases::register_account::inbound::page as register_page;
use crate::modules::registration::adapters::outbound::http_gateway::REGISTER_PATH;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            REGISTER_PATH,
            get(register_page::handle).post(register_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
