use crate::handlers::{escrow, token};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/escrow/deposit", post(escrow::deposit))
        .route("/escrow/withdraw", post(escrow::withdraw))
        .route("/escrow/identifier/{amount}", get(escrow::identifier))
        .route("/escrow/records/{identifier}", get(escrow::record))
        .route("/token/balance/{account_id}", get(token::balance))
        .route("/token/mint", post(token::mint))
        .route("/token/transfer", post(token::transfer))
        .route("/token/approve", post(token::approve));

    Router::new()
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
