mod error;
mod handlers;
mod models;
mod router;
mod state;

use escrow::token::{CustodyAdapter, InMemoryToken};
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use types::ids::AccountId;
use types::numeric::Amount;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_INITIAL_SUPPLY: Amount = 1_000_000_000_000;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Escrow Gateway service");

    // Stand up the token collaborator and seed a deployer account, so
    // callers can fund accounts and grant allowances through the API
    let initial_supply = std::env::var("TOKEN_INITIAL_SUPPLY")
        .ok()
        .and_then(|v| v.parse::<Amount>().ok())
        .unwrap_or(DEFAULT_INITIAL_SUPPLY);
    let deployer = AccountId::new();
    let custody = AccountId::new();

    let mut token = InMemoryToken::new();
    token
        .mint(deployer, initial_supply)
        .map_err(|e| anyhow::anyhow!("seeding initial supply: {e}"))?;

    tracing::info!("Deployer account {} seeded with {}", deployer, initial_supply);
    tracing::info!("Escrow custody account {}", custody);

    // Initialize application state
    let state = AppState::new(CustodyAdapter::new(token, custody));

    // Create router
    let app = create_router(state);

    // Bind and serve
    let bind_addr =
        std::env::var("GATEWAY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
