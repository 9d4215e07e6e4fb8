//! Server entry point: loads the tables, builds the resolver, serves HTTP.

#![forbid(unsafe_code)]

use actix_web::{App, HttpServer, middleware::Logger};
use clap::Parser;
use michinori_server::config::ServerArgs;
use michinori_server::configure_app;
use michinori_server::state::AppState;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = ServerArgs::parse();
    let state = AppState::from_args(&args).map_err(std::io::Error::other)?;
    info!(bind = %args.bind, "starting duration service");

    let app_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(configure_app(app_state.clone()))
    })
    .bind(args.bind)?
    .run()
    .await
}
