use lambda_http::{run, Error};
use bookshelf::books::factory::create_book_repository;
use bookshelf::catalog::controller::routes;
use bookshelf::core::controller::{serve_http, AppState};
use bookshelf::core::domain::{Configuration, ServerMode};
use bookshelf::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.tracing_level());
    tracing::info!(env = %config.env, server = ?config.server, store = ?config.store, "starting catalog");

    let state = AppState::new(config.clone(), create_book_repository(config.store));
    match config.server {
        ServerMode::Http => serve_http(config.bind_addr, routes(state)).await,
        ServerMode::Lambda => run(routes(state)).await,
    }
}
