use lambda_http::{run, Error};
use bookshelf::core::controller::serve_http;
use bookshelf::core::domain::{Configuration, ServerMode};
use bookshelf::redirect::controller::routes;
use bookshelf::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.tracing_level());
    tracing::info!(env = %config.env, server = ?config.server, "starting redirect demo");

    match config.server {
        ServerMode::Http => serve_http(config.bind_addr, routes()).await,
        ServerMode::Lambda => run(routes()).await,
    }
}
