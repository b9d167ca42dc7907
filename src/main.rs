use crate::app::App;
use crate::config::Config;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod cep;
mod config;
mod domain;
mod errors;
mod forms;
mod guard;
mod handlers;
mod notice;
mod responses;
mod router;
mod session;
mod templates;


fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build backend clients");
            std::process::exit(1);
        }
    };

    tracing::info!(
        addr = %config.bind_addr,
        backend = %config.backend_url,
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%method, %path, error = %err, "request failed");
                html_error_response(err)
            }
        };

        tracing::debug!(%method, %path, status = resp.status().as_u16(), "handled");
        resp
    });

    match result {
        Ok(()) => tracing::info!("server shut down cleanly"),
        Err(e) => tracing::error!(error = %e, "server ended with error"),
    }
}
