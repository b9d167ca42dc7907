use crate::cep;
use clap::Parser;
use std::net::SocketAddr;

/// Runtime settings. Every flag can also come from the environment
/// (or a `.env` file).
#[derive(Parser, Clone, Debug)]
#[command(name = "kitnets-web", about = "Server-rendered front end for the kitnets API")]
pub struct Config {
    #[clap(env = "BIND_ADDR", long, default_value = "127.0.0.1:3000")]
    pub bind_addr: SocketAddr,

    #[clap(env = "MAX_WORKERS", long, default_value_t = 8)]
    pub max_workers: usize,

    /// Base URL of the kitnets backend; also serves uploaded photos.
    #[clap(env = "BACKEND_URL", long, default_value = "http://localhost:8080")]
    pub backend_url: String,

    #[clap(env = "CEP_API_URL", long, default_value = cep::DEFAULT_BASE_URL)]
    pub cep_api_url: String,

    #[clap(env = "HTTP_TIMEOUT_SECS", long, default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Per-photo upload limit.
    #[clap(env = "MAX_PHOTO_MB", long, default_value_t = 15)]
    pub max_photo_mb: u64,

    /// Cap on a whole request body, all photos included.
    #[clap(env = "MAX_REQUEST_MB", long, default_value_t = 200)]
    pub max_request_mb: u64,

    #[clap(env = "PAGE_SIZE", long, default_value_t = 20)]
    pub page_size: usize,
}
