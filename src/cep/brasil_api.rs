use crate::cep::{Address, AddressLookup, CepError};
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br/api/cep/v2";

/// CEP lookup backed by BrasilAPI v2.
pub struct BrasilApiLookup {
    client: Client,
    base_url: String,
}

impl BrasilApiLookup {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CepError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CepError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, cep: &str) -> String {
        format!("{}/{}", self.base_url, cep)
    }
}

impl AddressLookup for BrasilApiLookup {
    fn lookup(&self, cep: &str) -> Result<Address, CepError> {
        let resp = self
            .client
            .get(self.endpoint(cep))
            .send()
            .map_err(|e| CepError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::info!(cep, status = status.as_u16(), "cep lookup failed");
            return Err(CepError::NotFound(status.as_u16()));
        }

        resp.json::<Address>()
            .map_err(|e| CepError::UnexpectedShape(e.to_string()))
    }
}
