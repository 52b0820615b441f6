use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use cepr_common::address::{Address, Service};
use cepr_common::cep::Cep;
use cepr_common::error::ProviderError;

use crate::provider::AddressProvider;

/// Wire shape of `GET {base}/{cep}` on BrasilAPI.
///
/// The service also returns neighborhood and street fields; only the three
/// the normalized record carries are decoded.
#[derive(Debug, Deserialize)]
struct BrasilApiResponse {
    cep: String,
    city: String,
    state: String,
}

pub struct BrasilApiProvider {
    client: Client,
    base_url: String,
}

impl BrasilApiProvider {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url_for(&self, cep: &Cep) -> String {
        format!("{}{}", self.base_url, cep)
    }
}

#[async_trait]
impl AddressProvider for BrasilApiProvider {
    fn service(&self) -> Service {
        Service::BrasilApi
    }

    async fn fetch(&self, cep: &Cep) -> Result<Address, ProviderError> {
        let response: Response = self.client.get(self.url_for(cep)).send().await?;

        // BrasilAPI signals an unknown CEP with a 404 body.
        match response.status() {
            StatusCode::NOT_FOUND => return Err(ProviderError::NotFound),
            status if !status.is_success() => {
                return Err(ProviderError::Status(status.as_u16()));
            }
            _ => {}
        }

        let body: BrasilApiResponse = response.json().await?;
        Ok(map_response(body))
    }
}

fn map_response(body: BrasilApiResponse) -> Address {
    Address {
        cep: body.cep,
        city: body.city,
        state: body.state,
        service: Service::BrasilApi,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
