use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use cepr_common::address::{Address, Service};
use cepr_common::cep::Cep;
use cepr_common::error::ProviderError;

use crate::provider::AddressProvider;

/// Wire shape of `GET {base}/{cep}/json` on ViaCEP.
///
/// Key names differ from the normalized record (`localidade`/`uf`). For an
/// unknown CEP the service still answers 200 but with a bare `erro` marker
/// instead of address fields, so every field defaults and the marker is
/// checked before mapping. The marker's type has changed between a bool and
/// the string `"true"` over the years, hence the untyped value.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default, rename = "localidade")]
    city: String,
    #[serde(default, rename = "uf")]
    state: String,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

pub struct ViaCepProvider {
    client: Client,
    base_url: String,
}

impl ViaCepProvider {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url_for(&self, cep: &Cep) -> String {
        format!("{}{}/json", self.base_url, cep)
    }
}

#[async_trait]
impl AddressProvider for ViaCepProvider {
    fn service(&self) -> Service {
        Service::ViaCep
    }

    async fn fetch(&self, cep: &Cep) -> Result<Address, ProviderError> {
        let response: Response = self.client.get(self.url_for(cep)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: ViaCepResponse = response.json().await?;
        map_response(body)
    }
}

fn map_response(body: ViaCepResponse) -> Result<Address, ProviderError> {
    if body.erro.is_some() {
        return Err(ProviderError::NotFound);
    }

    Ok(Address {
        cep: body.cep,
        city: body.city,
        state: body.state,
        service: Service::ViaCep,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
