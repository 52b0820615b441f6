//! The central **abstraction** for address lookups.
//!
//! This module defines the unified interface that the concrete lookup
//! services (BrasilAPI, ViaCEP) implement. Each provider owns its URL
//! layout and wire shape and maps both into the shared [`Address`] record.
//!
//! **Architectural Note:**
//! The selector depends strictly on this abstraction rather than on the
//! concrete submodules, so adding a third service only means adding another
//! implementation here.

use async_trait::async_trait;
use cepr_common::address::{Address, Service};
use cepr_common::cep::Cep;
use cepr_common::error::ProviderError;

mod brasil_api;
mod via_cep;

pub use brasil_api::BrasilApiProvider;
pub use via_cep::ViaCepProvider;

/// One concurrent lookup contender, bound to a single external service.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Tag attached to results so the winning answer can be attributed.
    fn service(&self) -> Service;

    /// Performs a single lookup against the upstream service.
    async fn fetch(&self, cep: &Cep) -> Result<Address, ProviderError>;
}
