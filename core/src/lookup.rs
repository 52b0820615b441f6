//! # Lookup Race Selector
//!
//! Implements the core "best of two latencies" use case.
//!
//! One detached task is spawned per provider; each delivers its result into
//! a shared queue. The selector drains that queue against a single deadline
//! timer: the first successful answer wins, explicit failures are collected
//! so the other service can still win, and nothing cancels the losing fetch
//! because the process exits right after the winner is printed.

use std::sync::Arc;
use std::time::Duration;

use cepr_common::address::{Address, Service};
use cepr_common::cep::Cep;
use cepr_common::config::Config;
use cepr_common::error::ProviderError;
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::provider::{AddressProvider, BrasilApiProvider, ViaCepProvider};

/// Final outcome of a race between the configured providers.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The fastest successful provider's answer.
    Resolved(Address),
    /// Every provider reported an explicit failure before the deadline.
    Failed(Vec<(Service, ProviderError)>),
    /// No provider produced any result within the deadline.
    TimedOut,
}

/// Executes a full lookup race against both public services.
pub async fn perform_lookup(cep: &Cep, cfg: &Config) -> LookupOutcome {
    let client = Client::new();
    let providers: Vec<Arc<dyn AddressProvider>> = vec![
        Arc::new(BrasilApiProvider::new(
            client.clone(),
            cfg.brasil_api_base_url.clone(),
        )),
        Arc::new(ViaCepProvider::new(client, cfg.via_cep_base_url.clone())),
    ];

    race(providers, cep, cfg.timeout).await
}

/// Races an arbitrary set of providers against a single deadline.
pub async fn race(
    providers: Vec<Arc<dyn AddressProvider>>,
    cep: &Cep,
    deadline: Duration,
) -> LookupOutcome {
    let contenders: usize = providers.len();
    // Capacity matches the contender count so senders never block, even
    // after the selector has already returned.
    let (tx, mut rx) =
        mpsc::channel::<(Service, Result<Address, ProviderError>)>(contenders.max(1));

    for provider in providers {
        let tx = tx.clone();
        let cep = cep.clone();
        tokio::spawn(async move {
            let service: Service = provider.service();
            debug!("querying {service}");
            let result = provider.fetch(&cep).await;
            // The selector may be gone already; the losing result is discarded.
            let _ = tx.send((service, result)).await;
        });
    }
    drop(tx);

    let timer = sleep(deadline);
    tokio::pin!(timer);

    let mut failures: Vec<(Service, ProviderError)> = Vec::new();
    loop {
        tokio::select! {
            delivery = rx.recv() => match delivery {
                Some((service, Ok(address))) => {
                    debug!("{service} answered first");
                    return LookupOutcome::Resolved(address);
                }
                Some((service, Err(err))) => {
                    warn!("{service} failed: {err}");
                    failures.push((service, err));
                    if failures.len() == contenders {
                        return LookupOutcome::Failed(failures);
                    }
                }
                None => return LookupOutcome::Failed(failures),
            },
            _ = &mut timer => return LookupOutcome::TimedOut,
        }
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
