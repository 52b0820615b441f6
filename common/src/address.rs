//! # Address Record Model
//!
//! The normalized lookup result shared by every provider.
//!
//! Each upstream service answers with its own JSON shape; providers map
//! those into this single record and tag it with the service that produced
//! it, so the caller can attribute the winning answer.

use std::fmt;

/// The upstream service an [`Address`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    BrasilApi,
    ViaCep,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::BrasilApi => f.write_str("BrasilApi"),
            Service::ViaCep => f.write_str("ViaCep"),
        }
    }
}

/// Normalized address record, created per lookup and discarded after printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub cep: String,
    pub city: String,
    pub state: String,
    pub service: Service,
}
