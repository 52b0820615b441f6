//! # CEP Value Type
//!
//! Parsing and validation for the lookup key.
//!
//! A CEP (Código de Endereçamento Postal) is an 8-character Brazilian postal
//! code. Validation happens once, at the edge: the rest of the system only
//! ever sees a [`Cep`] that already passed the format check, so no provider
//! or selector needs to re-validate its input.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// User-facing rejection message for a malformed CEP.
pub const INVALID_CEP_MESSAGE: &str =
    "CEP inválido, um cep válido deve ser no formato 12345678";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_CEP_MESSAGE)]
pub struct InvalidCep;

/// A validated 8-character postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cep {
    type Err = InvalidCep;

    /// Accepts any string of exactly 8 characters.
    ///
    /// No character-class check is applied; both upstream services answer
    /// with their own not-found signal for a well-formed but unknown code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 8 {
            return Err(InvalidCep);
        }
        Ok(Self(s.to_string()))
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
