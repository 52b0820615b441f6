pub mod address;
pub mod cep;
pub mod config;
pub mod error;
