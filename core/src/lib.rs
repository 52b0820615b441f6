pub mod lookup;
pub mod provider;
