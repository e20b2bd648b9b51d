// Adapters layer: concrete implementations of domain ports for external systems.

pub mod numbers_api;

pub use numbers_api::NumbersApiClient;
