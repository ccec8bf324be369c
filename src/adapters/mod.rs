// Adapters layer: HTTP surface and the concrete document store.

pub mod http;
pub mod rest_store;
