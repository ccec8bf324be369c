// Domain layer: request/response models and the store port.

pub mod model;
pub mod ports;
