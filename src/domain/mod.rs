// Domain layer: core models and ports. No framework types here.

pub mod model;
pub mod ports;
