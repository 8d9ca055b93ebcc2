// Domain layer: request/outcome models and the ports scenarios and config plug into.

pub mod model;
pub mod ports;
