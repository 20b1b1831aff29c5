// Domain layer: core models, the built-in data set and ports (interfaces).

pub mod data;
pub mod model;
pub mod ports;
