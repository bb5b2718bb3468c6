// Domain layer: view models, property values and the ports content access goes through.

pub mod model;
pub mod ports;
