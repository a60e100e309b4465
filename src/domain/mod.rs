// Domain layer: the point model and the ports the engine talks through.

pub mod model;
pub mod ports;
