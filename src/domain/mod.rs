// Domain layer: draw records, rendered rows and the ports the pipeline is built on.

pub mod model;
pub mod ports;
