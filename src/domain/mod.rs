// Domain layer: numeral and expression models plus the ports the core is built against.

pub mod model;
pub mod ports;
