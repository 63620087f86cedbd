// Domain layer: the signup data model and the ports the service talks through.

pub mod model;
pub mod ports;
