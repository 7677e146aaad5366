// Domain layer: dictionary entry model and the ports the importer talks through.

pub mod model;
pub mod ports;
