// Domain layer: entities, repository ports and the bracket/ranking rules.
// Nothing here performs I/O.

pub mod model;
pub mod ports;

pub mod services;
