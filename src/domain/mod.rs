// Domain layer: the person record, the blacklist and the query port.

pub mod blacklist;
pub mod model;
pub mod ports;
