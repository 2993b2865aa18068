// Domain layer: rule and report models plus the ports the rewriter depends on.

pub mod model;
pub mod ports;
