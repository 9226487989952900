// Domain layer: the content schema, the rendered page document and the ports
// the pipeline is built against. No I/O lives here.

pub mod model;
pub mod page;
pub mod ports;
