mod logging;
mod throughput;

pub use logging::*;
pub use throughput::*;
