pub mod cdf;
pub mod consts;
pub mod geometric;
pub mod io;
pub mod tracing;
