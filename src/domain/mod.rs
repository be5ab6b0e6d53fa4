pub mod chart;
pub mod errors;
pub mod legislature;
pub mod logging;
