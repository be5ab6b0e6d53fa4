//! Pie chart aggregate containing layout services and value objects.

pub mod palette;
pub mod services;
pub mod value_objects;

pub use palette::*;
pub use services::*;
pub use value_objects::*;
