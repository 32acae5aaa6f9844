pub mod list_ops;

pub use list_ops::*;
