pub mod core;

pub use crate::core::buildcore::PrintQueue;
pub use crate::core::document::Document;
pub use crate::core::error::{QueueError, Result};
