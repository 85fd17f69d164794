pub mod buildcore;
pub mod document;
pub mod error;
pub mod event;
pub mod log;
pub mod queue;
