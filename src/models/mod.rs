pub mod message;
pub mod report;

pub use message::*;
pub use report::*;
