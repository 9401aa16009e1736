pub mod engine;
pub mod pipeline;
pub mod scanner;

pub use crate::domain::model::{MulInstruction, ScanReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
