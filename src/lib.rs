pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ScanEngine, pipeline::MulPipeline, scanner::Scanner};
pub use domain::model::{MulInstruction, ScanReport};
pub use utils::error::{Result, ScanError};
