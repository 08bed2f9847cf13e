pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, CliConfig};
pub use core::{engine::ExportEngine, pipeline::TallyPipeline, reference::ReferenceTable};
pub use utils::error::{ExportError, Result};
