pub mod engine;
pub mod exporter;
pub mod pipeline;
pub mod reference;
pub mod row;
pub mod transform;

pub use crate::domain::model::{RawResult, ResolvedResult, TransformOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
