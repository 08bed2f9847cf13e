use crate::domain::model::{RawResult, SubmissionMetadata, TransformOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn candidates_file(&self) -> Option<&str>;
    fn metadata(&self) -> SubmissionMetadata;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawResult>>;
    async fn transform(&self, data: Vec<RawResult>) -> Result<TransformOutcome>;
    async fn load(&self, outcome: TransformOutcome) -> Result<String>;
}
