use std::path::Path;

use async_trait::async_trait;

use crate::error::CatError;
use crate::model;

#[cfg(test)]
pub mod mock;
pub mod s3;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    // One page per call; the caller feeds the continuation token back.
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        token: Option<&str>,
    ) -> Result<model::object::ObjectPage, CatError>;

    async fn download_to(&self, bucket: &str, key: &str, dest: &Path) -> Result<(), CatError>;
}
