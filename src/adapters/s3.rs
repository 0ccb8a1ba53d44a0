use std::path::Path;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::adapters;
use crate::error::CatError;
use crate::model;

#[async_trait]
impl adapters::ObjectStore for aws_sdk_s3::Client {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        token: Option<&str>,
    ) -> Result<model::object::ObjectPage, CatError> {
        let mut req = self.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = token {
            req = req.continuation_token(token);
        }

        let lo = req.send().await.map_err(|err| CatError::Listing {
            bucket: bucket.to_string(),
            message: err.to_string(),
        })?;

        let mut objects = Vec::new();
        for o in lo.contents() {
            objects.push(model::object::RemoteObject {
                bucket: bucket.to_string(),
                key: o.key().unwrap_or("").to_string(),
                size: o.size().unwrap_or(0) as u64,
            });
        }

        Ok(model::object::ObjectPage {
            objects,
            next_token: lo.next_continuation_token().map(|token| token.to_string()),
        })
    }

    async fn download_to(&self, bucket: &str, key: &str, dest: &Path) -> Result<(), CatError> {
        let o = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| CatError::Download {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|err| CatError::Io {
                path: dest.to_path_buf(),
                source: err,
            })?;

        let mut body = o.body.into_async_read();
        tokio::io::copy(&mut body, &mut file)
            .await
            .map_err(|err| CatError::Download {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        file.flush().await.map_err(|err| CatError::Io {
            path: dest.to_path_buf(),
            source: err,
        })?;

        Ok(())
    }
}
