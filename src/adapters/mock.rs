use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::adapters;
use crate::error::CatError;
use crate::model;

#[derive(Default)]
pub struct MockClient {
    pub objects: Vec<model::object::RemoteObject>,
    // zero = everything on one page
    pub page_size: usize,
    pub bodies: HashMap<String, Vec<u8>>,
    pub fail_keys: HashSet<String>,
    pub list_error: Option<String>,
    pub list_delay: Option<Duration>,
    pub download_delay: Option<Duration>,
    pub download_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
}

#[async_trait]
impl adapters::ObjectStore for MockClient {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        token: Option<&str>,
    ) -> Result<model::object::ObjectPage, CatError> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.list_error {
            return Err(CatError::Listing {
                bucket: bucket.to_string(),
                message: message.clone(),
            });
        }

        let matching: Vec<model::object::RemoteObject> = self
            .objects
            .iter()
            .filter(|o| o.bucket == bucket && o.key.starts_with(prefix))
            .cloned()
            .collect();

        let start: usize = match token {
            Some(token) => token.parse().expect("bad continuation token"),
            None => 0,
        };
        let page_size = if self.page_size == 0 {
            matching.len().max(1)
        } else {
            self.page_size
        };
        let end = (start + page_size).min(matching.len());

        Ok(model::object::ObjectPage {
            objects: matching[start..end].to_vec(),
            next_token: (end < matching.len()).then(|| end.to_string()),
        })
    }

    async fn download_to(&self, _bucket: &str, key: &str, dest: &Path) -> Result<(), CatError> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);

        let result = async {
            if self.fail_keys.contains(key) {
                return Err(CatError::Download {
                    key: key.to_string(),
                    message: "injected failure".to_string(),
                });
            }

            if let Some(delay) = self.download_delay {
                tokio::time::sleep(delay).await;
            }

            let body = self.bodies.get(key).cloned().unwrap_or_default();
            tokio::fs::write(dest, body)
                .await
                .map_err(|err| CatError::Io {
                    path: dest.to_path_buf(),
                    source: err,
                })
        }
        .await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
