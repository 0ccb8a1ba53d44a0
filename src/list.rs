use tokio::time::Instant;
use tracing::debug;

use crate::adapters::ObjectStore;
use crate::error::CatError;
use crate::model::object::RemoteObject;
use crate::pattern::Pattern;
use crate::util::deadline;

pub async fn list_objects(
    store: &dyn ObjectStore,
    patterns: &[Pattern],
    deadline: Option<Instant>,
) -> Result<Vec<RemoteObject>, CatError> {
    let mut objects = Vec::new();

    for pattern in patterns {
        let mut token: Option<String> = None;

        loop {
            let page = deadline::within(
                deadline,
                store.list_page(&pattern.bucket, &pattern.prefix, token.as_deref()),
            )
            .await
            .map_err(|_| CatError::Listing {
                bucket: pattern.bucket.clone(),
                message: "deadline exceeded while listing".to_string(),
            })??;

            debug!(
                bucket = %pattern.bucket,
                prefix = %pattern.prefix,
                count = page.objects.len(),
                "fetched object page"
            );

            objects.extend(page.objects);

            token = page.next_token;
            if token.is_none() {
                break;
            }
        }
    }

    Ok(objects)
}
