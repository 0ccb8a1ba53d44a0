use std::io;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::adapters::ObjectStore;
use crate::cache;
use crate::config::Config;
use crate::error::CatError;
use crate::model::object::RemoteObject;
use crate::util::deadline;

pub async fn download_all(
    store: Arc<dyn ObjectStore>,
    objects: &[RemoteObject],
    config: &Config,
) -> Result<(), CatError> {
    let mut pending = Vec::new();
    let mut bytes = 0u64;

    for object in objects {
        let cached = cache::is_cached(object, &config.temp_root);
        debug!(
            cached,
            location = %format!("/{}/{}", object.bucket, object.key),
            "checked local copy"
        );
        if !cached {
            bytes += object.size;
            pending.push(object.clone());
        }
    }

    debug!(dir = %config.temp_root.display(), "download directory");
    info!(objects = pending.len(), bytes, "downloading");

    let semaphore = Arc::new(Semaphore::new(config.concurrency));
    let mut tasks: JoinSet<Result<(), CatError>> = JoinSet::new();

    for object in pending {
        let store = store.clone();
        let semaphore = semaphore.clone();
        let temp_root = config.temp_root.clone();
        let deadline = config.deadline;

        tasks.spawn(async move {
            // permit is held until the transfer finishes
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            download_one(store.as_ref(), &object, &temp_root, deadline).await
        });
    }

    let mut first_error: Option<CatError> = None;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                if first_error.is_none() {
                    first_error = Some(err);
                    tasks.abort_all();
                }
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => panic!("download task failed to join: {err}"),
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

async fn download_one(
    store: &dyn ObjectStore,
    object: &RemoteObject,
    temp_root: &Path,
    deadline: Option<Instant>,
) -> Result<(), CatError> {
    let path = object.local_path(temp_root);
    debug!(path = %path.display(), "downloading");

    ensure_parent_dir(&path).await?;

    deadline::within(deadline, store.download_to(&object.bucket, &object.key, &path))
        .await
        .map_err(|_| CatError::Download {
            key: object.key.clone(),
            message: "deadline exceeded while downloading".to_string(),
        })??;

    debug!(path = %path.display(), "done");
    Ok(())
}

async fn ensure_parent_dir(path: &Path) -> Result<(), CatError> {
    let dir = match path.parent() {
        Some(dir) => dir,
        None => return Ok(()),
    };

    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(CatError::Directory(dir.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => tokio::fs::create_dir_all(dir)
            .await
            .map_err(|err| CatError::Io {
                path: dir.to_path_buf(),
                source: err,
            }),
        Err(err) => Err(CatError::Io {
            path: dir.to_path_buf(),
            source: err,
        }),
    }
}
