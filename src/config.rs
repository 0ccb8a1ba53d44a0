use std::path::PathBuf;
use std::time::Duration;

use tokio::time::Instant;

#[derive(Clone, Debug)]
pub struct Config {
    pub region: Option<String>,
    pub temp_root: PathBuf,
    pub concurrency: usize,
    pub deadline: Option<Instant>,
    pub verbose: bool,
}

impl Config {
    pub fn new(
        region: Option<String>,
        temp: Option<PathBuf>,
        concurrency: usize,
        timeout_secs: u64,
        verbose: bool,
    ) -> Self {
        Self {
            region,
            temp_root: temp.unwrap_or_else(default_temp_root),
            concurrency,
            deadline: match timeout_secs {
                0 => None,
                secs => Instant::now().checked_add(Duration::from_secs(secs)),
            },
            verbose,
        }
    }
}

pub fn default_temp_root() -> PathBuf {
    std::env::temp_dir().join("s3cat")
}
