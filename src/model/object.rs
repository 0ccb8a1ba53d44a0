use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteObject {
    pub bucket: String,
    pub key: String,
    pub size: u64,
}

impl RemoteObject {
    pub fn local_path(&self, temp_root: &Path) -> PathBuf {
        temp_root.join(&self.bucket).join(&self.key)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ObjectPage {
    pub objects: Vec<RemoteObject>,
    pub next_token: Option<String>,
}
