use std::fs;
use std::path::Path;

use crate::model;

pub fn is_cached(object: &model::object::RemoteObject, temp_root: &Path) -> bool {
    match fs::metadata(object.local_path(temp_root)) {
        Ok(meta) => meta.is_file() && meta.len() == object.size,
        Err(_) => false,
    }
}
