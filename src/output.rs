use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::CatError;
use crate::model::object::RemoteObject;

enum LineError {
    Read(io::Error),
    Write(io::Error),
}

pub fn emit(objects: &[RemoteObject], temp_root: &Path) -> Result<(), CatError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit_to(objects, temp_root, &mut out)
}

pub fn emit_to<W: Write>(
    objects: &[RemoteObject],
    temp_root: &Path,
    out: &mut W,
) -> Result<(), CatError> {
    for object in objects {
        let path = object.local_path(temp_root);
        let file = File::open(&path).map_err(|err| CatError::Io {
            path: path.clone(),
            source: err,
        })?;

        if object.key.ends_with(".gz") {
            let decoder = GzDecoder::new(BufReader::new(file));
            emit_lines(BufReader::new(decoder), out).map_err(|err| match err {
                LineError::Read(err) => CatError::Decompression {
                    path: path.clone(),
                    message: err.to_string(),
                },
                LineError::Write(err) => stdout_error(err),
            })?;
        } else {
            emit_lines(BufReader::new(file), out).map_err(|err| match err {
                LineError::Read(err) => CatError::Io {
                    path: path.clone(),
                    source: err,
                },
                LineError::Write(err) => stdout_error(err),
            })?;
        }
    }

    Ok(())
}

fn emit_lines<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<(), LineError> {
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).map_err(LineError::Read)?;
        if n == 0 {
            return Ok(());
        }

        if line.ends_with(b"\n") {
            line.pop();
            if line.ends_with(b"\r") {
                line.pop();
            }
        }

        out.write_all(&line).map_err(LineError::Write)?;
        out.write_all(b"\n").map_err(LineError::Write)?;
    }
}

fn stdout_error(err: io::Error) -> CatError {
    CatError::Io {
        path: PathBuf::from("stdout"),
        source: err,
    }
}
