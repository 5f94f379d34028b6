// src/source/mod.rs
// =============================================================================
// Reads the list of URLs to check.
//
// The format is one URL per line. Lines are returned exactly as written,
// minus the line ending ("\n" or "\r\n"). Empty lines stay in as empty
// strings, so they show up in the report as failed checks instead of being
// silently skipped. Bytes that are not valid UTF-8 are replaced with U+FFFD;
// that line then fails its own check, the rest of the list is unaffected.
// =============================================================================

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("while opening file: open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("while reading file: {0}")]
    Read(#[source] io::Error),
}

/// Reads every line from `reader` into a Vec.
///
/// Only real I/O failures are errors. Undecodable bytes are not.
pub fn read_urls<R: BufRead>(reader: R) -> Result<Vec<String>, SourceError> {
    reader
        .split(b'\n')
        .map(|line| line.map(decode_line).map_err(SourceError::Read))
        .collect()
}

fn decode_line(mut line: Vec<u8>) -> String {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    match String::from_utf8(line) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Opens `path` and reads the URL list from it.
pub fn read_url_file(path: &Path) -> Result<Vec<String>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_urls(BufReader::new(file))
}
