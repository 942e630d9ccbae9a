//! Request-path to disk-path resolution and file loading.
//!
//! Files are resolved relative to the process working directory. There is no
//! sanitization of the resolved name against a serving root; path traversal
//! is an accepted non-goal of this server.

use std::io;

/// A file loaded for serving.
pub struct FileContent {
    /// Byte size of the file on disk. This is the value advertised in
    /// `Content-Length`, independent of the normalized body below.
    pub size: u64,
    /// The file's lines, each terminated with a single `\n`.
    pub body: Vec<u8>,
}

/// Maps a request path to a file name on disk.
///
/// The root path `/` maps to `index_file`. Any other path is taken as a file
/// name with everything up to and including its first `/` stripped, so
/// `/notes.txt` becomes `notes.txt` and `/sub/page.html` becomes
/// `sub/page.html`. Paths produced from malformed request lines pass through
/// unchanged; a path with no `/` at all is used as-is.
pub fn resolve(path: &str, index_file: &str) -> String {
    if path == "/" {
        return index_file.to_string();
    }

    match path.find('/') {
        Some(i) => path[i + 1..].to_string(),
        None => path.to_string(),
    }
}

/// Reads a file for serving.
///
/// Returns the on-disk byte size together with the line-normalized body:
/// every line is terminated with `\n`, so a file whose last line has no
/// terminator gains one. An unreadable or missing file is an `Err` and is
/// reported to the client as a 404 by the caller.
pub async fn load(name: &str) -> io::Result<FileContent> {
    let raw = tokio::fs::read(name).await?;
    let size = raw.len() as u64;

    let mut body = raw;
    if !body.is_empty() && body.last() != Some(&b'\n') {
        body.push(b'\n');
    }

    Ok(FileContent { size, body })
}
