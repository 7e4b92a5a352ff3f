use std::fs;
use std::io;
use std::path::Path;

use panel_core::SelectedFile;
use panel_logging::panel_debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("path has no file name: {0}")]
    NoFileName(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read a file from disk as the panel's held file. Any file is accepted.
pub fn load_selected_file(path: &Path) -> Result<SelectedFile, LoadError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| LoadError::NoFileName(path.display().to_string()))?;
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    panel_debug!("Loaded {:?} ({} bytes, {})", path, bytes.len(), mime);
    Ok(SelectedFile::new(name, mime.to_string(), bytes))
}
