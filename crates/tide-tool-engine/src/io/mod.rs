use crate::geojson::FeatureCollection;
use crate::zdf::Zdf;
use std::fs;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid GeoJSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a GeoJSON feature collection from a file
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection, IoError> {
    let file = fs::File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Io(e),
    })?;
    FeatureCollection::from_reader(BufReader::new(file)).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a rendered zone definition file
pub fn write_zdf(path: &Path, zdf: &Zdf) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, zdf.to_text())?;
    log::debug!("wrote zone definition file to {}", path.display());
    Ok(())
}
