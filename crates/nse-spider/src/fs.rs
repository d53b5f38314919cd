use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, error, info, trace};

/// Reads a `.json` file from `path`.
pub async fn read_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    trace!("reading file path: {}", path.display());
    let file = tokio::fs::read(path).await?;
    trace!("file read; deserializing bytes ...");
    let data: T = serde_json::from_slice(&file)?;
    Ok(data)
}

/// Serialize `data` as JSON with a 2-space indent and write it to `path`.
///
/// The file is truncated first; whatever was there before is replaced, never merged.
pub async fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(data).map_err(|err| {
        error!("failed to serialize data for {}, error({err})", path.display());
        err
    })?;

    debug!("writing {} bytes to {}", json.len(), path.display());
    tokio::fs::write(path, json).await.map_err(|err| {
        error!("failed to save data to {}, error({err})", path.display());
        err
    })?;

    info!("data saved to {}", path.display());
    Ok(())
}
