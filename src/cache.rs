// ABOUTME: Remote file cache for course data
// ABOUTME: Downloads a URL into a local directory unless a usable copy is already there

use crate::errors::{Result, SlideasError};
use crate::utils;
use log::info;
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Cached files smaller than this are treated as broken downloads.
pub const MIN_CACHED_SIZE: u64 = 250;

const FETCH_ATTEMPTS: u32 = 3;

/// Local file name for a remote URL: the last segment of its path.
pub fn file_name_for(src: &str) -> Result<String> {
    let url = Url::parse(src).map_err(|e| SlideasError::InvalidUrl(format!("{}: {}", src, e)))?;
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| SlideasError::InvalidUrl(format!("{} has no file name", src)))
}

/// Whether `path` is missing or too small to be a complete download.
pub fn needs_download(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => !metadata.is_file() || metadata.len() < MIN_CACHED_SIZE,
        Err(_) => true,
    }
}

/// Return the local path for `src` under `dest_dir`, downloading it first if needed.
pub fn cache_file(src: &str, dest_dir: &Path) -> Result<PathBuf> {
    let local = dest_dir.join(file_name_for(src)?);

    if !needs_download(&local) {
        info!("Found {:?} locally", local);
        return Ok(local);
    }

    info!("{:?} not found, downloading {}", local, src);
    utils::ensure_directory_exists(dest_dir)?;
    let content = fetch_remote_content(src)?;
    fs::write(&local, &content)?;
    info!("Downloaded {} bytes to {:?}", content.len(), local);

    Ok(local)
}

/// Fetch content from a remote URL with retry capability
fn fetch_remote_content(src: &str) -> Result<Vec<u8>> {
    let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

    let mut retry_delay = 1000;
    let mut last_error = None;

    for attempt in 1..=FETCH_ATTEMPTS {
        match client.get(src).send() {
            Ok(response) if response.status().is_success() => {
                return Ok(response.bytes()?.to_vec());
            }
            Ok(response) => {
                last_error = Some(SlideasError::ValidationError(format!(
                    "HTTP error: {}",
                    response.status()
                )));
            }
            Err(e) => last_error = Some(SlideasError::FetchError(e)),
        }

        if attempt < FETCH_ATTEMPTS {
            info!(
                "Fetch attempt {} failed, retrying in {} ms",
                attempt, retry_delay
            );
            std::thread::sleep(Duration::from_millis(retry_delay));
            retry_delay *= 2;
        }
    }

    Err(last_error.unwrap_or_else(|| {
        SlideasError::ValidationError("Unknown error fetching resource".to_string())
    }))
}
