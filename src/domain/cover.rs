// Cover image loading: remote URLs go through the shared HTTP client,
// anything else is read as a file relative to the content directory.
// Either way the result is decoded RGBA8 ready for a texture upload.

use std::path::Path;

use super::CLIENT;

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Load and decode a cover. Errors are plain strings; the caller only logs
/// them and leaves the card placeholder in place.
pub async fn load_cover_image(
    reference: &str,
    content_dir: &Path,
) -> Result<(usize, usize, Vec<u8>), String> {
    if is_remote(reference) {
        fetch_remote(reference).await
    } else {
        decode_local(content_dir.join(reference)).await
    }
}

async fn fetch_remote(url: &str) -> Result<(usize, usize, Vec<u8>), String> {
    log::debug!("cover fetch: GET {}", url);
    let resp = CLIENT
        .get(url)
        .header("Accept", "image/jpeg,image/png,image/gif,image/webp")
        .send()
        .await
        .map_err(|e| format!("request error for {}: {}", url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("http status {} for {}", status.as_u16(), url));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| format!("body read error for {}: {}", url, e))?;
    decode_bytes(&bytes).map_err(|e| format!("decode error for {}: {}", url, e))
}

async fn decode_local(path: std::path::PathBuf) -> Result<(usize, usize, Vec<u8>), String> {
    let shown = path.to_string_lossy().to_string();
    tokio::task::spawn_blocking(move || -> Result<(usize, usize, Vec<u8>), String> {
        let bytes = std::fs::read(&path)
            .map_err(|e| format!("read error for {}: {}", path.to_string_lossy(), e))?;
        decode_bytes(&bytes)
            .map_err(|e| format!("decode error for {}: {}", path.to_string_lossy(), e))
    })
    .await
    .map_err(|e| format!("cover task join failed for {}: {}", shown, e))?
}

fn decode_bytes(bytes: &[u8]) -> Result<(usize, usize, Vec<u8>), String> {
    let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok((w as usize, h as usize, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://cdn.example.dev/cover.png"));
        assert!(is_remote("http://cdn.example.dev/cover.png"));
        assert!(!is_remote("covers/cover.png"));
        assert!(!is_remote(""));
    }
}
