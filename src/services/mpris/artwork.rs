use std::{io::Read, path::PathBuf, time::Duration};

use tracing::debug;

use crate::services::media::MediaError;

/// Largest artwork accepted from a remote server.
const MAX_ARTWORK_BYTES: u64 = 8 * 1024 * 1024;

/// Loads the image behind an `mpris:artUrl`.
///
/// Local `file://` URLs are read from disk, `http(s)://` URLs are downloaded
/// on the blocking pool with `timeout` applied to the whole request.
pub(crate) async fn load(url: &str, timeout: Duration) -> Result<Vec<u8>, MediaError> {
    if let Some(path) = url.strip_prefix("file://") {
        let path = PathBuf::from(percent_decode(path));
        debug!(path = %path.display(), "reading local artwork");
        return tokio::fs::read(&path)
            .await
            .map_err(|e| MediaError::Artwork(format!("{}: {e}", path.display())));
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        let url = url.to_string();
        return tokio::task::spawn_blocking(move || download(&url, timeout))
            .await
            .map_err(|e| MediaError::Artwork(format!("download task failed: {e}")))?;
    }

    Err(MediaError::Artwork(format!("unsupported artwork URL '{url}'")))
}

fn download(url: &str, timeout: Duration) -> Result<Vec<u8>, MediaError> {
    debug!(url, "downloading remote artwork");
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    let response = agent
        .get(url)
        .call()
        .map_err(|e| MediaError::Artwork(e.to_string()))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_ARTWORK_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| MediaError::Artwork(e.to_string()))?;

    Ok(bytes)
}

/// Decodes `%XX` escapes in a URL path; malformed escapes are kept verbatim.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn decodes_escaped_paths() {
        assert_eq!(percent_decode("/tmp/My%20Album/cover.jpg"), "/tmp/My Album/cover.jpg");
        assert_eq!(percent_decode("/a%C3%A9"), "/aé");
        assert_eq!(percent_decode("/odd%2"), "/odd%2");
        assert_eq!(percent_decode("/bad%zz"), "/bad%zz");
        assert_eq!(percent_decode("/end%"), "/end%");
    }

    #[tokio::test]
    async fn reads_file_urls() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover art.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();
        let url = format!("file://{}", path.display()).replace(' ', "%20");

        let bytes = load(&url, Duration::from_secs(1)).await.unwrap();

        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn missing_file_is_artwork_error() {
        let err = load("file:///definitely/not/here.png", Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(err, MediaError::Artwork(_)));
    }

    #[tokio::test]
    async fn rejects_unknown_schemes() {
        let err = load("data:image/png;base64,AAAA", Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unsupported artwork URL"));
    }
}
