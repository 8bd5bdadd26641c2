use std::path::{Path, PathBuf};

use crate::error::{SiteError, SiteResult};

/// Stylesheet compiled into the binary, served at `/assets/site.css`
pub(crate) const STYLESHEET: &str = include_str!("../static/site.css");

/// A file loaded from the assets directory, ready to serve
#[derive(Debug)]
pub(crate) struct Asset {
    pub name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub(crate) fn content_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Maps a request name onto a path below `root`. Only plain file names are
/// accepted: no separators, no leading dot.
pub(crate) fn resolve(root: &Path, name: &str) -> SiteResult<PathBuf> {
    let plain = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(|c: char| c == '/' || c == '\\' || c == '\0');
    if !plain {
        return Err(SiteError::InvalidAssetName { name: name.into() });
    }
    Ok(root.join(name))
}

pub(crate) async fn load(root: &Path, name: &str) -> SiteResult<Asset> {
    let path = resolve(root, name)?;
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(Asset {
            name: name.into(),
            content_type: content_type_for(name),
            bytes,
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("asset {} missing from {}", name, root.display());
            Err(SiteError::AssetNotFound { name: name.into() })
        }
        Err(err) => Err(SiteError::Io(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_follow_extension() -> () {
        assert_eq!(content_type_for("Ola-Amodu-CV.pdf"), "application/pdf");
        assert_eq!(content_type_for("profile.JPEG"), "image/jpeg");
        assert_eq!(content_type_for("notes"), "application/octet-stream");
    }

    #[test]
    fn resolve_rejects_anything_but_plain_names() -> () {
        let root = Path::new("/srv/assets");
        assert_eq!(resolve(root, "profile.jpeg").ok(), Some(PathBuf::from("/srv/assets/profile.jpeg")));
        for bad in ["", ".env", "..", "../etc/passwd", "a/b.png", "a\\b.png"].iter() {
            assert!(matches!(resolve(root, bad), Err(SiteError::InvalidAssetName { .. })), "accepted {:?}", bad);
        }
    }

    #[actix_rt::test]
    async fn load_reads_file_and_reports_missing() -> () {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("cv.pdf"), b"%PDF-1.4").expect("write");

        let asset = load(dir.path(), "cv.pdf").await.expect("asset loads");
        assert_eq!(asset.bytes, b"%PDF-1.4");
        assert_eq!(asset.content_type, "application/pdf");

        assert!(matches!(
            load(dir.path(), "missing.pdf").await,
            Err(SiteError::AssetNotFound { .. })
        ));
    }
}
