//! HTTP-facing helpers: download headers, MIME lookup, AJAX detection, base URL.

use std::path::Path;

use crate::error::ViewResult;

/// Response headers that force a browser to download `file` as an attachment.
///
/// Fails when the file's metadata cannot be read (e.g. it does not exist).
pub fn download_headers(file: &Path) -> ViewResult<Vec<(&'static str, String)>> {
    let metadata = std::fs::metadata(file)?;
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(vec![
        ("Content-Description", "File Transfer".to_string()),
        ("Content-Type", "application/octet-stream".to_string()),
        (
            "Content-Disposition",
            format!("attachment; filename={filename}"),
        ),
        ("Content-Transfer-Encoding", "binary".to_string()),
        ("Expires", "0".to_string()),
        ("Cache-Control", "must-revalidate".to_string()),
        ("Pragma", "public".to_string()),
        ("Content-Length", metadata.len().to_string()),
    ])
}

/// MIME type guessed from the file extension, `application/octet-stream` when unknown.
pub fn mime_type(file: &Path) -> String {
    mime_guess::from_path(file)
        .first_or_octet_stream()
        .to_string()
}

/// Whether the `X-Requested-With` header marks an AJAX request.
///
/// The header is client-controlled; never use this for access decisions.
pub fn is_ajax(x_requested_with: Option<&str>) -> bool {
    x_requested_with.is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
}

/// Site root URL derived from the request, always ending in `/`.
///
/// `script_name` is the front controller path (e.g. `/blog/index.php`); its
/// directory becomes the URL path.
pub fn base_url(https: bool, host: &str, script_name: &str) -> String {
    let scheme = if https { "https" } else { "http" };
    let dir = match script_name.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };
    format!("{scheme}://{host}{}/", dir.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_download_headers() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("report.pdf");
        fs::write(&file, b"%PDF-1.4 hello").unwrap();

        let headers = download_headers(&file).unwrap();
        let get = |name: &str| {
            headers
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("Content-Disposition"), "attachment; filename=report.pdf");
        assert_eq!(get("Content-Length"), "14");
        assert_eq!(get("Content-Type"), "application/octet-stream");
    }

    #[test]
    fn test_download_headers_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(download_headers(&dir.path().join("missing.bin")).is_err());
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type(Path::new("style.css")), "text/css");
        assert_eq!(mime_type(Path::new("photo.png")), "image/png");
        assert_eq!(
            mime_type(Path::new("blob.unknownext")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_is_ajax() {
        assert!(is_ajax(Some("XMLHttpRequest")));
        assert!(is_ajax(Some("xmlhttprequest")));
        assert!(!is_ajax(Some("fetch")));
        assert!(!is_ajax(None));
    }

    #[test]
    fn test_base_url() {
        assert_eq!(base_url(false, "example.com", "/index.php"), "http://example.com/");
        assert_eq!(
            base_url(true, "example.com", "/blog/index.php"),
            "https://example.com/blog/"
        );
        assert_eq!(base_url(false, "localhost:8080", "index.php"), "http://localhost:8080/");
    }
}
