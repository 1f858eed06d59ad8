//! Static extension-to-MIME lookup for artifact uploads.

use std::path::Path;

/// MIME type used when the extension is missing or unrecognized.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Look up the MIME type for a file path by extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_ascii_lowercase(),
        None => return DEFAULT_MIME,
    };

    match extension.as_str() {
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "csv" => "text/csv",
        "json" => "application/json",
        "xml" => "application/xml",
        "zip" => "application/zip",
        _ => DEFAULT_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(mime_for_path(Path::new("report.pdf")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("data.csv")), "text/csv");
        assert_eq!(mime_for_path(Path::new("photo.JPEG")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_for_path(Path::new("binary.bin")), DEFAULT_MIME);
        assert_eq!(mime_for_path(Path::new("no_extension")), DEFAULT_MIME);
    }
}
