//! PNG encoding, file naming, and export helpers.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use image::{ImageFormat, RgbImage};

use crate::error::PosterError;

/// Generate an output filename from the poster title.
///
/// Sanitizes the title to kebab-case, appends a unix timestamp, and
/// adds the `.png` extension.
#[must_use]
pub fn auto_filename(title: &str) -> String {
    let sanitized = sanitize_for_filename(title, 50);
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    format!("{sanitized}-{timestamp}.png")
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    // Trim trailing hyphen
    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "siren-poster".to_string()
    } else {
        result
    }
}

/// Encode the rendered poster as PNG bytes in memory.
///
/// # Errors
///
/// Returns a rendering error if PNG encoding fails.
pub fn encode_png(poster: &RgbImage) -> Result<Vec<u8>, PosterError> {
    let mut bytes = Vec::new();
    poster
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| PosterError::Render(format!("Failed to encode PNG: {e}")))?;
    Ok(bytes)
}

/// Save encoded poster bytes to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_poster(bytes: &[u8], output_path: &Path) -> Result<(), PosterError> {
    std::fs::write(output_path, bytes).map_err(PosterError::Io)
}

/// Encode poster bytes as a `data:image/png` URI suitable for an HTML
/// download link.
#[must_use]
pub fn data_uri(bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/png;base64,{encoded}")
}

/// Resolve the output path: use explicit path or auto-generate from the
/// poster title.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, title: &str) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(auto_filename(title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_basic() {
        assert_eq!(sanitize_for_filename("My First Siren", 50), "my-first-siren");
    }

    #[test]
    fn sanitize_special_chars() {
        assert_eq!(sanitize_for_filename("Bring Them Home Now!!!", 50), "bring-them-home-now");
    }

    #[test]
    fn sanitize_truncates() {
        let long = "a".repeat(100);
        let result = sanitize_for_filename(&long, 10);
        assert!(result.len() <= 10);
    }

    #[test]
    fn sanitize_empty() {
        assert_eq!(sanitize_for_filename("", 50), "siren-poster");
        assert_eq!(sanitize_for_filename("!!!", 50), "siren-poster");
    }

    #[test]
    fn sanitize_leading_special() {
        assert_eq!(sanitize_for_filename("  hello  ", 50), "hello");
    }

    #[test]
    fn auto_filename_format() {
        let name = auto_filename("My First Siren");
        assert!(name.starts_with("my-first-siren-"));
        assert_eq!(Path::new(&name).extension().unwrap(), "png");
    }

    #[test]
    fn resolve_explicit() {
        let path = resolve_output_path(Some("poster.png"), "ignored");
        assert_eq!(path, PathBuf::from("poster.png"));
    }

    #[test]
    fn resolve_auto() {
        let path = resolve_output_path(None, "My First Siren");
        assert!(path.to_str().unwrap().starts_with("my-first-siren-"));
        assert_eq!(path.extension().unwrap(), "png");
    }

    #[test]
    fn encode_png_produces_png_magic() {
        let poster = RgbImage::new(8, 8);
        let bytes = encode_png(&poster).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn data_uri_has_png_prefix() {
        let uri = data_uri(&[1, 2, 3]);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn save_poster_writes_bytes() {
        let dir = std::env::temp_dir().join("sirengen_output_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("poster.png");

        save_poster(&[1, 2, 3], &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
