//! URL modeling and local image filename derivation.
//!
//! Maps a remote image URL to the name it is cached under in the image
//! directory. The mapping is a pure function of the URL so repeated runs find
//! the same cached file.

mod path;

pub use path::filename_from_url_path;

use sha2::{Digest, Sha256};

/// Extensions kept verbatim. Anything else without a dot gets [`FALLBACK_EXTENSION`].
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Appended to names that carry no extension at all.
pub const FALLBACK_EXTENSION: &str = ".png";

/// True if `url` uses a network scheme we fetch from.
pub fn is_network_url(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// True if the name ends in one of [`IMAGE_EXTENSIONS`], case-insensitive.
pub fn has_image_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// Derives the local filename for a remote image.
///
/// - last path segment with a known image extension: used verbatim (`pic.JPG`)
/// - last path segment without any extension: `.png` appended (`abc123.png`)
/// - last path segment with another extension: used verbatim (`chart.svg`)
/// - no usable segment: `image-<12 hex of SHA-256(url)>.png`
///
/// # Examples
///
/// - `local_image_filename("https://example.com/path/pic.JPG")` → `"pic.JPG"`
/// - `local_image_filename("https://cdn.example.com/abc123")` → `"abc123.png"`
pub fn local_image_filename(url: &str) -> String {
    match filename_from_url_path(url) {
        Some(segment) if has_image_extension(&segment) => segment,
        Some(segment) if !segment.contains('.') => format!("{}{}", segment, FALLBACK_EXTENSION),
        Some(segment) => segment,
        None => fallback_filename(url),
    }
}

fn fallback_filename(url: &str) -> String {
    let digest = hex::encode(Sha256::digest(url.as_bytes()));
    format!("image-{}{}", &digest[..12], FALLBACK_EXTENSION)
}
