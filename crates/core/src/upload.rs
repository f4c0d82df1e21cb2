//! Naming for uploaded photo files.

use std::path::Path;

/// Longest extension kept from the client-supplied filename.
const MAX_EXTENSION_LENGTH: usize = 10;

/// Extension of a client-supplied filename, including the leading dot.
///
/// Returns an empty string when there is no extension or it contains
/// anything other than ASCII letters and digits.
pub fn file_extension(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LENGTH
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return String::new();
    }
    format!(".{ext}")
}

/// Random stored filename (`<uuid v4><ext>`) for an upload.
pub fn stored_file_name(original_name: &str) -> String {
    format!("{}{}", uuid::Uuid::new_v4(), file_extension(original_name))
}

/// Path string as persisted in `images.image_path`, always with `/` separators.
pub fn normalize_stored_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
