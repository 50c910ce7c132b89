//! Text-vs-binary classification.

use std::path::Path;

/// Extensions that always classify as binary, regardless of content.
const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".ico", ".svg", ".webp",
    // Audio/Video
    ".mp3", ".mp4", ".avi", ".mov", ".flv", ".wav", ".ogg",
    // Archives
    ".zip", ".rar", ".tar", ".gz", ".7z",
    // Documents
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
    // Binaries
    ".exe", ".dll", ".so", ".dylib", ".bin",
    // Fonts
    ".ttf", ".otf", ".woff", ".woff2",
];

/// How many leading bytes the content check samples.
const SAMPLE_SIZE: usize = 1024;

/// Decide whether a file should be treated as text.
///
/// Pure function: the extension table is consulted first, then the first
/// 1024 raw bytes are scanned for control characters. Empty content is
/// text.
pub fn is_text_file(path: &Path, content: &[u8]) -> bool {
    if has_binary_extension(path) {
        return false;
    }

    !has_binary_content(content)
}

fn has_binary_extension(path: &Path) -> bool {
    let name = path.to_string_lossy().to_lowercase();
    BINARY_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Any byte below 32 other than tab, LF, or CR marks the content binary.
/// Operates on raw bytes; no decoding is attempted.
fn has_binary_content(content: &[u8]) -> bool {
    content
        .iter()
        .take(SAMPLE_SIZE)
        .any(|&byte| byte < 32 && byte != b'\t' && byte != b'\n' && byte != b'\r')
}
