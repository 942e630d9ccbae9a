//! Content-type inference from the requested file name.

/// Infers the `Content-Type` for a file name.
///
/// The checks are first-match **substring** tests in a fixed order, not
/// suffix tests: `photo.html.png` matches `.html` before `.png` is ever
/// considered, and `a.htmlx` still counts as HTML. Names matching none of
/// the known markers fall back to `text/plain`.
pub fn content_type(file_name: &str) -> &'static str {
    if file_name.contains(".html") {
        "text/html"
    } else if file_name.contains(".png") {
        "image/png"
    } else if file_name.contains(".jpg") {
        "image/jpeg"
    } else if file_name.contains(".txt") {
        "text/plain"
    } else {
        "text/plain"
    }
}
