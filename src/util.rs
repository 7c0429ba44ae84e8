//! Utility functions for docview

/// File name of the page generated for the default document.
pub const INDEX_PAGE: &str = "index.html";

/// Maps a resource key to the file name of its generated page.
///
/// Characters outside `[A-Za-z0-9._-]` become `-` so keys cannot escape
/// the output directory or produce awkward URLs. An empty key maps to
/// `-.html`.
///
/// # Arguments
///
/// * `key`: Resource key
///
/// # Returns
///
/// Page file name with `.html` extension
pub fn page_file_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();

    if name.is_empty() || name.chars().all(|c| c == '.') {
        name = "-".to_string();
    }

    name.push_str(".html");
    name
}
