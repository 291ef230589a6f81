//! Path checks for proxy-eligible requests.
//!
//! The upstream URL builder resolves `.` and `..` segments, including their
//! percent-encoded spellings, and treats `\` as a separator. A request path
//! carrying such a segment could therefore land outside the upstream base
//! path with the credential attached. Those requests are refused before
//! rewriting.

/// True if any segment of `path` is `.` or `..`, in any spelling the
/// upstream URL builder would resolve.
pub fn has_dot_segment(path: &str) -> bool {
    path.split(['/', '\\']).any(is_dot_segment)
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}
