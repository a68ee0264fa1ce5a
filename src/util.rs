//! Small parsing/formatting helpers shared by the tag accessors.

/// Parse strings like:
/// - "3" -> (Some(3), None)
/// - "3/12" -> (Some(3), Some(12))
pub(crate) fn parse_slash_pair_u32(s: Option<&str>) -> (Option<u32>, Option<u32>) {
    let Some(s) = s else { return (None, None) };
    let s = s.trim();
    if s.is_empty() {
        return (None, None);
    }

    let mut parts = s.split('/');
    let a = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    let b = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
    (a, b)
}

/// Format TRCK/TPOS-style values as "n" or "n/total".
pub(crate) fn format_slash_pair(n: u32, total: Option<u32>) -> String {
    match total {
        Some(t) => format!("{}/{}", n, t),
        None => n.to_string(),
    }
}
