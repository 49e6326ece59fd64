//! Reference resolution against the site base URL (RFC 3986, section 5.2).
//!
//! Only `http` and `https` are supported, which covers every wiki site.

use crate::error::ClientError;

/// Resolve `reference` against `base`.
///
/// - absolute `http(s)` references are returned as-is
/// - references with any other scheme are rejected
/// - `//host/path` keeps the base scheme
/// - `/path` replaces the base path
/// - anything else is appended to the base directory
///
/// Dot segments are removed; query and fragment of the reference are kept.
///
/// # Examples
///
/// ```
/// use fw_client::resolve_url;
///
/// let base = "http://localhost:3000/";
/// assert_eq!(
///     resolve_url(base, "welcome-visitors.json").unwrap(),
///     "http://localhost:3000/welcome-visitors.json"
/// );
/// assert_eq!(
///     resolve_url(base, "https://fed.wiki.org/about.json").unwrap(),
///     "https://fed.wiki.org/about.json"
/// );
/// ```
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] if `base` is not an `http(s)` URL, or
/// if `reference` carries a scheme other than `http(s)`.
pub fn resolve_url(base: &str, reference: &str) -> Result<String, ClientError> {
    let reference = reference.trim();
    if let Some(scheme) = scheme_of(reference) {
        return if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
            Ok(reference.to_owned())
        } else {
            Err(ClientError::InvalidUrl(reference.to_owned()))
        };
    }

    let (scheme, rest) = base
        .split_once("://")
        .filter(|(scheme, _)| matches!(*scheme, "http" | "https"))
        .ok_or_else(|| ClientError::InvalidUrl(base.to_owned()))?;

    if let Some(network_path) = reference.strip_prefix("//") {
        return Ok(format!("{scheme}://{network_path}"));
    }

    let (authority, base_path) = match rest.find(['/', '?', '#']) {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    if authority.is_empty() {
        return Err(ClientError::InvalidUrl(base.to_owned()));
    }
    let base_path = match strip_query(base_path).0 {
        "" => "/",
        path => path,
    };

    let (ref_path, suffix) = strip_query(reference);
    let merged = if ref_path.starts_with('/') {
        ref_path.to_owned()
    } else if ref_path.is_empty() {
        base_path.to_owned()
    } else {
        let dir = base_path.rfind('/').map_or("/", |i| &base_path[..=i]);
        format!("{dir}{ref_path}")
    };

    Ok(format!(
        "{scheme}://{authority}{}{suffix}",
        remove_dot_segments(&merged)
    ))
}

/// The scheme of an absolute reference, if it has one.
fn scheme_of(reference: &str) -> Option<&str> {
    let (scheme, _) = reference.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Split a reference into its path and its `?query#fragment` suffix.
fn strip_query(reference: &str) -> (&str, &str) {
    match reference.find(['?', '#']) {
        Some(i) => reference.split_at(i),
        None => (reference, ""),
    }
}

/// Remove `.` and `..` segments from an absolute path.
fn remove_dot_segments(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').skip(1).collect();
    let last = segments.len().saturating_sub(1);
    let mut out: Vec<&str> = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "." => {}
            ".." => {
                out.pop();
            }
            other => {
                out.push(other);
                continue;
            }
        }
        // A trailing dot segment still names a directory.
        if i == last {
            out.push("");
        }
    }

    format!("/{}", out.join("/"))
}
