//! Cookie helpers: reading the portal's navigation cookies and rewriting
//! backend `Set-Cookie` headers so the browser stores them for this origin.

use percent_encoding::percent_decode_str;

pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let value = percent_decode_str(value.trim()).decode_utf8_lossy();
            Some((name.to_string(), value.into_owned()))
        })
        .collect()
}

/// Splits a `Set-Cookie` value that some runtimes comma-join. A comma only
/// separates cookies when the next segment starts with `name=`, which keeps
/// `Expires=Wed, 21 Oct 2015 ...` intact.
pub fn split_set_cookie(joined: &str) -> Vec<String> {
    let mut cookies = Vec::new();
    let mut current = String::new();
    for segment in joined.split(',') {
        if !current.is_empty() && starts_new_cookie(segment) {
            cookies.push(current.trim().to_string());
            current.clear();
        } else if !current.is_empty() {
            current.push(',');
        }
        current.push_str(segment);
    }
    if !current.trim().is_empty() {
        cookies.push(current.trim().to_string());
    }
    cookies
}

fn starts_new_cookie(segment: &str) -> bool {
    match segment.trim_start().split_once('=') {
        Some((name, _)) => {
            !name.is_empty() && !name.contains(|c: char| c == ';' || c.is_whitespace())
        }
        None => false,
    }
}

/// Drops `Domain`, guarantees `Path`, and picks a `SameSite` policy when the
/// backend did not set one.
pub fn normalize_backend_cookie(raw: &str, production: bool) -> String {
    let mut parts: Vec<&str> = raw
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .filter(|p| !attr_is(p, "domain"))
        .collect();

    let has_path = parts.iter().any(|p| attr_is(p, "path"));
    let has_same_site = parts.iter().any(|p| attr_is(p, "samesite"));

    if !has_path {
        parts.push("Path=/");
    }
    if !has_same_site {
        if production {
            parts.push("SameSite=None");
            parts.push("Secure");
        } else {
            parts.push("SameSite=Lax");
        }
    }
    parts.join("; ")
}

fn attr_is(part: &str, name: &str) -> bool {
    part.split('=')
        .next()
        .map(|k| k.trim().eq_ignore_ascii_case(name))
        .unwrap_or(false)
}
