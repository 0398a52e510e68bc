// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Credit counts: a non-negative integer, surrounding whitespace ignored.
/// "3" and "+3" parse; "3.0", "-3", "three" and "" do not.
pub fn parse_credits(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}
