//! Parsing of computed style values

/// Parse a pixel length such as `"10px"` or `"-4.5px"`
///
/// Anything unparseable (`"auto"`, empty) counts as zero.
pub fn parse_px(value: &str) -> f64 {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite())
        .unwrap_or(0.0)
}

/// Parse the first entry of a `transition-duration` list into milliseconds
///
/// Computed styles report seconds (`"0.3s"`); `"ms"` is accepted too.
pub fn parse_duration_ms(value: &str) -> f64 {
    let first = value.split(',').next().unwrap_or_default().trim();
    let parsed = if let Some(ms) = first.strip_suffix("ms") {
        ms.trim().parse::<f64>().ok()
    } else if let Some(s) = first.strip_suffix('s') {
        s.trim().parse::<f64>().ok().map(|s| s * 1000.0)
    } else {
        None
    };
    parsed
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
        .unwrap_or(0.0)
}
