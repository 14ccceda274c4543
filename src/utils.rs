/// Strip the path and query from a URL before logging it. Provider keys
/// travel both as path segments and as query parameters (`apikey=`), so
/// everything after the host is hidden.
pub fn mask_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return "***".to_string();
    };
    let rest = &url[scheme_end + 3..];
    let host_end = rest.find(['/', '?']).unwrap_or(rest.len());
    if host_end == 0 {
        return "***".to_string();
    }
    format!("{}{}/***", &url[..scheme_end + 3], &rest[..host_end])
}
