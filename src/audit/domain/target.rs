use crate::shared::error::AuditError;
use crate::shared::Result;
use url::Url;

/// Normalises a website address for auditing.
///
/// Anything that does not already start with `http` gets an `https://`
/// prefix; the result must parse as an absolute http(s) URL.
pub fn normalize_target(raw: &str) -> Result<Url> {
    let candidate = with_scheme(raw);

    let url = Url::parse(&candidate).map_err(|e| {
        AuditError::validation(format!("Invalid website URL: {} ({})", raw.trim(), e))
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(AuditError::validation(format!("Invalid website URL: {}", raw.trim())).into());
    }

    Ok(url)
}

/// Trimmed address with `https://` prepended unless it starts with `http`
pub fn with_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// `scheme://host[:port]` of the page, used for well-known resources and
/// internal-link detection.
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}
