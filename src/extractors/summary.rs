//! Summary localisation
//!
//! Actor summaries are HTML authored on the actor's home server. Links back to
//! that server are rewritten to site-relative paths, and an optional CSS class
//! is attached to every anchor carrying a `rel` attribute.

use url::Url;

use crate::error::{Result, SnapshotError};

/// Strip the actor's origin from links in `summary` and tag them with `link_class`
pub fn localise_summary(summary: &str, actor_url: &str, link_class: &str) -> Result<String> {
    let parsed = Url::parse(actor_url).map_err(|source| SnapshotError::InvalidUrl {
        url: actor_url.to_string(),
        source,
    })?;
    let host = parsed
        .host_str()
        .ok_or_else(|| SnapshotError::MissingHost(actor_url.to_string()))?;
    let origin = format!("{}://{}", parsed.scheme(), host);

    let mut localised = summary.replace(&origin, "");
    if !link_class.is_empty() {
        localised = localised.replace("rel=\"", &format!("class=\"{}\" rel=\"", link_class));
    }
    Ok(localised)
}
