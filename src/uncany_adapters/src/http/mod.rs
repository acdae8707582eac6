// Re-export HTTP traits from uncany_core for convenience
pub use uncany_core::{CorsPolicy, CorsResponseHelpers, EdgeRequest, EdgeResponseBuilder};

use reqwest::Url;

/// Header carrying the project key on every platform API call.
pub(crate) const API_KEY_HEADER: &str = "apikey";

/// Append `segments` to the path of `base`, percent-encoding each one.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{base} cannot be used as a base URL"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
