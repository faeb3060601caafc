//! Registry route construction

use crate::{EurekaError, Result};
use url::Url;

/// Path of the application resource, `/eureka/apps/{app}`.
pub fn app_route(app_name: &str) -> String {
    format!("/eureka/apps/{}", app_name)
}

/// Join `route` onto `base`, keeping the base URL's scheme, authority,
/// path prefix and query.
///
/// Empty segments on either side are dropped, so duplicate and trailing
/// separators never reach the resulting path.
///
/// ```
/// use eureka_client::join_url;
///
/// let url = join_url("https://host/prefix/", "/eureka/apps/foo").unwrap();
/// assert_eq!(url.as_str(), "https://host/prefix/eureka/apps/foo");
/// ```
pub fn join_url(base: &str, route: &str) -> Result<Url> {
    let invalid = |reason: String| EurekaError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }

    let segments: Vec<&str> = url
        .path()
        .split('/')
        .chain(route.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    let path = format!("/{}", segments.join("/"));
    url.set_path(&path);

    Ok(url)
}
