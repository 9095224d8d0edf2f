// CSRF token lookup backed by the shared cookie jar
use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

const CSRF_COOKIE: &str = "csrftoken";

/// Where the CSRF token for outgoing requests comes from. Read once per
/// request, never cached across requests. `None` is an expected outcome,
/// not an error.
pub trait CsrfTokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Find the `csrftoken` entry in a `Cookie`-header style string
/// (`"a=1; csrftoken=abc; b=2"`) and URL-decode its value.
pub fn read_csrf_cookie(raw: &str) -> Option<String> {
    let prefix = format!("{CSRF_COOKIE}=");
    let value = raw
        .split("; ")
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))?;

    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}

/// Reads the token from the cookie jar shared with the HTTP client, scoped
/// to the configured server origin. Without an origin there is no cookie
/// store to consult and every read returns `None`.
pub struct CookieCsrfSource {
    jar: Arc<Jar>,
    origin: Option<Url>,
}

impl CookieCsrfSource {
    pub fn new(jar: Arc<Jar>, origin: Option<Url>) -> Self {
        Self { jar, origin }
    }
}

impl CsrfTokenSource for CookieCsrfSource {
    fn token(&self) -> Option<String> {
        let origin = self.origin.as_ref()?;
        let header = self.jar.cookies(origin)?;
        read_csrf_cookie(header.to_str().ok()?)
    }
}
