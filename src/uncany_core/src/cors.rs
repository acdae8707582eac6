//! Cross-origin headers shared by every edge function response.

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub const HEADER_ALLOW_ORIGIN: &str = "access-control-allow-origin";
pub const HEADER_ALLOW_HEADERS: &str = "access-control-allow-headers";
pub const HEADER_ALLOW_METHODS: &str = "access-control-allow-methods";

/// Per-route CORS settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    allow_methods: &'static str,
    methods_on_every_response: bool,
}

impl CorsPolicy {
    /// Advertise `allow_methods` on preflight responses only.
    pub const fn new(allow_methods: &'static str) -> Self {
        Self {
            allow_methods,
            methods_on_every_response: false,
        }
    }

    /// Advertise the allowed methods on every response, not just preflights.
    pub const fn with_methods_on_every_response(mut self) -> Self {
        self.methods_on_every_response = true;
        self
    }

    pub fn allow_methods(&self) -> &'static str {
        self.allow_methods
    }

    pub fn methods_on_every_response(&self) -> bool {
        self.methods_on_every_response
    }

    /// Headers for a regular (non-preflight) response.
    pub fn response_headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = vec![
            (HEADER_ALLOW_ORIGIN, ALLOW_ORIGIN),
            (HEADER_ALLOW_HEADERS, ALLOW_HEADERS),
        ];
        if self.methods_on_every_response {
            headers.push((HEADER_ALLOW_METHODS, self.allow_methods));
        }
        headers
    }

    /// Headers for an `OPTIONS` preflight response.
    pub fn preflight_headers(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (HEADER_ALLOW_ORIGIN, ALLOW_ORIGIN),
            (HEADER_ALLOW_HEADERS, ALLOW_HEADERS),
            (HEADER_ALLOW_METHODS, self.allow_methods),
        ]
    }
}
