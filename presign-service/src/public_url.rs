//! Host rewrite for generated URLs
//!
//! The signing tool may reach storage through an internal hostname that public
//! clients cannot resolve. When a public base is configured, its scheme, host
//! and port replace those of each generated URL.

use url::Url;

/// Best-effort rewrite of generated URLs onto a public base
#[derive(Debug, Clone, Default)]
pub struct PublicUrlRewriter {
    base: Option<Url>,
}

impl PublicUrlRewriter {
    /// Creates a rewriter, a no-op when `base` is absent or unparsable
    #[must_use]
    pub fn new(base: Option<&str>) -> Self {
        let base = base.and_then(|base| match Url::parse(base) {
            Ok(url) if url.has_host() => {
                tracing::info!(public_base_url = %url, "Rewriting generated URLs");
                Some(url)
            }
            Ok(_) => {
                tracing::warn!("Public base URL {base:?} has no host, rewrite disabled");
                None
            }
            Err(err) => {
                tracing::warn!("Invalid public base URL {base:?}: {err}, rewrite disabled");
                None
            }
        });

        Self { base }
    }

    /// Replaces scheme, host and port, keeping path, query and fragment
    ///
    /// Everything after the generated URL's authority is copied byte for
    /// byte. Returns the input unchanged when no base is configured or the
    /// URL cannot be rewritten.
    #[must_use]
    pub fn rewrite(&self, generated: &str) -> String {
        let Some(base) = &self.base else {
            return generated.to_string();
        };

        if !Url::parse(generated).is_ok_and(|url| url.has_host()) {
            tracing::warn!("Generated URL is not parsable, returning it unchanged");
            return generated.to_string();
        }

        let Some((_, after_scheme)) = generated.split_once("://") else {
            tracing::warn!("Generated URL has no authority, returning it unchanged");
            return generated.to_string();
        };

        let tail = after_scheme
            .find(['/', '?', '#'])
            .map_or("", |start| &after_scheme[start..]);

        format!("{}{tail}", origin(base))
    }
}

/// `scheme://host[:port]` of a URL known to have a host
fn origin(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    }
}
