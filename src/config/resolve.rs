//! Option resolution.
//!
//! Merges explicit caller overrides over environment-derived values over
//! fixed defaults. The website identifier is validated before anything
//! else: without one, script injection is meaningless.

use log::warn;
use url::Url;

use crate::config::constants::{
    DEFAULT_HOST, ENV_HOST, ENV_HOST_FALLBACK, ENV_WEBSITE_ID, ENV_WEBSITE_ID_FALLBACK,
};
use crate::config::types::{Environment, OptionOverrides, TrackingOptions};
use crate::error::ConfigError;

/// Resolves tracking options from explicit overrides and the environment.
///
/// Lookup order for the website identifier and host is explicit override,
/// then the public-prefixed variable, then the build-tool-prefixed
/// fallback. Every other field falls back to its documented default.
///
/// # Errors
///
/// Returns [`ConfigError::MissingWebsiteId`] when no non-empty website
/// identifier is found anywhere (preceded by a warning log in a
/// development environment), and [`ConfigError::InvalidHost`] when the
/// resolved host is not an absolute http(s) URL.
pub fn resolve(
    overrides: OptionOverrides,
    env: &Environment,
) -> Result<TrackingOptions, ConfigError> {
    let website_id = overrides
        .website_id
        .filter(|id| !id.is_empty())
        .or_else(|| env.get(ENV_WEBSITE_ID).map(str::to_string))
        .or_else(|| env.get(ENV_WEBSITE_ID_FALLBACK).map(str::to_string));

    let Some(website_id) = website_id else {
        if env.dev {
            warn!(
                "No website ID configured. Set {ENV_WEBSITE_ID} (or {ENV_WEBSITE_ID_FALLBACK}) \
                 or pass one explicitly; the tracking script will not be injected."
            );
        }
        return Err(ConfigError::MissingWebsiteId);
    };

    let host = overrides
        .host
        .filter(|h| !h.is_empty())
        .or_else(|| env.get(ENV_HOST).map(str::to_string))
        .or_else(|| env.get(ENV_HOST_FALLBACK).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    validate_host(&host)?;

    let mut options = TrackingOptions::new(website_id);
    options.host = host;
    if let Some(auto_track) = overrides.auto_track {
        options.auto_track = auto_track;
    }
    if let Some(outbound) = overrides.track_outbound_links {
        options.track_outbound_links = outbound;
    }
    if let Some(downloads) = overrides.track_file_downloads {
        options.track_file_downloads = downloads;
    }
    if let Some(respect_dnt) = overrides.respect_dnt {
        options.respect_dnt = respect_dnt;
    }
    if overrides.domains.is_some() {
        options.domains = overrides.domains;
    }
    if let Some(edge) = overrides.use_edge_runtime {
        options.use_edge_runtime = edge;
    }
    if overrides.tag.is_some() {
        options.tag = overrides.tag;
    }
    if let Some(exclude_search) = overrides.exclude_search {
        options.exclude_search = exclude_search;
    }
    if let Some(exclude_hash) = overrides.exclude_hash {
        options.exclude_hash = exclude_hash;
    }
    Ok(options)
}

/// Checks that `host` parses as an absolute http(s) URL.
///
/// Only validation: the original string is kept verbatim so that tag
/// rendering controls its own normalization.
fn validate_host(host: &str) -> Result<(), ConfigError> {
    match Url::parse(host) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(ConfigError::InvalidHost {
            host: host.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env() -> Environment {
        Environment::default()
    }

    #[test]
    fn test_explicit_website_id_wins_over_environment() {
        let env = Environment::from_vars([(ENV_WEBSITE_ID, "from-env")], false);
        let overrides = OptionOverrides {
            website_id: Some("explicit".into()),
            ..Default::default()
        };
        let options = resolve(overrides, &env).unwrap();
        assert_eq!(options.website_id, "explicit");
    }

    #[test]
    fn test_public_variable_wins_over_fallback() {
        let env = Environment::from_vars(
            [
                (ENV_WEBSITE_ID, "public"),
                (ENV_WEBSITE_ID_FALLBACK, "fallback"),
            ],
            false,
        );
        let options = resolve(OptionOverrides::default(), &env).unwrap();
        assert_eq!(options.website_id, "public");
    }

    #[test]
    fn test_fallback_variable_is_used_when_primary_absent() {
        let env = Environment::from_vars([(ENV_WEBSITE_ID_FALLBACK, "fallback")], false);
        let options = resolve(OptionOverrides::default(), &env).unwrap();
        assert_eq!(options.website_id, "fallback");
    }

    #[test]
    fn test_missing_website_id_fails() {
        let err = resolve(OptionOverrides::default(), &empty_env()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebsiteId));
    }

    #[test]
    fn test_empty_website_id_fails() {
        let overrides = OptionOverrides {
            website_id: Some(String::new()),
            ..Default::default()
        };
        let err = resolve(overrides, &empty_env()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebsiteId));
    }

    #[test]
    fn test_missing_website_id_fails_even_with_valid_host() {
        let overrides = OptionOverrides {
            host: Some("https://stats.example.com".into()),
            ..Default::default()
        };
        let err = resolve(overrides, &empty_env()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingWebsiteId));
    }

    #[test]
    fn test_host_defaults_when_unset() {
        let overrides = OptionOverrides {
            website_id: Some("abc".into()),
            ..Default::default()
        };
        let options = resolve(overrides, &empty_env()).unwrap();
        assert_eq!(options.host, DEFAULT_HOST);
    }

    #[test]
    fn test_host_from_environment() {
        let env = Environment::from_vars([(ENV_HOST, "https://stats.example.com")], false);
        let overrides = OptionOverrides {
            website_id: Some("abc".into()),
            ..Default::default()
        };
        let options = resolve(overrides, &env).unwrap();
        assert_eq!(options.host, "https://stats.example.com");
    }

    #[test]
    fn test_host_fallback_variable() {
        let env = Environment::from_vars([(ENV_HOST_FALLBACK, "https://stats.example.com")], false);
        let overrides = OptionOverrides {
            website_id: Some("abc".into()),
            ..Default::default()
        };
        let options = resolve(overrides, &env).unwrap();
        assert_eq!(options.host, "https://stats.example.com");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let overrides = OptionOverrides {
            website_id: Some("abc".into()),
            host: Some("not a url".into()),
            ..Default::default()
        };
        let err = resolve(overrides, &empty_env()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let overrides = OptionOverrides {
            website_id: Some("abc".into()),
            host: Some("ftp://stats.example.com".into()),
            ..Default::default()
        };
        let err = resolve(overrides, &empty_env()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }

    #[test]
    fn test_flag_overrides_applied() {
        let overrides = OptionOverrides {
            website_id: Some("abc".into()),
            auto_track: Some(false),
            track_file_downloads: Some(true),
            use_edge_runtime: Some(false),
            domains: Some(vec!["a.example".into(), "b.example".into()]),
            tag: Some("marketing".into()),
            ..Default::default()
        };
        let options = resolve(overrides, &empty_env()).unwrap();
        assert!(!options.auto_track);
        assert!(options.track_file_downloads);
        assert!(!options.use_edge_runtime);
        assert_eq!(options.domains.as_deref().unwrap().len(), 2);
        assert_eq!(options.tag.as_deref(), Some("marketing"));
        // Untouched fields keep their defaults.
        assert!(options.track_outbound_links);
        assert!(!options.respect_dnt);
    }
}
