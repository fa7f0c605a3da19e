//! Build-time injection.
//!
//! The host build tool exposes injection points for raw HTML fragments;
//! [`install`] resolves options once per build and feeds those points.

use crate::config::{resolve, Environment, OptionOverrides, TrackingOptions, PAGE_VIEW_FRAGMENT};
use crate::error::ConfigError;
use crate::tag::{build_config_snippet, build_script_tag};

/// Injection points offered by the host build tool.
///
/// `inject_head` fragments land in every generated page's `<head>`;
/// `inject_page_load` fragments run on every page load, including
/// client-side route transitions.
pub trait InjectHooks {
    /// Queues a fragment for the page-head position.
    fn inject_head(&mut self, fragment: &str);

    /// Queues a fragment for the every-page-load position.
    fn inject_page_load(&mut self, fragment: &str);
}

/// Resolves options and injects the tracking markup.
///
/// The config snippet goes in before the script tag so the runtime
/// configuration is assigned by the time the remote script parses. When
/// auto-tracking is on, a page-view re-report fragment is injected at the
/// page-load position so soft navigations still record views.
///
/// Returns the resolved options so the host can derive its runtime
/// configuration from them.
///
/// # Errors
///
/// Propagates [`ConfigError`] from resolution; nothing is injected on
/// failure.
pub fn install(
    hooks: &mut dyn InjectHooks,
    overrides: OptionOverrides,
    env: &Environment,
) -> Result<TrackingOptions, ConfigError> {
    let options = resolve(overrides, env)?;

    hooks.inject_head(&build_config_snippet(&options));
    hooks.inject_head(&build_script_tag(&options));
    if options.auto_track {
        hooks.inject_page_load(PAGE_VIEW_FRAGMENT);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingHooks {
        head: Vec<String>,
        page_load: Vec<String>,
    }

    impl InjectHooks for RecordingHooks {
        fn inject_head(&mut self, fragment: &str) {
            self.head.push(fragment.to_string());
        }

        fn inject_page_load(&mut self, fragment: &str) {
            self.page_load.push(fragment.to_string());
        }
    }

    fn overrides() -> OptionOverrides {
        OptionOverrides {
            website_id: Some("abc".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_snippet_is_injected_before_tag() {
        let mut hooks = RecordingHooks::default();
        install(&mut hooks, overrides(), &Environment::default()).unwrap();

        assert_eq!(hooks.head.len(), 2);
        assert!(hooks.head[0].contains("window.__entrolytics"));
        assert!(hooks.head[1].contains("data-website-id"));
    }

    #[test]
    fn test_auto_track_adds_page_load_fragment() {
        let mut hooks = RecordingHooks::default();
        install(&mut hooks, overrides(), &Environment::default()).unwrap();
        assert_eq!(hooks.page_load, vec![PAGE_VIEW_FRAGMENT.to_string()]);
    }

    #[test]
    fn test_auto_track_off_skips_page_load_fragment() {
        let mut hooks = RecordingHooks::default();
        let mut overrides = overrides();
        overrides.auto_track = Some(false);
        install(&mut hooks, overrides, &Environment::default()).unwrap();
        assert!(hooks.page_load.is_empty());
    }

    #[test]
    fn test_nothing_injected_on_resolution_failure() {
        let mut hooks = RecordingHooks::default();
        let result = install(
            &mut hooks,
            OptionOverrides::default(),
            &Environment::default(),
        );
        assert!(result.is_err());
        assert!(hooks.head.is_empty());
        assert!(hooks.page_load.is_empty());
    }
}
