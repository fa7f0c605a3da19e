//! Script tag and config snippet rendering.
//!
//! Both builders are pure: they return strings and never mutate the
//! options. Attribute order is fixed so rendered output is stable for
//! snapshot comparison, and an attribute is only emitted when its option
//! deviates from the remote script's own default.

use serde::Serialize;

use crate::config::{TrackingOptions, CONFIG_GLOBAL, EDGE_SCRIPT_PATH, STANDARD_SCRIPT_PATH};

/// The object the config snippet assigns on `window`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigGlobal<'a> {
    website_id: &'a str,
    host: &'a str,
}

/// Strips exactly one trailing slash from `host`.
///
/// `https://x.com/` and `https://x.com` must render identically; deeper
/// normalization is left to the caller's URL hygiene.
pub fn normalize_host(host: &str) -> &str {
    host.strip_suffix('/').unwrap_or(host)
}

/// Renders the `<script>` element referencing the remote tracking script.
///
/// The script path is `/script-edge.js` when `use_edge_runtime` is set
/// (the default) and `/script.js` otherwise. Domain lists are serialized
/// comma-joined; commas inside individual entries are not escaped.
///
/// # Examples
///
/// ```
/// use entrolytics::{build_script_tag, TrackingOptions};
///
/// let tag = build_script_tag(&TrackingOptions::new("ws-1"));
/// assert_eq!(
///     tag,
///     "<script defer src=\"https://app.entrolytics.io/script-edge.js\" data-website-id=\"ws-1\"></script>"
/// );
/// ```
pub fn build_script_tag(options: &TrackingOptions) -> String {
    let host = normalize_host(&options.host);
    let path = if options.use_edge_runtime {
        EDGE_SCRIPT_PATH
    } else {
        STANDARD_SCRIPT_PATH
    };

    let mut tag = format!(
        "<script defer src=\"{host}{path}\" data-website-id=\"{id}\"",
        id = options.website_id
    );

    if !options.auto_track {
        tag.push_str(" data-auto-track=\"false\"");
    }
    if !options.track_outbound_links {
        tag.push_str(" data-outbound-links=\"false\"");
    }
    if options.track_file_downloads {
        tag.push_str(" data-file-downloads=\"true\"");
    }
    if options.respect_dnt {
        tag.push_str(" data-respect-dnt=\"true\"");
    }
    if let Some(domains) = options.domains.as_deref().filter(|d| !d.is_empty()) {
        tag.push_str(" data-domains=\"");
        tag.push_str(&domains.join(","));
        tag.push('"');
    }
    if let Some(label) = options.tag.as_deref() {
        tag.push_str(" data-tag=\"");
        tag.push_str(label);
        tag.push('"');
    }
    if options.exclude_search {
        tag.push_str(" data-exclude-search=\"true\"");
    }
    if options.exclude_hash {
        tag.push_str(" data-exclude-hash=\"true\"");
    }

    tag.push_str("></script>");
    tag
}

/// Renders the inline snippet assigning the runtime configuration global.
///
/// The dispatcher reads this object at runtime, so the snippet must be
/// injected before the script tag returned by [`build_script_tag`].
/// Serialized through `serde_json` so embedded quotes cannot break out of
/// the script block.
pub fn build_config_snippet(options: &TrackingOptions) -> String {
    let global = ConfigGlobal {
        website_id: &options.website_id,
        host: normalize_host(&options.host),
    };
    let json = serde_json::to_string(&global).unwrap_or_else(|_| "{}".to_string());
    format!("<script>window.{CONFIG_GLOBAL} = {json};</script>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_emit_only_mandatory_attributes() {
        let tag = build_script_tag(&TrackingOptions::new("abc"));
        assert_eq!(
            tag,
            "<script defer src=\"https://app.entrolytics.io/script-edge.js\" \
             data-website-id=\"abc\"></script>"
        );
    }

    #[test]
    fn test_edge_runtime_selects_edge_path() {
        let options = TrackingOptions::new("abc");
        assert!(build_script_tag(&options).contains("/script-edge.js"));
    }

    #[test]
    fn test_standard_runtime_selects_standard_path() {
        let mut options = TrackingOptions::new("abc");
        options.use_edge_runtime = false;
        let tag = build_script_tag(&options);
        assert!(tag.contains("/script.js"));
        assert!(!tag.contains("/script-edge.js"));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let mut with_slash = TrackingOptions::new("abc");
        with_slash.host = "https://x.com/".into();
        let mut without_slash = TrackingOptions::new("abc");
        without_slash.host = "https://x.com".into();

        assert_eq!(
            build_script_tag(&with_slash),
            build_script_tag(&without_slash)
        );
        assert_eq!(
            build_config_snippet(&with_slash),
            build_config_snippet(&without_slash)
        );
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        assert_eq!(normalize_host("https://x.com//"), "https://x.com/");
    }

    #[test]
    fn test_auto_track_disable_attribute() {
        let mut options = TrackingOptions::new("abc");
        options.auto_track = false;
        assert!(build_script_tag(&options).contains(" data-auto-track=\"false\""));
    }

    #[test]
    fn test_default_valued_options_emit_no_attribute() {
        let tag = build_script_tag(&TrackingOptions::new("abc"));
        assert!(!tag.contains("data-auto-track"));
        assert!(!tag.contains("data-outbound-links"));
        assert!(!tag.contains("data-file-downloads"));
        assert!(!tag.contains("data-respect-dnt"));
        assert!(!tag.contains("data-domains"));
        assert!(!tag.contains("data-tag"));
        assert!(!tag.contains("data-exclude-search"));
        assert!(!tag.contains("data-exclude-hash"));
    }

    #[test]
    fn test_all_deviations_render_in_fixed_order() {
        let mut options = TrackingOptions::new("abc");
        options.host = "https://stats.example.com/".into();
        options.auto_track = false;
        options.track_outbound_links = false;
        options.track_file_downloads = true;
        options.respect_dnt = true;
        options.domains = Some(vec!["a.example".into(), "b.example".into()]);
        options.tag = Some("marketing".into());
        options.exclude_search = true;
        options.exclude_hash = true;
        options.use_edge_runtime = false;

        assert_eq!(
            build_script_tag(&options),
            "<script defer src=\"https://stats.example.com/script.js\" \
             data-website-id=\"abc\" data-auto-track=\"false\" data-outbound-links=\"false\" \
             data-file-downloads=\"true\" data-respect-dnt=\"true\" \
             data-domains=\"a.example,b.example\" data-tag=\"marketing\" \
             data-exclude-search=\"true\" data-exclude-hash=\"true\"></script>"
        );
    }

    #[test]
    fn test_domains_join_does_not_escape_commas() {
        // Documented limitation: a comma inside an entry is
        // indistinguishable from a separator.
        let mut options = TrackingOptions::new("abc");
        options.domains = Some(vec!["a,b".into(), "c".into()]);
        assert!(build_script_tag(&options).contains("data-domains=\"a,b,c\""));
    }

    #[test]
    fn test_empty_domains_list_emits_no_attribute() {
        let mut options = TrackingOptions::new("abc");
        options.domains = Some(Vec::new());
        assert!(!build_script_tag(&options).contains("data-domains"));
    }

    #[test]
    fn test_config_snippet_shape() {
        let mut options = TrackingOptions::new("abc");
        options.host = "https://stats.example.com/".into();
        assert_eq!(
            build_config_snippet(&options),
            "<script>window.__entrolytics = \
             {\"websiteId\":\"abc\",\"host\":\"https://stats.example.com\"};</script>"
        );
    }

    #[test]
    fn test_config_snippet_escapes_quotes() {
        let options = TrackingOptions::new("a\"b");
        let snippet = build_config_snippet(&options);
        assert!(snippet.contains("\\\"b\"") || snippet.contains("a\\\""));
        // The raw quote must not terminate the JSON string.
        assert!(!snippet.contains("\"a\"b\""));
    }
}
