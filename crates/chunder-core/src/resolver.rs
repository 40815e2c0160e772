//! Signaling hostname resolution
//!
//! Turns an edge and/or region selection into the hostname to connect to.
//! Edges are the current model; any region-only selection yields a
//! deprecation advisory.

use tracing::debug;

use crate::deprecation::{self, Advisory, OnDeprecatedMessage, OnDeprecatedRegion};
use crate::error::ResolveError;
use crate::tables::{self, EdgeToken, Region, RegionToken};
use crate::uri::build_uri;

/// Resolve a legacy region to its hostname.
///
/// A deprecated region is swapped for its successor, and `on_deprecated`
/// receives that successor. Everything else resolves without a callback.
pub fn resolve_region_uri(
    region: Option<&str>,
    on_deprecated: Option<OnDeprecatedRegion<'_>>,
) -> String {
    let Some(raw) = region else {
        return build_uri(None);
    };

    match RegionToken::parse(raw) {
        RegionToken::Current(r) if r.is_default() => build_uri(None),
        RegionToken::Deprecated(deprecated) => {
            let successor = deprecated.successor();
            deprecation::notify_successor(on_deprecated, raw, successor);
            build_uri(Some(successor.as_str()))
        }
        token => {
            debug!("Region {:?} resolved as-is", token.as_str());
            build_uri(Some(raw))
        }
    }
}

/// Resolve an edge or a region to a hostname.
///
/// At most one of `edge` and `region` may be given. A region-only selection
/// always passes exactly one advisory message to `on_deprecated`.
pub fn resolve_chunder_uri(
    edge: Option<&str>,
    region: Option<&str>,
    on_deprecated: Option<OnDeprecatedMessage<'_>>,
) -> Result<String, ResolveError> {
    match (edge, region) {
        (Some(edge), Some(region)) => Err(ResolveError::InvalidArgument {
            edge: edge.to_string(),
            region: region.to_string(),
        }),
        (None, None) => Ok(build_uri(None)),
        (Some(edge), None) => Ok(edge_uri(edge)),
        (None, Some(region)) => Ok(region_uri_with_advisory(region, on_deprecated)),
    }
}

/// Resolve a list of edges (in preference order) to hostnames.
///
/// An empty list falls back to [`resolve_chunder_uri`] with only `region`.
/// Duplicate hostnames are dropped, keeping the first occurrence.
pub fn resolve_chunder_uris(
    edges: &[&str],
    region: Option<&str>,
    on_deprecated: Option<OnDeprecatedMessage<'_>>,
) -> Result<Vec<String>, ResolveError> {
    if edges.is_empty() {
        return resolve_chunder_uri(None, region, on_deprecated).map(|uri| vec![uri]);
    }

    if let Some(region) = region {
        return Err(ResolveError::InvalidArgument {
            edge: edges.join(","),
            region: region.to_string(),
        });
    }

    let mut uris: Vec<String> = Vec::with_capacity(edges.len());
    for edge in edges {
        let uri = edge_uri(edge);
        if !uris.contains(&uri) {
            uris.push(uri);
        }
    }
    Ok(uris)
}

/// Look up the region behind a shortcode
pub fn resolve_shortcode(code: &str) -> Option<Region> {
    tables::shortcode_region(code)
}

fn edge_uri(raw: &str) -> String {
    match EdgeToken::parse(raw) {
        EdgeToken::Known(edge) if edge.is_default() => build_uri(None),
        EdgeToken::Known(edge) => {
            let region = edge.region();
            debug!("Edge {} maps to region {}", edge, region);
            build_uri(Some(region.as_str()))
        }
        EdgeToken::Unknown(raw) => {
            debug!("Unrecognized edge {:?}, passing through", raw);
            build_uri(Some(raw.as_str()))
        }
    }
}

fn region_uri_with_advisory(raw: &str, on_deprecated: Option<OnDeprecatedMessage<'_>>) -> String {
    let token = RegionToken::parse(raw);
    deprecation::notify_message(on_deprecated, &Advisory::for_region(&token));

    match token {
        RegionToken::Current(region) if region.is_default() => build_uri(None),
        RegionToken::Current(region) => build_uri(Some(region.as_str())),
        RegionToken::Deprecated(deprecated) => build_uri(Some(deprecated.successor().as_str())),
        RegionToken::Unknown(raw) => build_uri(Some(raw.as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{
        Edge, DEFAULT_EDGE, DEFAULT_REGION, DEPRECATED_REGIONS, EDGE_TO_REGION, REGION_TO_EDGE,
        SHORTCODES,
    };

    const BASE: &str = "chunderw-vpc-gll.twilio.com";

    fn uri_for(token: &str) -> String {
        format!("chunderw-vpc-gll-{}.twilio.com", token)
    }

    /// Run `resolve_chunder_uri` and collect every advisory message
    fn chunder(edge: Option<&str>, region: Option<&str>) -> (Result<String, ResolveError>, Vec<String>) {
        let mut messages = Vec::new();
        let mut on_deprecated = |message: &str| messages.push(message.to_string());
        let result = resolve_chunder_uri(edge, region, Some(&mut on_deprecated));
        (result, messages)
    }

    #[test]
    fn test_region_uri_deprecated_regions() {
        for (deprecated, successor) in DEPRECATED_REGIONS {
            let mut seen = Vec::new();
            let mut on_deprecated = |region: Region| seen.push(region);
            let uri = resolve_region_uri(Some(deprecated.as_str()), Some(&mut on_deprecated));
            assert_eq!(uri, uri_for(successor.as_str()));
            assert_eq!(seen, vec![*successor]);
        }
    }

    #[test]
    fn test_region_uri_default() {
        let mut calls = 0;
        let mut on_deprecated = |_: Region| calls += 1;
        assert_eq!(resolve_region_uri(None, Some(&mut on_deprecated)), BASE);
        assert_eq!(resolve_region_uri(Some("gll"), Some(&mut on_deprecated)), BASE);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_region_uri_passthrough() {
        let mut calls = 0;
        let mut on_deprecated = |_: Region| calls += 1;
        assert_eq!(resolve_region_uri(Some("de1"), Some(&mut on_deprecated)), uri_for("de1"));
        assert_eq!(
            resolve_region_uri(Some("unknown-region"), Some(&mut on_deprecated)),
            uri_for("unknown-region")
        );
        assert_eq!(calls, 0);
        assert_eq!(resolve_region_uri(Some("au"), None), uri_for("au1"));
    }

    #[test]
    fn test_chunder_uri_edge_and_region_conflict() {
        let (result, messages) = chunder(Some("foo"), Some("bar"));
        assert_eq!(
            result,
            Err(ResolveError::InvalidArgument {
                edge: "foo".into(),
                region: "bar".into()
            })
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn test_chunder_uri_nothing_selected() {
        let (result, messages) = chunder(None, None);
        assert_eq!(result.unwrap(), BASE);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_chunder_uri_known_edges() {
        for (edge, region) in EDGE_TO_REGION {
            let (result, messages) = chunder(Some(edge.as_str()), None);
            let expected = if edge.is_default() {
                BASE.to_string()
            } else {
                uri_for(region.as_str())
            };
            assert_eq!(result.unwrap(), expected, "edge {}", edge);
            assert!(messages.is_empty());
        }
    }

    #[test]
    fn test_chunder_uri_unknown_edge() {
        let (result, messages) = chunder(Some("mars-ix"), None);
        assert_eq!(result.unwrap(), uri_for("mars-ix"));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_chunder_uri_known_regions() {
        for (region, edge) in REGION_TO_EDGE {
            if region.is_default() {
                continue;
            }
            let (result, messages) = chunder(None, Some(region.as_str()));
            assert_eq!(result.unwrap(), uri_for(region.as_str()));
            assert_eq!(messages.len(), 1);
            let expected = format!("please use `edge` \"{}\"", edge);
            assert!(messages[0].contains(&expected), "{}", messages[0]);
            assert_eq!(messages[0].matches("edge").count(), 2);
        }
    }

    #[test]
    fn test_chunder_uri_deprecated_regions() {
        for (deprecated, successor) in DEPRECATED_REGIONS {
            let (result, messages) = chunder(None, Some(deprecated.as_str()));
            assert_eq!(result.unwrap(), uri_for(successor.as_str()));
            assert_eq!(messages.len(), 1);
            let expected = format!("please use `edge` \"{}\"", successor.preferred_edge());
            assert!(messages[0].contains(&expected), "{}", messages[0]);
            assert_eq!(messages[0].matches("edge").count(), 2);
        }
    }

    #[test]
    fn test_chunder_uri_default_region() {
        let (result, messages) = chunder(None, Some(DEFAULT_REGION.as_str()));
        assert_eq!(result.unwrap(), BASE);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].matches("edge").count(), 2);
        let phrase = format!("please use `edge` \"{}\"", DEFAULT_EDGE);
        assert_eq!(messages[0].matches(phrase.as_str()).count(), 1);
    }

    #[test]
    fn test_chunder_uri_unknown_region() {
        let (result, messages) = chunder(None, Some("unknown-region"));
        assert_eq!(result.unwrap(), uri_for("unknown-region"));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].matches("edge").count(), 1);
        assert!(!messages[0].contains("please use"));
    }

    #[test]
    fn test_chunder_uri_without_callback() {
        assert_eq!(resolve_chunder_uri(None, Some("sg"), None).unwrap(), uri_for("sg1"));
        assert_eq!(
            resolve_chunder_uri(Some("tokyo"), None, None).unwrap(),
            uri_for("jp1")
        );
    }

    #[test]
    fn test_chunder_uri_idempotent() {
        for region in ["au", "us2", "gll", "nowhere"] {
            let first = chunder(None, Some(region));
            let second = chunder(None, Some(region));
            assert_eq!(first, second);
        }
        assert_eq!(chunder(Some("dublin"), None), chunder(Some("dublin"), None));
    }

    #[test]
    fn test_chunder_uris() {
        let uris = resolve_chunder_uris(&["sydney", "tokyo", "sydney", "roaming"], None, None).unwrap();
        assert_eq!(uris, vec![uri_for("au1"), uri_for("jp1"), BASE.to_string()]);

        let err = resolve_chunder_uris(&["sydney", "tokyo"], Some("au1"), None).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidArgument {
                edge: "sydney,tokyo".into(),
                region: "au1".into()
            }
        );
    }

    #[test]
    fn test_chunder_uris_falls_back_to_region() {
        let mut calls = 0;
        let mut on_deprecated = |_: &str| calls += 1;
        let uris = resolve_chunder_uris(&[], Some("ie"), Some(&mut on_deprecated)).unwrap();
        assert_eq!(uris, vec![uri_for("ie1")]);
        assert_eq!(calls, 1);
        assert_eq!(resolve_chunder_uris(&[], None, None).unwrap(), vec![BASE.to_string()]);
    }

    #[test]
    fn test_resolve_shortcode() {
        for (code, region) in SHORTCODES {
            assert_eq!(resolve_shortcode(code), Some(*region));
        }
        assert_eq!(resolve_shortcode("not-a-code"), None);
        assert_eq!(resolve_shortcode(Edge::Sydney.as_str()), None);
    }
}
