//! Deprecation advisories for the legacy region model
//!
//! Two callback shapes exist:
//! [`resolve_region_uri`](crate::resolve_region_uri) hands the caller the
//! successor [`Region`], while [`resolve_chunder_uri`](crate::resolve_chunder_uri)
//! hands over a human-readable message.

use std::fmt;

use tracing::warn;

use crate::tables::{Edge, Region, RegionToken, DEFAULT_EDGE};

/// Callback receiving the region that replaces a deprecated one
pub type OnDeprecatedRegion<'a> = &'a mut dyn FnMut(Region);

/// Callback receiving a deprecation message
pub type OnDeprecatedMessage<'a> = &'a mut dyn FnMut(&str);

const REGIONS_DEPRECATED: &str = "Regions are deprecated in favor of edges.";

/// What to tell a caller that selected a region instead of an edge
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// Nothing specific to recommend
    Generic,
    /// Recommend an edge in place of the given region
    PreferEdge { edge: Edge, region: String },
}

impl Advisory {
    /// Pick the advisory for a region-only selection
    pub fn for_region(token: &RegionToken) -> Self {
        let edge = match token {
            RegionToken::Current(region) if region.is_default() => DEFAULT_EDGE,
            RegionToken::Current(region) => region.preferred_edge(),
            RegionToken::Deprecated(deprecated) => deprecated.successor().preferred_edge(),
            RegionToken::Unknown(_) => return Advisory::Generic,
        };
        Advisory::PreferEdge {
            edge,
            region: token.as_str().to_string(),
        }
    }

    pub fn recommended_edge(&self) -> Option<Edge> {
        match self {
            Advisory::Generic => None,
            Advisory::PreferEdge { edge, .. } => Some(*edge),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Generic => f.write_str(REGIONS_DEPRECATED),
            Advisory::PreferEdge { edge, region } => write!(
                f,
                "{} Going forward, please use `edge` \"{}\" instead of `region` \"{}\".",
                REGIONS_DEPRECATED, edge, region
            ),
        }
    }
}

/// Deliver a message advisory, if anyone is listening
pub(crate) fn notify_message(on_deprecated: Option<OnDeprecatedMessage<'_>>, advisory: &Advisory) {
    let message = advisory.to_string();
    warn!("{}", message);
    if let Some(callback) = on_deprecated {
        callback(&message);
    }
}

/// Deliver the successor of a deprecated region, if anyone is listening
pub(crate) fn notify_successor(
    on_deprecated: Option<OnDeprecatedRegion<'_>>,
    deprecated: &str,
    successor: Region,
) {
    warn!("Region {:?} is deprecated, use {:?}", deprecated, successor.as_str());
    if let Some(callback) = on_deprecated {
        callback(successor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::DeprecatedRegion;

    #[test]
    fn test_advisory_for_known_region() {
        let advisory = Advisory::for_region(&RegionToken::Current(Region::Jp1));
        assert_eq!(advisory.recommended_edge(), Some(Edge::Tokyo));
        let message = advisory.to_string();
        assert!(message.contains("please use `edge` \"tokyo\""));
        assert!(message.contains("`region` \"jp1\""));
        assert_eq!(message.matches("edge").count(), 2);
    }

    #[test]
    fn test_advisory_for_deprecated_region() {
        let advisory = Advisory::for_region(&RegionToken::Deprecated(DeprecatedRegion::UsVa));
        assert_eq!(advisory.recommended_edge(), Some(Edge::Ashburn));
        assert!(advisory.to_string().contains("`region` \"us-va\""));
    }

    #[test]
    fn test_advisory_for_unknown_region() {
        let advisory = Advisory::for_region(&RegionToken::Unknown("xx9".into()));
        assert_eq!(advisory, Advisory::Generic);
        let message = advisory.to_string();
        assert_eq!(message.matches("edge").count(), 1);
        assert!(!message.contains("please use"));
    }

    #[test]
    fn test_notify_without_listener() {
        notify_message(None, &Advisory::Generic);
        notify_successor(None, "au", Region::Au1);
    }
}
