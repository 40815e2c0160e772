//! Signaling hostname formatting

use crate::tables::{DEFAULT_EDGE, DEFAULT_REGION};

/// Hostname used when no region or edge is selected
pub const BASE_URI: &str = "chunderw-vpc-gll.twilio.com";

/// Build the signaling hostname for a region/edge suffix.
///
/// `None`, the default region and the default edge all give [`BASE_URI`].
/// Any other suffix is inserted verbatim.
pub fn build_uri(suffix: Option<&str>) -> String {
    match suffix {
        None => BASE_URI.to_string(),
        Some(s) if s == DEFAULT_REGION.as_str() || s == DEFAULT_EDGE.as_str() => {
            BASE_URI.to_string()
        }
        Some(s) => format!("chunderw-vpc-gll-{}.twilio.com", s),
    }
}
