//! Error types for hostname resolution

use thiserror::Error;

/// Resolution errors
///
/// Unknown edge, region and shortcode tokens are not errors; they pass
/// through so that tokens added server-side keep working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Both an edge and a region were supplied
    #[error("invalid argument: `edge` ({edge:?}) and `region` ({region:?}) are mutually exclusive")]
    InvalidArgument { edge: String, region: String },
}
