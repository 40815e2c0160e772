//! Chunder Core - Signaling hostname resolution
//!
//! Maps an edge (current model) or a region (legacy model) to the
//! signaling hostname a client should connect to, and tells callers of
//! the legacy model what to use instead.
//!
//! Everything here is synchronous and free of I/O apart from the config
//! file helpers in [`config`].

pub mod config;
pub mod deprecation;
pub mod error;
pub mod resolver;
pub mod tables;
pub mod uri;

pub use config::{Config, ConfigError, ConnectionConfig};
pub use deprecation::{Advisory, OnDeprecatedMessage, OnDeprecatedRegion};
pub use error::ResolveError;
pub use resolver::{resolve_chunder_uri, resolve_chunder_uris, resolve_region_uri, resolve_shortcode};
pub use tables::{
    is_valid_region, valid_regions, DeprecatedRegion, Edge, EdgeToken, Region, RegionToken,
    DEFAULT_EDGE, DEFAULT_REGION, DEPRECATED_REGIONS, EDGE_TO_REGION, REGION_TO_EDGE, SHORTCODES,
};
pub use uri::{build_uri, BASE_URI};
