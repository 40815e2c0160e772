//! Static lookup tables for regions, edges and shortcodes
//!
//! Regions are the legacy way of picking a signaling data center. Edges
//! replace them. Every table here is an immutable constant; the typed
//! lookups on [`Region`], [`Edge`] and [`DeprecatedRegion`] read from them.
//!
//! Tokens that are not in any table are kept verbatim in
//! [`RegionToken::Unknown`] / [`EdgeToken::Unknown`] so that values introduced
//! server-side after a client ships still pass through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Region meaning "no specific region"
pub const DEFAULT_REGION: Region = Region::Gll;

/// Edge meaning "no specific edge"
pub const DEFAULT_EDGE: Edge = Edge::Roaming;

/// Canonical (current) region tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "au1")]
    Au1,
    #[serde(rename = "au1-ix")]
    Au1Ix,
    #[serde(rename = "br1")]
    Br1,
    #[serde(rename = "de1")]
    De1,
    #[serde(rename = "de1-ix")]
    De1Ix,
    #[serde(rename = "gll")]
    Gll,
    #[serde(rename = "ie1")]
    Ie1,
    #[serde(rename = "ie1-ix")]
    Ie1Ix,
    #[serde(rename = "ie1-tnx")]
    Ie1Tnx,
    #[serde(rename = "jp1")]
    Jp1,
    #[serde(rename = "jp1-ix")]
    Jp1Ix,
    #[serde(rename = "sg1")]
    Sg1,
    #[serde(rename = "sg1-ix")]
    Sg1Ix,
    #[serde(rename = "sg1-tnx")]
    Sg1Tnx,
    #[serde(rename = "us1")]
    Us1,
    #[serde(rename = "us1-ix")]
    Us1Ix,
    #[serde(rename = "us1-tnx")]
    Us1Tnx,
    #[serde(rename = "us2")]
    Us2,
    #[serde(rename = "us2-ix")]
    Us2Ix,
    #[serde(rename = "us2-tnx")]
    Us2Tnx,
}

impl Region {
    pub const ALL: [Region; 20] = [
        Region::Au1,
        Region::Au1Ix,
        Region::Br1,
        Region::De1,
        Region::De1Ix,
        Region::Gll,
        Region::Ie1,
        Region::Ie1Ix,
        Region::Ie1Tnx,
        Region::Jp1,
        Region::Jp1Ix,
        Region::Sg1,
        Region::Sg1Ix,
        Region::Sg1Tnx,
        Region::Us1,
        Region::Us1Ix,
        Region::Us1Tnx,
        Region::Us2,
        Region::Us2Ix,
        Region::Us2Tnx,
    ];

    /// Wire token for this region
    pub const fn as_str(self) -> &'static str {
        match self {
            Region::Au1 => "au1",
            Region::Au1Ix => "au1-ix",
            Region::Br1 => "br1",
            Region::De1 => "de1",
            Region::De1Ix => "de1-ix",
            Region::Gll => "gll",
            Region::Ie1 => "ie1",
            Region::Ie1Ix => "ie1-ix",
            Region::Ie1Tnx => "ie1-tnx",
            Region::Jp1 => "jp1",
            Region::Jp1Ix => "jp1-ix",
            Region::Sg1 => "sg1",
            Region::Sg1Ix => "sg1-ix",
            Region::Sg1Tnx => "sg1-tnx",
            Region::Us1 => "us1",
            Region::Us1Ix => "us1-ix",
            Region::Us1Tnx => "us1-tnx",
            Region::Us2 => "us2",
            Region::Us2Ix => "us2-ix",
            Region::Us2Tnx => "us2-tnx",
        }
    }

    /// Edge that should be used instead of this region
    pub fn preferred_edge(self) -> Edge {
        REGION_TO_EDGE
            .iter()
            .find(|(region, _)| *region == self)
            .map(|(_, edge)| *edge)
            .unwrap_or(DEFAULT_EDGE)
    }

    pub fn is_default(self) -> bool {
        self == DEFAULT_REGION
    }
}

/// Retired region aliases, each with a supported successor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeprecatedRegion {
    #[serde(rename = "au")]
    Au,
    #[serde(rename = "br")]
    Br,
    #[serde(rename = "ie")]
    Ie,
    #[serde(rename = "jp")]
    Jp,
    #[serde(rename = "sg")]
    Sg,
    #[serde(rename = "us-or")]
    UsOr,
    #[serde(rename = "us-va")]
    UsVa,
}

impl DeprecatedRegion {
    pub const ALL: [DeprecatedRegion; 7] = [
        DeprecatedRegion::Au,
        DeprecatedRegion::Br,
        DeprecatedRegion::Ie,
        DeprecatedRegion::Jp,
        DeprecatedRegion::Sg,
        DeprecatedRegion::UsOr,
        DeprecatedRegion::UsVa,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DeprecatedRegion::Au => "au",
            DeprecatedRegion::Br => "br",
            DeprecatedRegion::Ie => "ie",
            DeprecatedRegion::Jp => "jp",
            DeprecatedRegion::Sg => "sg",
            DeprecatedRegion::UsOr => "us-or",
            DeprecatedRegion::UsVa => "us-va",
        }
    }

    /// Region that replaced this alias
    pub const fn successor(self) -> Region {
        match self {
            DeprecatedRegion::Au => Region::Au1,
            DeprecatedRegion::Br => Region::Br1,
            DeprecatedRegion::Ie => Region::Ie1,
            DeprecatedRegion::Jp => Region::Jp1,
            DeprecatedRegion::Sg => Region::Sg1,
            DeprecatedRegion::UsOr => Region::Us1,
            DeprecatedRegion::UsVa => Region::Us1,
        }
    }
}

/// Edge locations (points of presence)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Sydney,
    SaoPaulo,
    Dublin,
    Frankfurt,
    Tokyo,
    Singapore,
    Ashburn,
    Umatilla,
    Roaming,
    AshburnIx,
    SanJoseIx,
    LondonIx,
    FrankfurtIx,
    SingaporeIx,
    SydneyIx,
    TokyoIx,
}

impl Edge {
    pub const ALL: [Edge; 16] = [
        Edge::Sydney,
        Edge::SaoPaulo,
        Edge::Dublin,
        Edge::Frankfurt,
        Edge::Tokyo,
        Edge::Singapore,
        Edge::Ashburn,
        Edge::Umatilla,
        Edge::Roaming,
        Edge::AshburnIx,
        Edge::SanJoseIx,
        Edge::LondonIx,
        Edge::FrankfurtIx,
        Edge::SingaporeIx,
        Edge::SydneyIx,
        Edge::TokyoIx,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Edge::Sydney => "sydney",
            Edge::SaoPaulo => "sao-paulo",
            Edge::Dublin => "dublin",
            Edge::Frankfurt => "frankfurt",
            Edge::Tokyo => "tokyo",
            Edge::Singapore => "singapore",
            Edge::Ashburn => "ashburn",
            Edge::Umatilla => "umatilla",
            Edge::Roaming => "roaming",
            Edge::AshburnIx => "ashburn-ix",
            Edge::SanJoseIx => "san-jose-ix",
            Edge::LondonIx => "london-ix",
            Edge::FrankfurtIx => "frankfurt-ix",
            Edge::SingaporeIx => "singapore-ix",
            Edge::SydneyIx => "sydney-ix",
            Edge::TokyoIx => "tokyo-ix",
        }
    }

    /// Region serving this edge
    pub fn region(self) -> Region {
        EDGE_TO_REGION
            .iter()
            .find(|(edge, _)| *edge == self)
            .map(|(_, region)| *region)
            .unwrap_or(DEFAULT_REGION)
    }

    pub fn is_default(self) -> bool {
        self == DEFAULT_EDGE
    }
}

/// Edge -> region
pub const EDGE_TO_REGION: &[(Edge, Region)] = &[
    (Edge::Sydney, Region::Au1),
    (Edge::SaoPaulo, Region::Br1),
    (Edge::Dublin, Region::Ie1),
    (Edge::Frankfurt, Region::De1),
    (Edge::Tokyo, Region::Jp1),
    (Edge::Singapore, Region::Sg1),
    (Edge::Ashburn, Region::Us1),
    (Edge::Umatilla, Region::Us2),
    (Edge::Roaming, Region::Gll),
    (Edge::AshburnIx, Region::Us1Ix),
    (Edge::SanJoseIx, Region::Us2Ix),
    (Edge::LondonIx, Region::Ie1Ix),
    (Edge::FrankfurtIx, Region::De1Ix),
    (Edge::SingaporeIx, Region::Sg1Ix),
    (Edge::SydneyIx, Region::Au1Ix),
    (Edge::TokyoIx, Region::Jp1Ix),
];

/// Region -> recommended replacement edge
///
/// The "tnx" regions have no edge of their own and point at the nearest
/// interconnect edge.
pub const REGION_TO_EDGE: &[(Region, Edge)] = &[
    (Region::Au1, Edge::Sydney),
    (Region::Br1, Edge::SaoPaulo),
    (Region::Ie1, Edge::Dublin),
    (Region::De1, Edge::Frankfurt),
    (Region::Jp1, Edge::Tokyo),
    (Region::Sg1, Edge::Singapore),
    (Region::Us1, Edge::Ashburn),
    (Region::Us2, Edge::Umatilla),
    (Region::Gll, Edge::Roaming),
    (Region::Us1Ix, Edge::AshburnIx),
    (Region::Us2Ix, Edge::SanJoseIx),
    (Region::Ie1Ix, Edge::LondonIx),
    (Region::De1Ix, Edge::FrankfurtIx),
    (Region::Sg1Ix, Edge::SingaporeIx),
    (Region::Au1Ix, Edge::SydneyIx),
    (Region::Jp1Ix, Edge::TokyoIx),
    (Region::Us1Tnx, Edge::AshburnIx),
    (Region::Us2Tnx, Edge::AshburnIx),
    (Region::Ie1Tnx, Edge::LondonIx),
    (Region::Sg1Tnx, Edge::SingaporeIx),
];

/// Retired region -> successor region
pub const DEPRECATED_REGIONS: &[(DeprecatedRegion, Region)] = &[
    (DeprecatedRegion::Au, Region::Au1),
    (DeprecatedRegion::Br, Region::Br1),
    (DeprecatedRegion::Ie, Region::Ie1),
    (DeprecatedRegion::Jp, Region::Jp1),
    (DeprecatedRegion::Sg, Region::Sg1),
    (DeprecatedRegion::UsOr, Region::Us1),
    (DeprecatedRegion::UsVa, Region::Us1),
];

/// Shortcode -> region
pub const SHORTCODES: &[(&str, Region)] = &[
    ("ASIAPAC_SINGAPORE", Region::Sg1),
    ("ASIAPAC_SYDNEY", Region::Au1),
    ("ASIAPAC_TOKYO", Region::Jp1),
    ("EU_FRANKFURT", Region::De1),
    ("EU_IRELAND", Region::Ie1),
    ("SOUTH_AMERICA_SAO_PAULO", Region::Br1),
    ("US_EAST_VIRGINIA", Region::Us1),
    ("US_WEST_OREGON", Region::Us2),
];

/// Every region token accepted as input: canonical regions followed by
/// deprecated aliases
pub fn valid_regions() -> impl Iterator<Item = &'static str> {
    Region::ALL
        .iter()
        .map(|r| r.as_str())
        .chain(DeprecatedRegion::ALL.iter().map(|d| d.as_str()))
}

/// True if `token` is a canonical region or a deprecated alias
pub fn is_valid_region(token: &str) -> bool {
    valid_regions().any(|r| r == token)
}

/// Parse error for strict token parsing (`FromStr`)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} token: {token:?}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

impl FromStr for Region {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownToken {
                kind: "region",
                token: s.to_string(),
            })
    }
}

impl FromStr for DeprecatedRegion {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeprecatedRegion::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownToken {
                kind: "deprecated region",
                token: s.to_string(),
            })
    }
}

impl FromStr for Edge {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Edge::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| UnknownToken {
                kind: "edge",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DeprecatedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region token as supplied by a caller
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionToken {
    Current(Region),
    Deprecated(DeprecatedRegion),
    /// Not in any table; passed through untouched
    Unknown(String),
}

impl RegionToken {
    /// Classify a raw token. Never fails.
    pub fn parse(raw: &str) -> Self {
        if let Ok(region) = raw.parse::<Region>() {
            RegionToken::Current(region)
        } else if let Ok(deprecated) = raw.parse::<DeprecatedRegion>() {
            RegionToken::Deprecated(deprecated)
        } else {
            RegionToken::Unknown(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionToken::Current(r) => r.as_str(),
            RegionToken::Deprecated(d) => d.as_str(),
            RegionToken::Unknown(raw) => raw,
        }
    }
}

/// An edge token as supplied by a caller
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeToken {
    Known(Edge),
    Unknown(String),
}

impl EdgeToken {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Edge>() {
            Ok(edge) => EdgeToken::Known(edge),
            Err(_) => EdgeToken::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EdgeToken::Known(e) => e.as_str(),
            EdgeToken::Unknown(raw) => raw,
        }
    }
}

/// Look up a shortcode
pub fn shortcode_region(code: &str) -> Option<Region> {
    SHORTCODES
        .iter()
        .find(|(shortcode, _)| *shortcode == code)
        .map(|(_, region)| *region)
}
