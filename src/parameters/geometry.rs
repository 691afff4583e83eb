use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownToken;

/// Geometric reference quantities of the wing, used to non-dimensionalize
/// aerodynamic forces and locate the aerodynamic center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WingGeometryField {
    /// Aerodynamic center offset along the body x-axis.
    AcX,
    /// Aerodynamic center offset along the body y-axis.
    AcY,
    /// Aerodynamic center offset along the body z-axis.
    AcZ,
    /// Wing planform area.
    WingArea,
    /// Wing span.
    WingSpan,
    /// Mean aerodynamic chord.
    MeanChord,
}

impl WingGeometryField {
    /// Every member, in declaration order.
    pub const ALL: [WingGeometryField; 6] = [
        WingGeometryField::AcX,
        WingGeometryField::AcY,
        WingGeometryField::AcZ,
        WingGeometryField::WingArea,
        WingGeometryField::WingSpan,
        WingGeometryField::MeanChord,
    ];

    /// Identifier used for this field in `WingGeometry` resource files.
    pub fn token(self) -> &'static str {
        match self {
            WingGeometryField::AcX => "AC_X",
            WingGeometryField::AcY => "AC_Y",
            WingGeometryField::AcZ => "AC_Z",
            WingGeometryField::WingArea => "S_WING",
            WingGeometryField::WingSpan => "B_WING",
            WingGeometryField::MeanChord => "C_BAR",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }
}

impl fmt::Display for WingGeometryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for WingGeometryField {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownToken(s.to_string()))
    }
}
