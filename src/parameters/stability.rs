use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownToken;

/// Non-dimensional stability and control derivatives for the full
/// aerodynamic model.
///
/// Naming follows the usual force/moment axes: CL lift, CY side force,
/// CD drag, CRoll/CM/CN the roll, pitch and yaw moments. Suffixes name
/// the flight-state variable the derivative is taken with respect to
/// (alpha, beta, body rates p/q/r) or the deflected control surface
/// (elevator, flap, aileron, rudder, landing gear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StabilityDerivative {
    // Lift
    ClAlpha,
    Cl0,
    ClQ,
    ClAlphaDot,
    ClDeltaE,
    ClDeltaF,
    // Side force
    CyBeta,
    CyDeltaR,
    // Drag
    CdAlpha,
    Cd0,
    CdDeltaE,
    CdDeltaF,
    CdDeltaG,
    // Roll moment
    CRollBeta,
    CRollP,
    CRollR,
    CRollDeltaA,
    CRollDeltaR,
    // Pitch moment
    CmAlpha,
    Cm0,
    CmQ,
    CmAlphaDot,
    CmDeltaE,
    CmDeltaF,
    // Yaw moment
    CnBeta,
    CnP,
    CnR,
    CnDeltaA,
    CnDeltaR,
}

impl StabilityDerivative {
    /// Every member, in declaration order. The loader scans this slice
    /// when matching resource-file identifiers.
    pub const ALL: [StabilityDerivative; 29] = [
        StabilityDerivative::ClAlpha,
        StabilityDerivative::Cl0,
        StabilityDerivative::ClQ,
        StabilityDerivative::ClAlphaDot,
        StabilityDerivative::ClDeltaE,
        StabilityDerivative::ClDeltaF,
        StabilityDerivative::CyBeta,
        StabilityDerivative::CyDeltaR,
        StabilityDerivative::CdAlpha,
        StabilityDerivative::Cd0,
        StabilityDerivative::CdDeltaE,
        StabilityDerivative::CdDeltaF,
        StabilityDerivative::CdDeltaG,
        StabilityDerivative::CRollBeta,
        StabilityDerivative::CRollP,
        StabilityDerivative::CRollR,
        StabilityDerivative::CRollDeltaA,
        StabilityDerivative::CRollDeltaR,
        StabilityDerivative::CmAlpha,
        StabilityDerivative::Cm0,
        StabilityDerivative::CmQ,
        StabilityDerivative::CmAlphaDot,
        StabilityDerivative::CmDeltaE,
        StabilityDerivative::CmDeltaF,
        StabilityDerivative::CnBeta,
        StabilityDerivative::CnP,
        StabilityDerivative::CnR,
        StabilityDerivative::CnDeltaA,
        StabilityDerivative::CnDeltaR,
    ];

    /// Identifier used for this derivative in `Aero` resource files.
    pub fn token(self) -> &'static str {
        match self {
            StabilityDerivative::ClAlpha => "CL_ALPHA",
            StabilityDerivative::Cl0 => "CL_0",
            StabilityDerivative::ClQ => "CL_Q",
            StabilityDerivative::ClAlphaDot => "CL_ALPHA_DOT",
            StabilityDerivative::ClDeltaE => "CL_D_ELEV",
            StabilityDerivative::ClDeltaF => "CL_D_FLAP",
            StabilityDerivative::CyBeta => "CY_BETA",
            StabilityDerivative::CyDeltaR => "CY_D_RUD",
            StabilityDerivative::CdAlpha => "CD_ALPHA",
            StabilityDerivative::Cd0 => "CD_0",
            StabilityDerivative::CdDeltaE => "CD_D_ELEV",
            StabilityDerivative::CdDeltaF => "CD_D_FLAP",
            StabilityDerivative::CdDeltaG => "CD_D_GEAR",
            StabilityDerivative::CRollBeta => "CROLL_BETA",
            StabilityDerivative::CRollP => "CROLL_P",
            StabilityDerivative::CRollR => "CROLL_R",
            StabilityDerivative::CRollDeltaA => "CROLL_D_AIL",
            StabilityDerivative::CRollDeltaR => "CROLL_D_RUD",
            StabilityDerivative::CmAlpha => "CM_ALPHA",
            StabilityDerivative::Cm0 => "CM_0",
            StabilityDerivative::CmQ => "CM_Q",
            StabilityDerivative::CmAlphaDot => "CM_ALPHA_DOT",
            StabilityDerivative::CmDeltaE => "CM_D_ELEV",
            StabilityDerivative::CmDeltaF => "CM_D_FLAP",
            StabilityDerivative::CnBeta => "CN_BETA",
            StabilityDerivative::CnP => "CN_P",
            StabilityDerivative::CnR => "CN_R",
            StabilityDerivative::CnDeltaA => "CN_D_AIL",
            StabilityDerivative::CnDeltaR => "CN_D_RUD",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.token() == token)
    }
}

impl fmt::Display for StabilityDerivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for StabilityDerivative {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownToken(s.to_string()))
    }
}
