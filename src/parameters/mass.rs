use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownToken;

/// Rigid-body mass distribution: center of gravity, moments and product
/// of inertia, and the component weights that make up total mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassPropertyField {
    /// Center of gravity offset along the body x-axis.
    CgX,
    /// Center of gravity offset along the body y-axis.
    CgY,
    /// Center of gravity offset along the body z-axis.
    CgZ,
    /// Moment of inertia about the body x-axis.
    Jx,
    /// Moment of inertia about the body y-axis.
    Jy,
    /// Moment of inertia about the body z-axis.
    Jz,
    /// Product of inertia between the body x and z axes.
    Jxz,
    /// Empty (airframe) weight.
    WeightEmpty,
    /// Fuel weight.
    WeightFuel,
    /// Payload weight.
    WeightPayload,
    /// Total mass, derived from the three weights and gravity.
    TotalMass,
}

impl MassPropertyField {
    /// Every member, in declaration order.
    pub const ALL: [MassPropertyField; 11] = [
        MassPropertyField::CgX,
        MassPropertyField::CgY,
        MassPropertyField::CgZ,
        MassPropertyField::Jx,
        MassPropertyField::Jy,
        MassPropertyField::Jz,
        MassPropertyField::Jxz,
        MassPropertyField::WeightEmpty,
        MassPropertyField::WeightFuel,
        MassPropertyField::WeightPayload,
        MassPropertyField::TotalMass,
    ];

    /// Identifier used for this field in `MassProperties` resource files.
    pub fn token(self) -> &'static str {
        match self {
            MassPropertyField::CgX => "CG_X",
            MassPropertyField::CgY => "CG_Y",
            MassPropertyField::CgZ => "CG_Z",
            MassPropertyField::Jx => "J_X",
            MassPropertyField::Jy => "J_Y",
            MassPropertyField::Jz => "J_Z",
            MassPropertyField::Jxz => "J_XZ",
            MassPropertyField::WeightEmpty => "WEIGHT_EMPTY",
            MassPropertyField::WeightFuel => "WEIGHT_FUEL",
            MassPropertyField::WeightPayload => "WEIGHT_PAYLOAD",
            MassPropertyField::TotalMass => "TOTAL_MASS",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }
}

impl fmt::Display for MassPropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for MassPropertyField {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownToken(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_are_unique() {
        let tokens: HashSet<_> = MassPropertyField::ALL.iter().map(|f| f.token()).collect();
        assert_eq!(tokens.len(), MassPropertyField::ALL.len());
    }

    #[test]
    fn token_round_trips_through_from_str() {
        for field in MassPropertyField::ALL {
            assert_eq!(field.token().parse::<MassPropertyField>().unwrap(), field);
        }
    }
}
