use std::{fmt::Display, str::FromStr};
use serde::{Deserialize, Serialize};
use crate::table::LookupError;

/// Device flavor of nodes at 45nm and below
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Flavor {
    #[serde(rename = "HP")]
    HighPerformance,

    #[serde(rename = "LP")]
    LowPower,
}

/// A process node, resolved once from its string token.
///
/// - `"90"` -> `Node::Bare(90)`
/// - `"HP45"` -> `Node::Flavored(Flavor::HighPerformance, 45)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Bare(u32),
    Flavored(Flavor, u32),
}

impl Node {
    pub const fn bare(size: u32) -> Self {
        Self::Bare(size)
    }

    pub const fn hp(size: u32) -> Self {
        Self::Flavored(Flavor::HighPerformance, size)
    }

    pub const fn lp(size: u32) -> Self {
        Self::Flavored(Flavor::LowPower, size)
    }

    /// Technology size in nm, the only part area scaling looks at
    pub const fn size(&self) -> u32 {
        match self {
            Self::Bare(size) | Self::Flavored(_, size) => *size,
        }
    }

    pub const fn flavor(&self) -> Option<Flavor> {
        match self {
            Self::Bare(_) => None,
            Self::Flavored(flavor, _) => Some(*flavor),
        }
    }
}

impl Flavor {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::HighPerformance => "HP",
            Self::LowPower => "LP",
        }
    }
}

impl FromStr for Node {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || LookupError::UnknownNode(s.to_string());

        // "HP"/"LP" carry 'P' as the second character. Any other "?P" prefix
        // is rejected rather than stripped, so "XP45" is not read as 45.
        let (flavor, size) = if s.as_bytes().get(1) == Some(&b'P') {
            let flavor = match &s[..2] {
                "HP" => Flavor::HighPerformance,
                "LP" => Flavor::LowPower,
                _ => return Err(unknown()),
            };
            (Some(flavor), &s[2..])
        } else {
            (None, s)
        };

        // table keys are canonical decimals: no padding, no leading zero
        if size.is_empty() || size.starts_with('0') || !size.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        let size: u32 = size.parse().map_err(|_| unknown())?;

        Ok(match flavor {
            Some(flavor) => Self::Flavored(flavor, size),
            None => Self::Bare(size),
        })
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bare(size) => write!(f, "{}", size),
            Self::Flavored(flavor, size) => write!(f, "{}{}", flavor, size),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
