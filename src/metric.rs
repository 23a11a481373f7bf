use std::{fmt::Display, str::FromStr};
use serde::{Deserialize, Serialize};
use crate::convert::ConvertError;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Area,
    Delay,
    Energy,
    Power,
}

impl Metric {
    pub const ALL: [Metric; 4] = [Self::Area, Self::Delay, Self::Energy, Self::Power];

    /// Map a command line short flag: "a", "d", "e" or "p"
    pub fn from_flag(flag: &str) -> Result<Self, ConvertError> {
        match flag {
            "a" => Ok(Self::Area),
            "d" => Ok(Self::Delay),
            "e" => Ok(Self::Energy),
            "p" => Ok(Self::Power),
            _ => Err(ConvertError::invalid_arg(format!("unknown metric flag '{}'", flag))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Delay => "delay",
            Self::Energy => "energy",
            Self::Power => "power",
        }
    }

    /// Whether the supply voltages take part in the conversion
    pub fn is_voltage_dependent(&self) -> bool {
        !matches!(self, Self::Area)
    }
}

impl FromStr for Metric {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| ConvertError::invalid_arg(format!("unknown metric '{}'", s)))
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_names() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
        }
        assert!(matches!("Area".parse::<Metric>(), Err(ConvertError::InvalidArgument(_))));
        assert!(matches!("d".parse::<Metric>(), Err(ConvertError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_flags() {
        assert_eq!(Metric::from_flag("a").unwrap(), Metric::Area);
        assert_eq!(Metric::from_flag("d").unwrap(), Metric::Delay);
        assert_eq!(Metric::from_flag("e").unwrap(), Metric::Energy);
        assert_eq!(Metric::from_flag("p").unwrap(), Metric::Power);
        assert!(Metric::from_flag("x").is_err());
    }

    #[test]
    fn test_voltage_dependent() {
        assert!(!Metric::Area.is_voltage_dependent());
        assert!(Metric::Delay.is_voltage_dependent());
        assert!(Metric::Energy.is_voltage_dependent());
        assert!(Metric::Power.is_voltage_dependent());
    }
}
