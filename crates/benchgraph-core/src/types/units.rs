//! Closed unit enumerations for the time and memory axes.
//!
//! Every recognized token maps to exactly one variant, and every variant
//! carries its multiplier into the axis base unit (nanoseconds, bytes).
//! An unrecognized token is a `UnitError`, never a silent fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::UnitError;

/// Shared behaviour of a chart axis unit: a base unit, a multiplier into it,
/// and the ladder of progressively larger units used for scale-up.
pub trait AxisUnit: Copy + Eq + fmt::Debug + 'static {
    /// The finest-grained unit of the axis.
    const BASE: Self;

    /// Units after `BASE`, each 1000x the previous one.
    const LADDER: &'static [Self];

    /// Multiplier converting a value in this unit into `BASE`.
    fn multiplier(self) -> f64;

    /// Canonical token, e.g. `"µs"` or `"MB"`.
    fn as_str(self) -> &'static str;
}

/// Time unit of a measurement's `value`. A null token on the wire means `Nanos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    #[default]
    Nanos,
    Micros,
    Millis,
    Seconds,
}

impl TimeUnit {
    /// Parse an optional wire token. `None` is nanoseconds.
    pub fn from_token(token: Option<&str>) -> Result<Self, UnitError> {
        match token {
            None => Ok(Self::Nanos),
            Some(t) => t.parse(),
        }
    }
}

impl AxisUnit for TimeUnit {
    const BASE: Self = Self::Nanos;
    const LADDER: &'static [Self] = &[Self::Micros, Self::Millis, Self::Seconds];

    fn multiplier(self) -> f64 {
        match self {
            Self::Nanos => 1.0,
            Self::Micros => 1e3,
            Self::Millis => 1e6,
            Self::Seconds => 1e9,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "µs",
            Self::Millis => "ms",
            Self::Seconds => "s",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(Self::Nanos),
            // micro sign (U+00B5), greek mu (U+03BC), and the ASCII spelling
            "\u{b5}s" | "\u{3bc}s" | "us" => Ok(Self::Micros),
            "ms" => Ok(Self::Millis),
            "s" => Ok(Self::Seconds),
            other => Err(UnitError::InvalidTimeUnit {
                unit: other.to_string(),
            }),
        }
    }
}

/// Memory unit of a measurement's `bytes_allocated`. A null token means `Bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemoryUnit {
    #[default]
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl MemoryUnit {
    /// Parse an optional wire token. `None` is bytes.
    pub fn from_token(token: Option<&str>) -> Result<Self, UnitError> {
        match token {
            None => Ok(Self::Bytes),
            Some(t) => t.parse(),
        }
    }
}

impl AxisUnit for MemoryUnit {
    const BASE: Self = Self::Bytes;
    const LADDER: &'static [Self] = &[
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
        Self::Terabytes,
    ];

    fn multiplier(self) -> f64 {
        match self {
            Self::Bytes => 1.0,
            Self::Kilobytes => 1e3,
            Self::Megabytes => 1e6,
            Self::Gigabytes => 1e9,
            Self::Terabytes => 1e12,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Bytes => "B",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
            Self::Terabytes => "TB",
        }
    }
}

impl FromStr for MemoryUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Self::Bytes),
            "KB" => Ok(Self::Kilobytes),
            "MB" => Ok(Self::Megabytes),
            "GB" => Ok(Self::Gigabytes),
            "TB" => Ok(Self::Terabytes),
            other => Err(UnitError::InvalidMemoryUnit {
                unit: other.to_string(),
            }),
        }
    }
}

macro_rules! impl_unit_serde {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_unit_serde!(TimeUnit);
impl_unit_serde!(MemoryUnit);
