//! Duration value types for flags.
//!
//! Two renderings are in use across the components we configure:
//! - [`Duration`]: Go `time.Duration` form (`1h0m0s`, `1m30s`, `500ms`)
//! - [`ModelDuration`]: Prometheus form (`30d`, `2w`, `1h30m`), used for
//!   retention and other long-lived windows

use crate::encoder::{FlagArg, FlagValue, Tag};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

const MILLIS_PER_SECOND: u128 = 1_000;
const MILLIS_PER_MINUTE: u128 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u128 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u128 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: u128 = 7 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: u128 = 365 * MILLIS_PER_DAY;

/// Errors that can occur while parsing a duration string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    #[error("Empty duration string")]
    Empty,

    #[error("Invalid duration format: {0}")]
    InvalidFormat(String),

    #[error("Duration out of range: {0}")]
    OutOfRange(String),
}

/// A duration rendered the way Go's `time.Duration` prints itself.
///
/// Deserializes from humantime strings such as `"90s"` or `"1h 30m"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Duration(#[serde(with = "humantime_serde")] pub std::time::Duration);

impl Duration {
    pub const ZERO: Duration = Duration(std::time::Duration::ZERO);

    pub const fn from_secs(secs: u64) -> Self {
        Self(std::time::Duration::from_secs(secs))
    }

    pub const fn from_millis(millis: u64) -> Self {
        Self(std::time::Duration::from_millis(millis))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<std::time::Duration> for Duration {
    fn from(d: std::time::Duration) -> Self {
        Self(d)
    }
}

/// Write `value / unit` with the remainder as a trimmed decimal fraction
fn write_fraction(f: &mut fmt::Formatter<'_>, value: u128, unit: u128) -> fmt::Result {
    let whole = value / unit;
    let rem = value % unit;
    if rem == 0 {
        return write!(f, "{}", whole);
    }
    let width = unit.to_string().len() - 1;
    let digits = format!("{:0width$}", rem, width = width);
    write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();
        if nanos == 0 {
            return f.write_str("0s");
        }

        if nanos < NANOS_PER_SEC {
            let (unit, suffix) = if nanos < NANOS_PER_MICRO {
                (1, "ns")
            } else if nanos < NANOS_PER_MILLI {
                (NANOS_PER_MICRO, "µs")
            } else {
                (NANOS_PER_MILLI, "ms")
            };
            write_fraction(f, nanos, unit)?;
            return f.write_str(suffix);
        }

        let secs = self.0.as_secs();
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        let sec_nanos = u128::from(secs % 60) * NANOS_PER_SEC + u128::from(self.0.subsec_nanos());
        write_fraction(f, sec_nanos, NANOS_PER_SEC)?;
        f.write_str("s")
    }
}

impl FlagValue for Duration {
    fn render_explicit(&self, _tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        out.push(FlagArg::Value(self.to_string()));
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// A duration in Prometheus notation, e.g. `15d` or `1h30m`.
///
/// Millisecond resolution; sub-millisecond parts are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelDuration(std::time::Duration);

impl ModelDuration {
    pub const ZERO: ModelDuration = ModelDuration(std::time::Duration::ZERO);

    pub const fn from_secs(secs: u64) -> Self {
        Self(std::time::Duration::from_secs(secs))
    }

    pub const fn from_days(days: u64) -> Self {
        Self::from_secs(days * 24 * 3600)
    }

    pub fn as_std(&self) -> std::time::Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.as_millis() == 0
    }
}

fn model_duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:([0-9]+)y)?(?:([0-9]+)w)?(?:([0-9]+)d)?(?:([0-9]+)h)?(?:([0-9]+)m)?(?:([0-9]+)s)?(?:([0-9]+)ms)?$",
        )
        .expect("model duration pattern is valid")
    })
}

impl FromStr for ModelDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DurationParseError::Empty);
        }
        if s == "0" {
            return Ok(Self::ZERO);
        }

        let caps = model_duration_regex()
            .captures(s)
            .ok_or_else(|| DurationParseError::InvalidFormat(s.to_string()))?;

        let units = [
            MILLIS_PER_YEAR,
            MILLIS_PER_WEEK,
            MILLIS_PER_DAY,
            MILLIS_PER_HOUR,
            MILLIS_PER_MINUTE,
            MILLIS_PER_SECOND,
            1,
        ];

        let mut millis: u128 = 0;
        let mut matched = false;
        for (i, unit) in units.iter().enumerate() {
            let Some(m) = caps.get(i + 1) else { continue };
            matched = true;
            let value: u128 = m
                .as_str()
                .parse()
                .map_err(|_| DurationParseError::OutOfRange(s.to_string()))?;
            millis = value
                .checked_mul(*unit)
                .and_then(|v| millis.checked_add(v))
                .ok_or_else(|| DurationParseError::OutOfRange(s.to_string()))?;
        }
        if !matched {
            return Err(DurationParseError::InvalidFormat(s.to_string()));
        }

        let millis = u64::try_from(millis).map_err(|_| DurationParseError::OutOfRange(s.to_string()))?;
        Ok(Self(std::time::Duration::from_millis(millis)))
    }
}

impl TryFrom<String> for ModelDuration {
    type Error = DurationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModelDuration> for String {
    fn from(d: ModelDuration) -> Self {
        d.to_string()
    }
}

impl fmt::Display for ModelDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ms = self.0.as_millis();
        if ms == 0 {
            return f.write_str("0s");
        }

        // Years and weeks are only used when they divide evenly.
        let units: [(&str, u128, bool); 7] = [
            ("y", MILLIS_PER_YEAR, true),
            ("w", MILLIS_PER_WEEK, true),
            ("d", MILLIS_PER_DAY, false),
            ("h", MILLIS_PER_HOUR, false),
            ("m", MILLIS_PER_MINUTE, false),
            ("s", MILLIS_PER_SECOND, false),
            ("ms", 1, false),
        ];
        for (suffix, mult, exact) in units {
            if exact && ms % mult != 0 {
                continue;
            }
            let v = ms / mult;
            if v > 0 {
                write!(f, "{}{}", v, suffix)?;
                ms -= v * mult;
            }
        }
        Ok(())
    }
}

impl FlagValue for ModelDuration {
    fn render_explicit(&self, _tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        out.push(FlagArg::Value(self.to_string()));
    }

    fn is_zero(&self) -> bool {
        ModelDuration::is_zero(self)
    }
}
