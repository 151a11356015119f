//! Tolerance bands and the admission predicate applied to candidate neighbours
//!
//! A band is a pair of limits whose meaning depends on the admission policy:
//! for the anchored policies the limits are offsets below and above an anchor
//! value, for [`AdmissionPolicy::Absolute`] they are the band itself. Limits
//! are never reordered, so a lower limit above the upper limit yields an
//! empty band that admits nothing.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::io::error::{Result, invalid_argument};

/// Lower and upper limits of the admission band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand<T = f64> {
    /// Distance below the anchor (or absolute minimum) still admitted
    pub lower_limit: T,
    /// Distance above the anchor (or absolute maximum) still admitted
    pub upper_limit: T,
}

impl<T: Float> ToleranceBand<T> {
    /// Create a band from its two limits
    pub const fn new(lower_limit: T, upper_limit: T) -> Self {
        Self {
            lower_limit,
            upper_limit,
        }
    }

    /// Parse both limits from text
    ///
    /// Surrounding whitespace is ignored. Infinite limits are accepted;
    /// NaN is not a number for this purpose and is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first limit that fails to parse
    pub fn parse(lower_limit: &str, upper_limit: &str) -> Result<Self>
    where
        T: FromStr,
        <T as FromStr>::Err: fmt::Display,
    {
        Ok(Self::new(
            parse_limit("lower_limit", lower_limit)?,
            parse_limit("upper_limit", upper_limit)?,
        ))
    }

    /// Check whether the absolute band `[lower_limit, upper_limit]` holds a value
    pub fn contains(&self, value: T) -> bool {
        self.lower_limit <= value && value <= self.upper_limit
    }

    /// Inclusive bounds of the band centred on an anchor value
    pub fn bounds_around(&self, anchor: T) -> (T, T) {
        (anchor - self.lower_limit, anchor + self.upper_limit)
    }

    /// Check whether a value lies in the band centred on an anchor value
    pub fn contains_around(&self, anchor: T, value: T) -> bool {
        let (low, high) = self.bounds_around(anchor);
        low <= value && value <= high
    }

    /// Whether the limits are ordered such that the absolute band is empty
    pub fn is_inverted(&self) -> bool {
        self.lower_limit > self.upper_limit
    }
}

impl<T: fmt::Display> fmt::Display for ToleranceBand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[lower {}, upper {}]", self.lower_limit, self.upper_limit)
    }
}

fn parse_limit<T>(parameter: &'static str, text: &str) -> Result<T>
where
    T: Float + FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    let value = text
        .trim()
        .parse::<T>()
        .map_err(|e| invalid_argument(parameter, &text, &format!("must be a number ({e})")))?;

    if value.is_nan() {
        return Err(invalid_argument(parameter, &text, &"must be a number, not NaN"));
    }

    Ok(value)
}

/// How the tolerance band is anchored while the search expands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdmissionPolicy {
    /// Band re-centres on each expanded cell, letting the region drift
    #[default]
    Relative,
    /// Band stays centred on the start cell's value
    Anchored,
    /// Band is the fixed interval `[lower_limit, upper_limit]`
    Absolute,
}

impl AdmissionPolicy {
    /// All policies in declaration order
    pub const ALL: [Self; 3] = [Self::Relative, Self::Anchored, Self::Absolute];

    /// Decide whether a candidate neighbour joins the region
    ///
    /// `current` is the value of the cell being expanded and `start` the value
    /// of the search's start cell.
    pub fn admits<T: Float>(
        self,
        band: &ToleranceBand<T>,
        current: T,
        start: T,
        candidate: T,
    ) -> bool {
        match self {
            Self::Relative => band.contains_around(current, candidate),
            Self::Anchored => band.contains_around(start, candidate),
            Self::Absolute => band.contains(candidate),
        }
    }

    /// Lower-case name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Anchored => "anchored",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for AdmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdmissionPolicy {
    type Err = crate::io::error::SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                invalid_argument("policy", &s, &"expected one of relative, anchored, absolute")
            })
    }
}
