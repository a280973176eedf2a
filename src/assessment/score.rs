//! Category scores (0-100) and the rubric's maturity bands.

use std::fmt;

/// A compliance rating between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Creates a score, clamping anything above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a score, returning `None` when out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    pub fn raise(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    pub fn lower(self, step: u8) -> Self {
        Self(self.0.saturating_sub(step))
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Unweighted arithmetic mean. `None` for an empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

/// Qualitative label for a score range, as used by the rating guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaturityBand {
    /// 0-25: critical gaps, no documented processes.
    Minimal,
    /// 26-50: some processes, significant improvements needed.
    Partial,
    /// 51-75: most requirements met, minor gaps remain.
    Good,
    /// 76-100: comprehensive, documented, regularly reviewed.
    Excellent,
}

impl MaturityBand {
    pub fn from_score(score: f64) -> Self {
        if score <= 25.0 {
            MaturityBand::Minimal
        } else if score <= 50.0 {
            MaturityBand::Partial
        } else if score <= 75.0 {
            MaturityBand::Good
        } else {
            MaturityBand::Excellent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaturityBand::Minimal => "Minimal",
            MaturityBand::Partial => "Partial",
            MaturityBand::Good => "Good",
            MaturityBand::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for MaturityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_over_100() {
        assert_eq!(Score::try_new(100), Some(Score::MAX));
        assert_eq!(Score::try_new(0), Some(Score::MIN));
        assert_eq!(Score::try_new(101), None);
    }

    #[test]
    fn raise_and_lower_stay_in_range() {
        assert_eq!(Score::new(98).raise(5).value(), 100);
        assert_eq!(Score::new(3).lower(5).value(), 0);
        assert_eq!(Score::new(50).raise(5).value(), 55);
    }

    #[test]
    fn default_is_midpoint() {
        assert_eq!(Score::default().value(), 50);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
    }

    #[test]
    fn mean_is_unweighted() {
        assert_eq!(mean([80.0, 60.0, 70.0, 90.0]), Some(75.0));
        assert_eq!(mean([1.0, 2.0]), Some(1.5));
    }

    #[test]
    fn bands_follow_rating_guide() {
        assert_eq!(MaturityBand::from_score(0.0), MaturityBand::Minimal);
        assert_eq!(MaturityBand::from_score(25.0), MaturityBand::Minimal);
        assert_eq!(MaturityBand::from_score(25.5), MaturityBand::Partial);
        assert_eq!(MaturityBand::from_score(50.0), MaturityBand::Partial);
        assert_eq!(MaturityBand::from_score(75.0), MaturityBand::Good);
        assert_eq!(MaturityBand::from_score(76.0), MaturityBand::Excellent);
        assert_eq!(MaturityBand::from_score(100.0), MaturityBand::Excellent);
    }
}
