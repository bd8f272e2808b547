//! Small shared types used across the registry, composer, and sitemap.
//!
//! Everything here is serialized into the emitted route manifest and must
//! stay stable across the load → resolve → compose → emit pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search-volume tier for a role or city.
///
/// Cities in the `High` tier are part of the high-value set that bounds
/// City × Role page expansion (see `Registry::is_high_value_city`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchVolume {
    High,
    Medium,
    Low,
}

/// Hiring-demand tier for seasons and seasonal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    Extreme,
    High,
    Moderate,
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemandLevel::Extreme => write!(f, "Extreme"),
            DemandLevel::High => write!(f, "High"),
            DemandLevel::Moderate => write!(f, "Moderate"),
        }
    }
}

/// Career-evaluation verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Excellent,
    Good,
    Depends,
    Challenging,
}

impl Verdict {
    /// Short display label used in titles and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Depends => "It Depends",
            Verdict::Challenging => "Challenging",
        }
    }
}

/// An hourly wage band in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageRange {
    pub min: f64,
    pub max: f64,
}

impl WageRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the band, used for derived wage insights.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl fmt::Display for WageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.0}–${:.0}/hr", self.min, self.max)
    }
}

/// Presentation-neutral icon identity carried by data records.
///
/// Entities never reference a rendering primitive directly; the concrete
/// glyph is resolved at the presentation boundary in `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Sun,
    Snowflake,
    Leaf,
    Calendar,
    Calculator,
    Clock,
    Document,
    Truck,
    Storefront,
    Building,
    GraduationCap,
    Briefcase,
    MapPin,
    ChartBar,
}

/// A question/answer pair rendered as an FAQ section and FAQPage JSON-LD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}
