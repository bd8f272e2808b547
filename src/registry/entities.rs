//! Entity record types held by the registry.
//!
//! Every record is an immutable, slug-keyed row in one of the in-repo data
//! tables. Slugs are lowercase-hyphen URL segments and are the only lookup
//! key — there are no surrogate IDs. Foreign-key fields store the target
//! slug; resolution happens through the [`Registry`](super::Registry) and
//! dangling references degrade to omission, never a panic.

use crate::types::{DemandLevel, Faq, IconKind, SearchVolume, Verdict, WageRange};
use serde::{Deserialize, Serialize};

/// A job role — the hub's central entity, cross-linked from nearly
/// everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub slug: String,
    pub title: String,
    /// FK → `Industry::id`.
    pub industry: String,
    pub avg_hourly_rate: WageRange,
    pub entry_level: bool,
    pub search_volume: SearchVolume,
    pub description: String,
    pub short_description: String,
}

/// An industry vertical. Owns zero-or-more roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub id: String,
    pub name: String,
    /// CSS accent color for industry badges.
    pub color: String,
}

/// Optional per-city enrichment facts. Presence of this block flags the
/// city as high-value independently of its search-volume tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEnrichment {
    pub top_employers: Vec<String>,
    pub transit_note: String,
}

/// A metro-area city page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub slug: String,
    pub city: String,
    pub state_code: String,
    pub avg_hourly_wage: WageRange,
    pub search_volume: SearchVolume,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<CityEnrichment>,
}

/// A long-form guide article, written in markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guide {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Markdown body, converted to HTML at render time.
    pub body: String,
    pub icon: IconKind,
}

/// An audience landing hub ("for students", "for parents", …).
///
/// Most fields are FK lists into other tables; any slug that fails to
/// resolve is silently dropped from the composed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaHub {
    pub slug: String,
    pub title: String,
    pub headline: String,
    pub pain_points: Vec<String>,
    pub solutions: Vec<String>,
    pub quick_tips: Vec<String>,
    /// FK → `Tool::slug`.
    pub recommended_tools: Vec<String>,
    /// FK → `Guide::slug`.
    pub related_guides: Vec<String>,
    /// FK → `ResumeTemplate::slug`.
    pub resume_templates: Vec<String>,
    /// FK → `CoverLetterTemplate::slug`.
    pub cover_letter_templates: Vec<String>,
    /// FK → `Role::slug`.
    pub suggested_roles: Vec<String>,
    pub faqs: Vec<Faq>,
}

/// A recurring hiring season (summer, holiday, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub slug: String,
    pub name: String,
    /// FK → `Industry::id`.
    pub industries: Vec<String>,
    /// Calendar months covered, 1–12.
    pub months: Vec<u8>,
    pub demand_level: DemandLevel,
    /// Typical pay bump over baseline, e.g. "15–25%".
    pub avg_pay_increase: String,
    pub hiring_timeline: String,
    pub tips: Vec<String>,
    pub icon: IconKind,
}

/// A dated one-off hiring event (festival, marathon, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalEvent {
    pub slug: String,
    pub name: String,
    /// ISO date of the event, e.g. "2026-03-13".
    pub date: String,
    /// FK → `Industry::id`.
    pub industries: Vec<String>,
    pub demand_level: DemandLevel,
    /// Fixed set of associated cities (FK → `City::slug`), if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cities: Vec<String>,
    pub tips: Vec<String>,
}

/// Scored dimensions of a career evaluation, each 0–10.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvaluationScores {
    pub pay: u8,
    pub flexibility: u8,
    pub growth: u8,
    pub stability: u8,
    pub entry_ease: u8,
    pub work_life_balance: u8,
    pub physical_demand: u8,
    pub social_interaction: u8,
}

impl EvaluationScores {
    /// Mean of the eight dimensions, one decimal place.
    pub fn mean(&self) -> f64 {
        let sum = self.pay as u32
            + self.flexibility as u32
            + self.growth as u32
            + self.stability as u32
            + self.entry_ease as u32
            + self.work_life_balance as u32
            + self.physical_demand as u32
            + self.social_interaction as u32;
        (sum as f64 / 8.0 * 10.0).round() / 10.0
    }
}

/// An "is it a good job?" evaluation for one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEvaluation {
    /// FK → `Role::slug`; unique per evaluation.
    pub role_slug: String,
    pub verdict: Verdict,
    pub scores: EvaluationScores,
    pub overall_score: f64,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub best_for: Vec<String>,
    pub worst_for: Vec<String>,
    /// Self-referential FK → `Role::slug`. Never contains `role_slug`
    /// in composed output.
    pub alternative_roles: Vec<String>,
}

/// A resume template presentation config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeTemplate {
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Role names this template is pitched at, in display form
    /// ("Warehouse Clerk"). Matched to roles by containment.
    pub target_roles: Vec<String>,
    pub layout: String,
}

/// A cover letter template presentation config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterTemplate {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub target_roles: Vec<String>,
    pub tone: String,
}

/// A filled-in resume example for one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeExample {
    pub slug: String,
    pub role_name: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

/// An interactive widget (calculator, checklist, …) rendered opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub tool_kind: ToolKind,
    pub icon: IconKind,
}

/// What kind of widget a tool is. Drives the JSON-LD application category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Calculator,
    Checklist,
    Quiz,
}

/// One occupation row in the wage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupationWage {
    /// FK → `Role::slug`.
    pub occupation_slug: String,
    /// Hourly wage at the 10th/25th/50th/75th/90th percentiles.
    pub percentiles: [f64; 5],
    /// Year-over-year median change, fractional (0.032 = +3.2%).
    pub yoy_change: f64,
}

/// One industry row in the wage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryWage {
    /// FK → `Industry::id`.
    pub industry_slug: String,
    pub wage_growth: f64,
}

/// One region row in the wage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionWage {
    pub region: String,
    pub median_hourly: f64,
}

/// Aggregates over the whole report, stored rather than derived so the
/// dataset is self-describing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageReportSummary {
    pub total_occupations: usize,
    pub median_hourly: f64,
    pub median_yoy_change: f64,
}

/// The annual wage report dataset. Exactly one year is supported; any
/// other year resolves to NotFound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageReport {
    pub year: u16,
    pub occupations: Vec<OccupationWage>,
    pub industries: Vec<IndustryWage>,
    pub regions: Vec<RegionWage>,
    pub summary: WageReportSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_scores_mean_rounds_to_one_decimal() {
        let s = EvaluationScores {
            pay: 7,
            flexibility: 8,
            growth: 5,
            stability: 6,
            entry_ease: 9,
            work_life_balance: 7,
            physical_demand: 4,
            social_interaction: 6,
        };
        // 52 / 8 = 6.5
        assert_eq!(s.mean(), 6.5);
    }
}
