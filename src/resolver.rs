//! Route resolution: URL path segments → registry entities.
//!
//! The resolver is the request-time half of the pipeline. Given a path
//! under `/career-hub/`, it looks each dynamic segment up in its table and
//! returns a [`ResolvedPage`] borrowing the matched entities, or
//! [`ResolveError::NotFound`] — the only error this layer can produce.
//! There is no validation beyond existence.
//!
//! ## Combination pages
//!
//! A City × Role path resolves whenever *both* slugs exist, even when the
//! city is outside the high-value set that bounds sitemap enumeration.
//! That asymmetry is deliberate: guessable URLs render instead of hard-404ing,
//! while the sitemap (and the page's own `noindex` flag) keeps crawlers on
//! the bounded set. See `sitemap::enumerate` for the other half.

use crate::registry::Registry;
use crate::registry::entities::{
    CareerEvaluation, City, CoverLetterTemplate, Guide, PersonaHub, ResumeExample, ResumeTemplate,
    Role, Season, SeasonalEvent, Tool, WageReport,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ResolveError {
    #[error("not found: {0}")]
    NotFound(String),
}

/// A resolved page: the entity (or entity tuple) behind one URL.
///
/// Variants correspond to page families, not entity types — the same
/// `Role` backs three different variants depending on which path
/// referenced it.
#[derive(Debug)]
pub enum ResolvedPage<'a> {
    /// `/career-hub/`
    Home,
    /// `/career-hub/roles/{slug}`
    Role(&'a Role),
    /// `/career-hub/salary/{slug}`
    Salary(&'a Role),
    /// `/career-hub/is-it-a-good-job/{slug}` — only roles with an evaluation.
    Evaluation {
        role: &'a Role,
        evaluation: &'a CareerEvaluation,
    },
    /// `/career-hub/cities/{slug}`
    City(&'a City),
    /// `/career-hub/cities/{city}/{role}` — the combination page.
    CityRole { city: &'a City, role: &'a Role },
    /// `/career-hub/states/{code}`
    State {
        code: String,
        cities: Vec<&'a City>,
    },
    /// `/career-hub/for/{slug}`
    Persona(&'a PersonaHub),
    /// `/career-hub/guides/{slug}`
    Guide(&'a Guide),
    /// `/career-hub/seasonal-hiring/{slug}`
    Season(&'a Season),
    /// `/career-hub/seasonal-hiring/events/{slug}`
    Event(&'a SeasonalEvent),
    /// `/career-hub/wage-report/{year}`
    WageReport(&'a WageReport),
    /// `/career-hub/templates/{slug}`
    Template(&'a ResumeTemplate),
    /// `/career-hub/job-application/resume-examples/{slug}`
    ResumeExample(&'a ResumeExample),
    /// `/career-hub/job-application/cover-letters/{slug}`
    CoverLetter(&'a CoverLetterTemplate),
    /// `/career-hub/tools/{slug}`
    Tool(&'a Tool),
}

impl<'a> ResolvedPage<'a> {
    /// Whether this page belongs to the crawlable, sitemap-listed set.
    ///
    /// Only City × Role pages can be unindexed; every other resolved page
    /// is canonical by construction. Uses the registry's shared high-value
    /// predicate so this flag and the sitemap can never disagree.
    pub fn indexed(&self, registry: &Registry) -> bool {
        match self {
            ResolvedPage::CityRole { city, .. } => registry.is_high_value_city(city),
            _ => true,
        }
    }
}

/// Resolve a full URL path against the registry.
///
/// Accepts paths with or without leading/trailing slashes. The
/// `/career-hub` prefix is required; anything outside it is NotFound.
pub fn resolve_path<'a>(
    registry: &'a Registry,
    path: &str,
) -> Result<ResolvedPage<'a>, ResolveError> {
    let not_found = || ResolveError::NotFound(path.to_string());

    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    let rest = match segments.split_first() {
        Some((&"career-hub", rest)) => rest,
        _ => return Err(not_found()),
    };

    match rest {
        [] => Ok(ResolvedPage::Home),
        ["roles", slug] => registry.role(slug).map(ResolvedPage::Role).ok_or_else(not_found),
        ["salary", slug] => registry
            .role(slug)
            .map(ResolvedPage::Salary)
            .ok_or_else(not_found),
        ["is-it-a-good-job", slug] => {
            let role = registry.role(slug).ok_or_else(not_found)?;
            let evaluation = registry.evaluation_for_role(slug).ok_or_else(not_found)?;
            Ok(ResolvedPage::Evaluation { role, evaluation })
        }
        ["cities", slug] => registry.city(slug).map(ResolvedPage::City).ok_or_else(not_found),
        ["cities", city_slug, role_slug] => {
            // Each segment resolves independently; legality (high-value)
            // only affects indexing, not resolution.
            let city = registry.city(city_slug).ok_or_else(not_found)?;
            let role = registry.role(role_slug).ok_or_else(not_found)?;
            Ok(ResolvedPage::CityRole { city, role })
        }
        ["states", code] => {
            let code = code.to_uppercase();
            let cities = registry.cities_in_state(&code);
            if cities.is_empty() {
                return Err(not_found());
            }
            Ok(ResolvedPage::State { code, cities })
        }
        ["for", slug] => registry
            .persona_hub(slug)
            .map(ResolvedPage::Persona)
            .ok_or_else(not_found),
        ["guides", slug] => registry
            .guide(slug)
            .map(ResolvedPage::Guide)
            .ok_or_else(not_found),
        ["seasonal-hiring", "events", slug] => registry
            .seasonal_event(slug)
            .map(ResolvedPage::Event)
            .ok_or_else(not_found),
        ["seasonal-hiring", slug] => registry
            .season(slug)
            .map(ResolvedPage::Season)
            .ok_or_else(not_found),
        ["wage-report", year] => {
            let year: u16 = year.parse().map_err(|_| not_found())?;
            registry
                .wage_report_for_year(year)
                .map(ResolvedPage::WageReport)
                .ok_or_else(not_found)
        }
        ["templates", slug] => registry
            .resume_template(slug)
            .map(ResolvedPage::Template)
            .ok_or_else(not_found),
        ["job-application", "resume-examples", slug] => registry
            .resume_example(slug)
            .map(ResolvedPage::ResumeExample)
            .ok_or_else(not_found),
        ["job-application", "cover-letters", slug] => registry
            .cover_letter_template(slug)
            .map(ResolvedPage::CoverLetter)
            .ok_or_else(not_found),
        ["tools", slug] => registry.tool(slug).map(ResolvedPage::Tool).ok_or_else(not_found),
        _ => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> Registry {
        Registry::load()
    }

    #[test]
    fn resolves_role_page() {
        let reg = reg();
        match resolve_path(&reg, "/career-hub/roles/bartender").unwrap() {
            ResolvedPage::Role(role) => assert_eq!(role.title, "Bartender"),
            other => panic!("expected role page, got {other:?}"),
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let reg = reg();
        assert!(matches!(
            resolve_path(&reg, "/career-hub/roles/astronaut"),
            Err(ResolveError::NotFound(_))
        ));
    }

    #[test]
    fn paths_outside_the_hub_are_not_found() {
        let reg = reg();
        assert!(resolve_path(&reg, "/blog/roles/bartender").is_err());
        assert!(resolve_path(&reg, "/").is_err());
    }

    #[test]
    fn trailing_and_leading_slashes_ignored() {
        let reg = reg();
        assert!(resolve_path(&reg, "career-hub/roles/bartender/").is_ok());
        assert!(matches!(
            resolve_path(&reg, "/career-hub/").unwrap(),
            ResolvedPage::Home
        ));
    }

    #[test]
    fn city_role_resolves_outside_high_value_set() {
        let reg = reg();
        let page = resolve_path(&reg, "/career-hub/cities/austin/warehouse-clerk").unwrap();
        match &page {
            ResolvedPage::CityRole { city, role } => {
                assert_eq!(city.slug, "austin");
                assert_eq!(role.slug, "warehouse-clerk");
            }
            other => panic!("expected city-role page, got {other:?}"),
        }
        // Renderable, but not part of the indexed set.
        assert!(!page.indexed(&reg));
    }

    #[test]
    fn high_value_city_role_is_indexed() {
        let reg = reg();
        let page = resolve_path(&reg, "/career-hub/cities/dallas/bartender").unwrap();
        assert!(page.indexed(&reg));
    }

    #[test]
    fn city_role_with_missing_side_is_not_found() {
        let reg = reg();
        assert!(resolve_path(&reg, "/career-hub/cities/gotham/bartender").is_err());
        assert!(resolve_path(&reg, "/career-hub/cities/austin/astronaut").is_err());
    }

    #[test]
    fn evaluation_requires_an_evaluated_role() {
        let reg = reg();
        assert!(resolve_path(&reg, "/career-hub/is-it-a-good-job/forklift-operator").is_ok());
        // Real role, but no evaluation row.
        assert!(resolve_path(&reg, "/career-hub/is-it-a-good-job/receptionist").is_err());
    }

    #[test]
    fn wage_report_year_gate() {
        let reg = reg();
        assert!(resolve_path(&reg, "/career-hub/wage-report/2025").is_err());
        assert!(resolve_path(&reg, "/career-hub/wage-report/not-a-year").is_err());
        match resolve_path(&reg, "/career-hub/wage-report/2026").unwrap() {
            ResolvedPage::WageReport(report) => {
                assert_eq!(report.summary.total_occupations, report.occupations.len());
            }
            other => panic!("expected wage report, got {other:?}"),
        }
    }

    #[test]
    fn state_codes_resolve_case_insensitively() {
        let reg = reg();
        match resolve_path(&reg, "/career-hub/states/tx").unwrap() {
            ResolvedPage::State { code, cities } => {
                assert_eq!(code, "TX");
                assert!(cities.iter().any(|c| c.slug == "austin"));
            }
            other => panic!("expected state page, got {other:?}"),
        }
        assert!(resolve_path(&reg, "/career-hub/states/zz").is_err());
    }

    #[test]
    fn seasonal_event_path_wins_over_season() {
        let reg = reg();
        assert!(matches!(
            resolve_path(&reg, "/career-hub/seasonal-hiring/events/austin-music-week").unwrap(),
            ResolvedPage::Event(_)
        ));
        assert!(matches!(
            resolve_path(&reg, "/career-hub/seasonal-hiring/summer").unwrap(),
            ResolvedPage::Season(_)
        ));
    }

    #[test]
    fn job_application_routes_resolve() {
        let reg = reg();
        assert!(matches!(
            resolve_path(
                &reg,
                "/career-hub/job-application/resume-examples/bartender-experienced"
            )
            .unwrap(),
            ResolvedPage::ResumeExample(_)
        ));
        assert!(matches!(
            resolve_path(&reg, "/career-hub/job-application/cover-letters/friendly-direct")
                .unwrap(),
            ResolvedPage::CoverLetter(_)
        ));
        assert!(matches!(
            resolve_path(&reg, "/career-hub/templates/skills-first").unwrap(),
            ResolvedPage::Template(_)
        ));
    }
}
