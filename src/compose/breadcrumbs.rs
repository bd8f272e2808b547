//! Breadcrumb trail composition.
//!
//! Trails run root-to-leaf, mirroring the URL hierarchy. The first crumb is
//! always the hub; the last is the current page and never carries a link.
//! Middle crumbs are linked only when a real page exists at that URL
//! prefix — so a City × Role trail links the city page, but a guide trail's
//! "Guides" crumb is a plain label. Every linked href is a strict prefix of
//! the current page path; the BreadcrumbList JSON-LD and the visible trail
//! are built from the same data.

use crate::resolver::ResolvedPage;
use crate::urls;
use serde::Serialize;

/// One crumb: a label, optionally linked. The current page has no href.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Breadcrumb {
    fn linked(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href),
        }
    }

    fn label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: None,
        }
    }
}

/// Compose the root-to-leaf trail for a resolved page.
pub fn breadcrumbs(page: &ResolvedPage) -> Vec<Breadcrumb> {
    let hub = Breadcrumb::linked("Career Hub", urls::HUB.to_string());
    match page {
        ResolvedPage::Home => vec![Breadcrumb::label("Career Hub")],
        ResolvedPage::Role(role) => vec![hub, Breadcrumb::label(&role.title)],
        ResolvedPage::Salary(role) => vec![
            hub,
            Breadcrumb::label("Salary Data"),
            Breadcrumb::label(&role.title),
        ],
        ResolvedPage::Evaluation { role, .. } => vec![
            hub,
            Breadcrumb::label("Is It a Good Job?"),
            Breadcrumb::label(&role.title),
        ],
        ResolvedPage::City(city) => vec![
            hub,
            Breadcrumb::label("Cities"),
            Breadcrumb::label(&city.city),
        ],
        ResolvedPage::CityRole { city, role } => vec![
            hub,
            Breadcrumb::linked(&city.city, urls::city(&city.slug)),
            Breadcrumb::label(&role.title),
        ],
        ResolvedPage::State { code, .. } => vec![
            hub,
            Breadcrumb::label("States"),
            Breadcrumb::label(code),
        ],
        ResolvedPage::Persona(persona) => vec![
            hub,
            Breadcrumb::label("For You"),
            Breadcrumb::label(&persona.title),
        ],
        ResolvedPage::Guide(guide) => vec![
            hub,
            Breadcrumb::label("Guides"),
            Breadcrumb::label(&guide.title),
        ],
        ResolvedPage::Season(season) => vec![
            hub,
            Breadcrumb::label("Seasonal Hiring"),
            Breadcrumb::label(&season.name),
        ],
        ResolvedPage::Event(event) => vec![
            hub,
            Breadcrumb::label("Seasonal Hiring"),
            Breadcrumb::label("Events"),
            Breadcrumb::label(&event.name),
        ],
        ResolvedPage::WageReport(report) => vec![
            hub,
            Breadcrumb::label("Wage Report"),
            Breadcrumb::label(&report.year.to_string()),
        ],
        ResolvedPage::Template(template) => vec![
            hub,
            Breadcrumb::label("Resume Templates"),
            Breadcrumb::label(&template.name),
        ],
        ResolvedPage::ResumeExample(example) => vec![
            hub,
            Breadcrumb::label("Job Application"),
            Breadcrumb::label("Resume Examples"),
            Breadcrumb::label(&example.role_name),
        ],
        ResolvedPage::CoverLetter(template) => vec![
            hub,
            Breadcrumb::label("Job Application"),
            Breadcrumb::label("Cover Letters"),
            Breadcrumb::label(&template.name),
        ],
        ResolvedPage::Tool(tool) => vec![
            hub,
            Breadcrumb::label("Tools"),
            Breadcrumb::label(&tool.name),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::resolver::resolve_path;

    /// Every trail: starts at the hub, ends unlinked, and its linked hrefs
    /// form a strict prefix chain of the page's own path.
    #[test]
    fn trails_are_root_to_leaf_prefix_chains() {
        let reg = Registry::load();
        let paths = [
            "/career-hub/",
            "/career-hub/roles/bartender/",
            "/career-hub/salary/bartender/",
            "/career-hub/is-it-a-good-job/forklift-operator/",
            "/career-hub/cities/dallas/",
            "/career-hub/cities/dallas/bartender/",
            "/career-hub/states/tx/",
            "/career-hub/for/students/",
            "/career-hub/guides/resume-basics/",
            "/career-hub/seasonal-hiring/summer/",
            "/career-hub/seasonal-hiring/events/austin-music-week/",
            "/career-hub/wage-report/2026/",
            "/career-hub/templates/skills-first/",
            "/career-hub/job-application/resume-examples/bartender-experienced/",
            "/career-hub/job-application/cover-letters/friendly-direct/",
            "/career-hub/tools/shift-pay-calculator/",
        ];

        for path in paths {
            let page = resolve_path(&reg, path).unwrap();
            let trail = breadcrumbs(&page);

            assert!(!trail.is_empty(), "{path}");
            assert_eq!(trail[0].label, "Career Hub", "{path}");
            assert!(trail.last().unwrap().href.is_none(), "{path}");

            let mut prev_len = 0;
            for crumb in &trail {
                if let Some(href) = &crumb.href {
                    assert!(path.starts_with(href.as_str()), "{href} not a prefix of {path}");
                    assert!(href.len() > prev_len, "hrefs must strictly grow: {path}");
                    assert!(href.len() < path.len(), "linked crumb equals page: {path}");
                    prev_len = href.len();
                }
            }
        }
    }

    #[test]
    fn city_role_trail_links_the_city() {
        let reg = Registry::load();
        let page = resolve_path(&reg, "/career-hub/cities/dallas/bartender").unwrap();
        let trail = breadcrumbs(&page);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].label, "Dallas");
        assert_eq!(trail[1].href.as_deref(), Some("/career-hub/cities/dallas/"));
        assert_eq!(trail[2].label, "Bartender");
    }

    #[test]
    fn home_is_a_single_unlinked_crumb() {
        let reg = Registry::load();
        let page = resolve_path(&reg, "/career-hub/").unwrap();
        let trail = breadcrumbs(&page);
        assert_eq!(trail.len(), 1);
        assert!(trail[0].href.is_none());
    }
}
