//! Page metadata composition.
//!
//! Every metadata field is a deterministic string template over entity
//! fields — no clock, no randomness, no I/O — so composing the same page
//! twice yields byte-identical output. Titles follow the site-wide
//! `{subject} | Career Hub` pattern; descriptions reuse entity copy.

use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::resolver::ResolvedPage;
use crate::urls;
use serde::Serialize;

const SITE_NAME: &str = "Career Hub";

/// Open Graph block emitted as `og:*` meta tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub og_type: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
}

/// Twitter card block emitted as `twitter:*` meta tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

/// The composed metadata block for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Absolute URL on the canonical host.
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter_card: TwitterCard,
    /// False only for City × Role pages outside the high-value set;
    /// rendered as `<meta name="robots" content="noindex">`.
    pub indexed: bool,
}

/// Compose the metadata block for a resolved page.
pub fn page_meta(registry: &Registry, config: &SiteConfig, page: &ResolvedPage) -> PageMeta {
    let (title, description, keywords, path) = match page {
        ResolvedPage::Home => (
            format!("{SITE_NAME}: Hourly Jobs, Pay Data & Guides"),
            "Explore hourly roles, city pay data, hiring seasons, and practical guides for flexible work.".to_string(),
            vec!["hourly jobs".into(), "flexible work".into(), "career hub".into()],
            urls::HUB.to_string(),
        ),
        ResolvedPage::Role(role) => (
            format!("{} Jobs: Pay, Duties & How to Start | {SITE_NAME}", role.title),
            role.short_description.clone(),
            vec![
                format!("{} jobs", role.title.to_lowercase()),
                format!("{} pay", role.title.to_lowercase()),
                "hourly work".into(),
            ],
            urls::role(&role.slug),
        ),
        ResolvedPage::Salary(role) => (
            format!("{} Salary by City | {SITE_NAME}", role.title),
            format!(
                "What {} work pays across major cities: typical range {}.",
                role.title.to_lowercase(),
                role.avg_hourly_rate
            ),
            vec![
                format!("{} salary", role.title.to_lowercase()),
                "hourly pay by city".into(),
            ],
            urls::salary(&role.slug),
        ),
        ResolvedPage::Evaluation { role, evaluation } => (
            format!("Is {} a Good Job? Our Verdict: {} | {SITE_NAME}", role.title, evaluation.verdict.label()),
            format!(
                "Honest evaluation of {} work: pay, flexibility, growth, and who it suits. Overall score {:.1}/10.",
                role.title.to_lowercase(),
                evaluation.overall_score
            ),
            vec![format!("is {} a good job", role.title.to_lowercase())],
            urls::evaluation(&role.slug),
        ),
        ResolvedPage::City(city) => (
            format!("Hourly Jobs in {}, {} | {SITE_NAME}", city.city, city.state_code),
            format!(
                "Hourly work in {}: typical wages {} across roles, plus local hiring picture.",
                city.city, city.avg_hourly_wage
            ),
            vec![
                format!("jobs in {}", city.city.to_lowercase()),
                "hourly jobs".into(),
            ],
            urls::city(&city.slug),
        ),
        ResolvedPage::CityRole { city, role } => (
            format!("{} Jobs in {}, {} | {SITE_NAME}", role.title, city.city, city.state_code),
            format!(
                "{} work in {}: role pays {} nationally, local hourly band {}.",
                role.title, city.city, role.avg_hourly_rate, city.avg_hourly_wage
            ),
            vec![format!(
                "{} jobs {}",
                role.title.to_lowercase(),
                city.city.to_lowercase()
            )],
            urls::city_role(&city.slug, &role.slug),
        ),
        ResolvedPage::State { code, cities } => (
            format!("Hourly Jobs in {code} by City | {SITE_NAME}"),
            format!(
                "Hourly work across {} {} metro area{}.",
                cities.len(),
                code,
                if cities.len() == 1 { "" } else { "s" }
            ),
            vec![format!("{} hourly jobs", code.to_lowercase())],
            urls::state(code),
        ),
        ResolvedPage::Persona(hub) => (
            format!("{} | {SITE_NAME}", hub.title),
            hub.headline.clone(),
            vec!["flexible shifts".into(), hub.slug.replace('-', " ")],
            urls::persona(&hub.slug),
        ),
        ResolvedPage::Guide(guide) => (
            format!("{} | {SITE_NAME}", guide.title),
            guide.description.clone(),
            vec![guide.category.replace('-', " "), "guide".into()],
            urls::guide(&guide.slug),
        ),
        ResolvedPage::Season(season) => (
            format!("{}: When to Apply & What It Pays | {SITE_NAME}", season.name),
            format!(
                "{} demand, pay bumps of {}, and how to time your applications.",
                season.demand_level, season.avg_pay_increase
            ),
            vec!["seasonal hiring".into(), season.slug.replace('-', " ")],
            urls::season(&season.slug),
        ),
        ResolvedPage::Event(event) => (
            format!("Work {} ({}) | {SITE_NAME}", event.name, event.date),
            format!(
                "{} hiring demand for {} — what's posted and how to claim shifts.",
                event.demand_level, event.name
            ),
            vec!["event staffing".into()],
            urls::seasonal_event(&event.slug),
        ),
        ResolvedPage::WageReport(report) => (
            format!("{} Hourly Wage Report | {SITE_NAME}", report.year),
            format!(
                "Wage percentiles and year-over-year change for {} hourly occupations.",
                report.summary.total_occupations
            ),
            vec!["wage report".into(), "hourly wages".into()],
            urls::wage_report(report.year),
        ),
        ResolvedPage::Template(template) => (
            format!("{} Resume Template | {SITE_NAME}", template.name),
            template.description.clone(),
            vec!["resume template".into()],
            urls::template(&template.slug),
        ),
        ResolvedPage::ResumeExample(example) => (
            format!("{} Resume Example | {SITE_NAME}", example.role_name),
            example.summary.clone(),
            vec![format!("{} resume", example.role_name.to_lowercase())],
            urls::resume_example(&example.slug),
        ),
        ResolvedPage::CoverLetter(template) => (
            format!("{} Cover Letter Template | {SITE_NAME}", template.name),
            template.description.clone(),
            vec!["cover letter template".into()],
            urls::cover_letter(&template.slug),
        ),
        ResolvedPage::Tool(tool) => (
            format!("{} | {SITE_NAME}", tool.name),
            tool.description.clone(),
            vec![tool.slug.replace('-', " ")],
            urls::tool(&tool.slug),
        ),
    };

    let canonical_url = urls::absolute(&config.base_url, &path);
    PageMeta {
        open_graph: OpenGraph {
            og_type: "website".to_string(),
            title: title.clone(),
            description: description.clone(),
            url: canonical_url.clone(),
            site_name: SITE_NAME.to_string(),
        },
        twitter_card: TwitterCard {
            card: "summary".to_string(),
            title: title.clone(),
            description: description.clone(),
        },
        indexed: page.indexed(registry),
        title,
        description,
        keywords,
        canonical_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_path;

    fn fixtures() -> (Registry, SiteConfig) {
        (Registry::load(), SiteConfig::default())
    }

    #[test]
    fn role_meta_contains_title_and_canonical() {
        let (reg, config) = fixtures();
        let page = resolve_path(&reg, "/career-hub/roles/bartender").unwrap();
        let meta = page_meta(&reg, &config, &page);
        assert!(meta.title.contains("Bartender"));
        assert_eq!(
            meta.canonical_url,
            format!("{}/career-hub/roles/bartender/", config.base_url)
        );
        assert!(meta.indexed);
    }

    #[test]
    fn metadata_is_idempotent() {
        let (reg, config) = fixtures();
        for path in [
            "/career-hub/",
            "/career-hub/roles/server",
            "/career-hub/cities/dallas/bartender",
            "/career-hub/wage-report/2026",
            "/career-hub/for/students",
        ] {
            let page = resolve_path(&reg, path).unwrap();
            let a = page_meta(&reg, &config, &page);
            let b = page_meta(&reg, &config, &page);
            assert_eq!(a, b, "{path}");
        }
    }

    #[test]
    fn unindexed_pair_carries_noindex_flag() {
        let (reg, config) = fixtures();
        let page = resolve_path(&reg, "/career-hub/cities/austin/warehouse-clerk").unwrap();
        let meta = page_meta(&reg, &config, &page);
        assert!(!meta.indexed);
        // Still a full metadata block — the page renders normally.
        assert!(meta.title.contains("Austin"));
    }

    #[test]
    fn open_graph_mirrors_title_and_description() {
        let (reg, config) = fixtures();
        let page = resolve_path(&reg, "/career-hub/guides/resume-basics").unwrap();
        let meta = page_meta(&reg, &config, &page);
        assert_eq!(meta.open_graph.title, meta.title);
        assert_eq!(meta.twitter_card.description, meta.description);
        assert_eq!(meta.open_graph.url, meta.canonical_url);
    }

    #[test]
    fn evaluation_title_names_the_verdict() {
        let (reg, config) = fixtures();
        let page = resolve_path(&reg, "/career-hub/is-it-a-good-job/bartender").unwrap();
        let meta = page_meta(&reg, &config, &page);
        assert!(meta.title.contains("Excellent"), "{}", meta.title);
    }
}
