//! The entity registry: load-once, immutable, indexed by slug.
//!
//! Every data table from [`data`] is loaded exactly once into a [`Registry`]
//! and never mutated. Each table gets a slug→index hash map built at load
//! time, so lookups are O(1) instead of scanning vectors on every call.
//! All downstream stages (resolver, composer, sitemap, HTML emission) read
//! from one `Registry` value; because the data is immutable, any number of
//! page renders can share it without coordination.
//!
//! ## Precomputed relations
//!
//! Resume templates and examples are pitched at roles by display name
//! ("Warehouse Clerk"), not slug. Rather than re-deriving that match at
//! render time, the registry builds a role→template and role→example
//! adjacency once at load, from the single [`template_matches_role`] rule.
//!
//! ## The high-value predicate
//!
//! [`Registry::is_high_value_city`] is the one shared definition of which
//! cities participate in City × Role page expansion. Both the sitemap
//! generator and the composer's `indexed` flag call it — the two must never
//! diverge, or pages become orphaned from the sitemap (or the sitemap
//! advertises pages that are never emitted).

pub mod entities;

mod data;

use entities::*;
use std::collections::HashMap;

pub use data::WAGE_REPORT_YEAR;

/// All entity tables plus their slug indexes and precomputed relations.
///
/// Construct with [`Registry::load`]; there are no write operations.
#[derive(Debug)]
pub struct Registry {
    roles: Vec<Role>,
    industries: Vec<Industry>,
    cities: Vec<City>,
    guides: Vec<Guide>,
    persona_hubs: Vec<PersonaHub>,
    seasons: Vec<Season>,
    seasonal_events: Vec<SeasonalEvent>,
    career_evaluations: Vec<CareerEvaluation>,
    resume_templates: Vec<ResumeTemplate>,
    cover_letter_templates: Vec<CoverLetterTemplate>,
    resume_examples: Vec<ResumeExample>,
    tools: Vec<Tool>,
    wage_report: WageReport,

    role_index: HashMap<String, usize>,
    industry_index: HashMap<String, usize>,
    city_index: HashMap<String, usize>,
    guide_index: HashMap<String, usize>,
    persona_index: HashMap<String, usize>,
    season_index: HashMap<String, usize>,
    event_index: HashMap<String, usize>,
    evaluation_index: HashMap<String, usize>,
    resume_template_index: HashMap<String, usize>,
    cover_letter_index: HashMap<String, usize>,
    resume_example_index: HashMap<String, usize>,
    tool_index: HashMap<String, usize>,

    /// role slug → resume template slugs, from [`template_matches_role`].
    role_templates: HashMap<String, Vec<String>>,
    /// role slug → resume example slugs.
    role_examples: HashMap<String, Vec<String>>,
}

/// The string-containment rule matching a template's target-role names to
/// a role title. Case-insensitive, both directions, so "Warehouse Clerk"
/// matches target "Warehouse" and target "Senior Warehouse Clerk" alike.
pub fn template_matches_role(target_role: &str, role_title: &str) -> bool {
    let target = target_role.to_lowercase();
    let title = role_title.to_lowercase();
    target.contains(&title) || title.contains(&target)
}

fn index_of<T>(rows: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| (key(row).to_string(), i))
        .collect()
}

impl Registry {
    /// Build the registry from the in-repo tables. Called once per process.
    pub fn load() -> Self {
        let roles = data::roles();
        let industries = data::industries();
        let cities = data::cities();
        let guides = data::guides();
        let persona_hubs = data::persona_hubs();
        let seasons = data::seasons();
        let seasonal_events = data::seasonal_events();
        let career_evaluations = data::career_evaluations();
        let resume_templates = data::resume_templates();
        let cover_letter_templates = data::cover_letter_templates();
        let resume_examples = data::resume_examples();
        let tools = data::tools();
        let wage_report = data::wage_report();

        let role_index = index_of(&roles, |r| &r.slug);
        let industry_index = index_of(&industries, |i| &i.id);
        let city_index = index_of(&cities, |c| &c.slug);
        let guide_index = index_of(&guides, |g| &g.slug);
        let persona_index = index_of(&persona_hubs, |p| &p.slug);
        let season_index = index_of(&seasons, |s| &s.slug);
        let event_index = index_of(&seasonal_events, |e| &e.slug);
        let evaluation_index = index_of(&career_evaluations, |e| &e.role_slug);
        let resume_template_index = index_of(&resume_templates, |t| &t.slug);
        let cover_letter_index = index_of(&cover_letter_templates, |t| &t.slug);
        let resume_example_index = index_of(&resume_examples, |e| &e.slug);
        let tool_index = index_of(&tools, |t| &t.slug);

        let mut role_templates: HashMap<String, Vec<String>> = HashMap::new();
        let mut role_examples: HashMap<String, Vec<String>> = HashMap::new();
        for role in &roles {
            let templates = resume_templates
                .iter()
                .filter(|t| {
                    t.target_roles
                        .iter()
                        .any(|target| template_matches_role(target, &role.title))
                })
                .map(|t| t.slug.clone())
                .collect();
            role_templates.insert(role.slug.clone(), templates);

            let examples = resume_examples
                .iter()
                .filter(|e| template_matches_role(&e.role_name, &role.title))
                .map(|e| e.slug.clone())
                .collect();
            role_examples.insert(role.slug.clone(), examples);
        }

        Self {
            roles,
            industries,
            cities,
            guides,
            persona_hubs,
            seasons,
            seasonal_events,
            career_evaluations,
            resume_templates,
            cover_letter_templates,
            resume_examples,
            tools,
            wage_report,
            role_index,
            industry_index,
            city_index,
            guide_index,
            persona_index,
            season_index,
            event_index,
            evaluation_index,
            resume_template_index,
            cover_letter_index,
            resume_example_index,
            tool_index,
            role_templates,
            role_examples,
        }
    }

    // ------------------------------------------------------------------
    // Slug lookups — O(1) via the prebuilt indexes
    // ------------------------------------------------------------------

    pub fn role(&self, slug: &str) -> Option<&Role> {
        self.role_index.get(slug).map(|&i| &self.roles[i])
    }

    pub fn industry(&self, id: &str) -> Option<&Industry> {
        self.industry_index.get(id).map(|&i| &self.industries[i])
    }

    pub fn city(&self, slug: &str) -> Option<&City> {
        self.city_index.get(slug).map(|&i| &self.cities[i])
    }

    pub fn guide(&self, slug: &str) -> Option<&Guide> {
        self.guide_index.get(slug).map(|&i| &self.guides[i])
    }

    pub fn persona_hub(&self, slug: &str) -> Option<&PersonaHub> {
        self.persona_index.get(slug).map(|&i| &self.persona_hubs[i])
    }

    pub fn season(&self, slug: &str) -> Option<&Season> {
        self.season_index.get(slug).map(|&i| &self.seasons[i])
    }

    pub fn seasonal_event(&self, slug: &str) -> Option<&SeasonalEvent> {
        self.event_index.get(slug).map(|&i| &self.seasonal_events[i])
    }

    /// Evaluations are keyed by the role they evaluate.
    pub fn evaluation_for_role(&self, role_slug: &str) -> Option<&CareerEvaluation> {
        self.evaluation_index
            .get(role_slug)
            .map(|&i| &self.career_evaluations[i])
    }

    pub fn resume_template(&self, slug: &str) -> Option<&ResumeTemplate> {
        self.resume_template_index
            .get(slug)
            .map(|&i| &self.resume_templates[i])
    }

    pub fn cover_letter_template(&self, slug: &str) -> Option<&CoverLetterTemplate> {
        self.cover_letter_index
            .get(slug)
            .map(|&i| &self.cover_letter_templates[i])
    }

    pub fn resume_example(&self, slug: &str) -> Option<&ResumeExample> {
        self.resume_example_index
            .get(slug)
            .map(|&i| &self.resume_examples[i])
    }

    pub fn tool(&self, slug: &str) -> Option<&Tool> {
        self.tool_index.get(slug).map(|&i| &self.tools[i])
    }

    /// The wage report for the given year. Only [`WAGE_REPORT_YEAR`] exists.
    pub fn wage_report_for_year(&self, year: u16) -> Option<&WageReport> {
        (year == self.wage_report.year).then_some(&self.wage_report)
    }

    // ------------------------------------------------------------------
    // Whole tables
    // ------------------------------------------------------------------

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn industries(&self) -> &[Industry] {
        &self.industries
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn persona_hubs(&self) -> &[PersonaHub] {
        &self.persona_hubs
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn seasonal_events(&self) -> &[SeasonalEvent] {
        &self.seasonal_events
    }

    pub fn career_evaluations(&self) -> &[CareerEvaluation] {
        &self.career_evaluations
    }

    pub fn resume_templates(&self) -> &[ResumeTemplate] {
        &self.resume_templates
    }

    pub fn cover_letter_templates(&self) -> &[CoverLetterTemplate] {
        &self.cover_letter_templates
    }

    pub fn resume_examples(&self) -> &[ResumeExample] {
        &self.resume_examples
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn wage_report(&self) -> &WageReport {
        &self.wage_report
    }

    // ------------------------------------------------------------------
    // Grouping and derived sets
    // ------------------------------------------------------------------

    pub fn roles_in_industry(&self, industry_id: &str) -> Vec<&Role> {
        self.roles
            .iter()
            .filter(|r| r.industry == industry_id)
            .collect()
    }

    pub fn guides_in_category(&self, category: &str) -> Vec<&Guide> {
        self.guides
            .iter()
            .filter(|g| g.category == category)
            .collect()
    }

    pub fn cities_in_state(&self, state_code: &str) -> Vec<&City> {
        self.cities
            .iter()
            .filter(|c| c.state_code == state_code)
            .collect()
    }

    /// Distinct state codes, sorted, derived from the city table.
    pub fn state_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.cities.iter().map(|c| c.state_code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    /// The shared City × Role legality predicate: high search volume or
    /// enrichment data flags a city for combination-page expansion.
    pub fn is_high_value_city(&self, city: &City) -> bool {
        city.search_volume == crate::types::SearchVolume::High || city.enrichment.is_some()
    }

    /// Cities that participate in City × Role expansion, in table order.
    pub fn high_value_cities(&self) -> Vec<&City> {
        self.cities
            .iter()
            .filter(|c| self.is_high_value_city(c))
            .collect()
    }

    /// Resume templates matched to a role at load time.
    pub fn templates_for_role(&self, role_slug: &str) -> Vec<&ResumeTemplate> {
        self.role_templates
            .get(role_slug)
            .into_iter()
            .flatten()
            .filter_map(|slug| self.resume_template(slug))
            .collect()
    }

    /// Resume examples matched to a role at load time.
    pub fn examples_for_role(&self, role_slug: &str) -> Vec<&ResumeExample> {
        self.role_examples
            .get(role_slug)
            .into_iter()
            .flatten()
            .filter_map(|slug| self.resume_example(slug))
            .collect()
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Soft referential-integrity report: one line per dangling reference.
    ///
    /// Dangling references are not errors — the composer drops them from
    /// rendered output — but `check` surfaces them so stale data gets fixed
    /// at the source.
    pub fn integrity_report(&self) -> Vec<String> {
        let mut report = Vec::new();
        let mut missing = |context: String, table: &str, exists: bool| {
            if !exists {
                report.push(format!("{context} → no such {table}"));
            }
        };

        for role in &self.roles {
            missing(
                format!("role '{}' industry '{}'", role.slug, role.industry),
                "industry",
                self.industry(&role.industry).is_some(),
            );
        }
        for hub in &self.persona_hubs {
            for g in &hub.related_guides {
                missing(
                    format!("persona '{}' related guide '{g}'", hub.slug),
                    "guide",
                    self.guide(g).is_some(),
                );
            }
            for t in &hub.recommended_tools {
                missing(
                    format!("persona '{}' recommended tool '{t}'", hub.slug),
                    "tool",
                    self.tool(t).is_some(),
                );
            }
            for t in &hub.resume_templates {
                missing(
                    format!("persona '{}' resume template '{t}'", hub.slug),
                    "resume template",
                    self.resume_template(t).is_some(),
                );
            }
            for t in &hub.cover_letter_templates {
                missing(
                    format!("persona '{}' cover letter template '{t}'", hub.slug),
                    "cover letter template",
                    self.cover_letter_template(t).is_some(),
                );
            }
            for r in &hub.suggested_roles {
                missing(
                    format!("persona '{}' suggested role '{r}'", hub.slug),
                    "role",
                    self.role(r).is_some(),
                );
            }
        }
        for season in &self.seasons {
            for i in &season.industries {
                missing(
                    format!("season '{}' industry '{i}'", season.slug),
                    "industry",
                    self.industry(i).is_some(),
                );
            }
        }
        for event in &self.seasonal_events {
            for i in &event.industries {
                missing(
                    format!("event '{}' industry '{i}'", event.slug),
                    "industry",
                    self.industry(i).is_some(),
                );
            }
            for c in &event.cities {
                missing(
                    format!("event '{}' city '{c}'", event.slug),
                    "city",
                    self.city(c).is_some(),
                );
            }
        }
        for eval in &self.career_evaluations {
            missing(
                format!("evaluation for '{}'", eval.role_slug),
                "role",
                self.role(&eval.role_slug).is_some(),
            );
            for alt in &eval.alternative_roles {
                missing(
                    format!("evaluation '{}' alternative '{alt}'", eval.role_slug),
                    "role",
                    self.role(alt).is_some(),
                );
            }
        }
        for occ in &self.wage_report.occupations {
            missing(
                format!("wage report occupation '{}'", occ.occupation_slug),
                "role",
                self.role(&occ.occupation_slug).is_some(),
            );
        }
        for ind in &self.wage_report.industries {
            missing(
                format!("wage report industry '{}'", ind.industry_slug),
                "industry",
                self.industry(&ind.industry_slug).is_some(),
            );
        }

        report
    }

    /// Duplicate-slug report across every table. Must always be empty.
    pub fn duplicate_slugs(&self) -> Vec<String> {
        fn dupes<'a>(table: &str, slugs: impl Iterator<Item = &'a str>, out: &mut Vec<String>) {
            let mut seen = std::collections::HashSet::new();
            for slug in slugs {
                if !seen.insert(slug) {
                    out.push(format!("{table}: duplicate slug '{slug}'"));
                }
            }
        }

        let mut out = Vec::new();
        dupes("roles", self.roles.iter().map(|r| r.slug.as_str()), &mut out);
        dupes("industries", self.industries.iter().map(|i| i.id.as_str()), &mut out);
        dupes("cities", self.cities.iter().map(|c| c.slug.as_str()), &mut out);
        dupes("guides", self.guides.iter().map(|g| g.slug.as_str()), &mut out);
        dupes("personas", self.persona_hubs.iter().map(|p| p.slug.as_str()), &mut out);
        dupes("seasons", self.seasons.iter().map(|s| s.slug.as_str()), &mut out);
        dupes("events", self.seasonal_events.iter().map(|e| e.slug.as_str()), &mut out);
        dupes(
            "evaluations",
            self.career_evaluations.iter().map(|e| e.role_slug.as_str()),
            &mut out,
        );
        dupes(
            "resume templates",
            self.resume_templates.iter().map(|t| t.slug.as_str()),
            &mut out,
        );
        dupes(
            "cover letter templates",
            self.cover_letter_templates.iter().map(|t| t.slug.as_str()),
            &mut out,
        );
        dupes(
            "resume examples",
            self.resume_examples.iter().map(|e| e.slug.as_str()),
            &mut out,
        );
        dupes("tools", self.tools.iter().map(|t| t.slug.as_str()), &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_slugs_unique() {
        let reg = Registry::load();
        assert!(reg.duplicate_slugs().is_empty(), "{:?}", reg.duplicate_slugs());
    }

    #[test]
    fn slug_lookup_finds_known_entities() {
        let reg = Registry::load();
        assert_eq!(reg.role("bartender").unwrap().title, "Bartender");
        assert_eq!(reg.city("austin").unwrap().state_code, "TX");
        assert!(reg.role("no-such-role").is_none());
    }

    #[test]
    fn slugs_are_url_safe() {
        let reg = Registry::load();
        let ok = |slug: &str| {
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        };
        for r in reg.roles() {
            assert!(ok(&r.slug), "role slug {:?}", r.slug);
        }
        for c in reg.cities() {
            assert!(ok(&c.slug), "city slug {:?}", c.slug);
        }
        for g in reg.guides() {
            assert!(ok(&g.slug), "guide slug {:?}", g.slug);
        }
        for p in reg.persona_hubs() {
            assert!(ok(&p.slug), "persona slug {:?}", p.slug);
        }
    }

    #[test]
    fn high_value_predicate_uses_volume_or_enrichment() {
        let reg = Registry::load();
        // High search volume, no enrichment.
        assert!(reg.is_high_value_city(reg.city("dallas").unwrap()));
        // Medium volume but enriched.
        assert!(reg.is_high_value_city(reg.city("houston").unwrap()));
        // Medium volume, no enrichment: excluded.
        assert!(!reg.is_high_value_city(reg.city("austin").unwrap()));
    }

    #[test]
    fn template_matching_is_case_insensitive_containment() {
        assert!(template_matches_role("Warehouse Clerk", "Warehouse Clerk"));
        assert!(template_matches_role("warehouse", "Warehouse Clerk"));
        assert!(template_matches_role("Senior Warehouse Clerk", "Warehouse Clerk"));
        assert!(!template_matches_role("Bartender", "Warehouse Clerk"));
    }

    #[test]
    fn role_template_adjacency_built_at_load() {
        let reg = Registry::load();
        let templates = reg.templates_for_role("warehouse-clerk");
        assert!(templates.iter().any(|t| t.slug == "skills-first"));
        let examples = reg.examples_for_role("forklift-operator");
        assert!(examples.iter().any(|e| e.slug == "forklift-operator-certified"));
    }

    #[test]
    fn integrity_report_flags_known_stale_guide() {
        let reg = Registry::load();
        let report = reg.integrity_report();
        assert!(
            report
                .iter()
                .any(|line| line.contains("first-job-interview-guide")),
            "expected the stale students guide ref in {report:?}"
        );
        // Nothing else should be dangling.
        assert_eq!(report.len(), 1, "{report:?}");
    }

    #[test]
    fn wage_report_only_supported_year_resolves() {
        let reg = Registry::load();
        assert!(reg.wage_report_for_year(2025).is_none());
        let report = reg.wage_report_for_year(WAGE_REPORT_YEAR).unwrap();
        assert_eq!(report.summary.total_occupations, report.occupations.len());
    }

    #[test]
    fn state_codes_are_sorted_and_distinct() {
        let reg = Registry::load();
        let codes = reg.state_codes();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert!(codes.contains(&"TX"));
    }

    #[test]
    fn roles_group_by_industry() {
        let reg = Registry::load();
        let warehouse = reg.roles_in_industry("warehouse");
        assert!(warehouse.iter().any(|r| r.slug == "forklift-operator"));
        assert!(warehouse.iter().all(|r| r.industry == "warehouse"));
        assert!(reg.roles_in_industry("no-such-industry").is_empty());
    }
}
