//! Related-entity selection.
//!
//! Every page cross-links a handful of neighbors: other roles in the same
//! industry, a persona's recommended guides, an evaluation's alternatives.
//! Two rules hold everywhere:
//!
//! 1. **Self-exclusion** — an entity never appears in its own related list.
//! 2. **Dangling references are dropped** — an FK slug that doesn't resolve
//!    is filtered out silently; a stale reference degrades the list, never
//!    the page.
//!
//! Lists are bounded by [`MAX_RELATED`] (or a per-call cap) to keep the
//! cross-link sections small and the page graph crawlable.

use crate::registry::Registry;
use crate::registry::entities::{
    CareerEvaluation, City, CoverLetterTemplate, Guide, PersonaHub, ResumeTemplate, Role, Season,
    SeasonalEvent, Tool,
};

/// Default cap for related lists.
pub const MAX_RELATED: usize = 4;

/// Roles in the same industry, excluding the role itself.
pub fn related_roles<'a>(registry: &'a Registry, role: &Role) -> Vec<&'a Role> {
    registry
        .roles_in_industry(&role.industry)
        .into_iter()
        .filter(|r| r.slug != role.slug)
        .take(MAX_RELATED)
        .collect()
}

/// An evaluation's alternative roles, resolved and self-excluded.
pub fn alternative_roles<'a>(
    registry: &'a Registry,
    evaluation: &CareerEvaluation,
) -> Vec<&'a Role> {
    evaluation
        .alternative_roles
        .iter()
        .filter(|slug| **slug != evaluation.role_slug)
        .filter_map(|slug| registry.role(slug))
        .take(MAX_RELATED)
        .collect()
}

/// Guides in the same category, excluding the guide itself.
pub fn related_guides<'a>(registry: &'a Registry, guide: &Guide) -> Vec<&'a Guide> {
    registry
        .guides_in_category(&guide.category)
        .into_iter()
        .filter(|g| g.slug != guide.slug)
        .take(MAX_RELATED)
        .collect()
}

/// Other resume templates, excluding this one.
pub fn other_templates<'a>(
    registry: &'a Registry,
    template: &ResumeTemplate,
) -> Vec<&'a ResumeTemplate> {
    registry
        .resume_templates()
        .iter()
        .filter(|t| t.slug != template.slug)
        .take(MAX_RELATED)
        .collect()
}

/// Roles hiring in a season's industries, grouped in table order.
pub fn season_roles<'a>(registry: &'a Registry, season: &Season) -> Vec<&'a Role> {
    season
        .industries
        .iter()
        .flat_map(|industry| registry.roles_in_industry(industry))
        .take(MAX_RELATED + 2)
        .collect()
}

/// An event's fixed city set, resolved; dangling slugs dropped.
pub fn event_cities<'a>(registry: &'a Registry, event: &SeasonalEvent) -> Vec<&'a City> {
    event
        .cities
        .iter()
        .filter_map(|slug| registry.city(slug))
        .collect()
}

/// Everything a persona hub links out to, fully resolved.
#[derive(Debug)]
pub struct PersonaLinks<'a> {
    pub guides: Vec<&'a Guide>,
    pub tools: Vec<&'a Tool>,
    pub resume_templates: Vec<&'a ResumeTemplate>,
    pub cover_letter_templates: Vec<&'a CoverLetterTemplate>,
    pub roles: Vec<&'a Role>,
    /// The other persona hubs, for the "not you?" footer. Never includes
    /// the hub itself.
    pub other_personas: Vec<&'a PersonaHub>,
}

/// Resolve every FK list on a persona hub. Dangling slugs drop out here;
/// the rendered page only ever sees live references.
pub fn persona_links<'a>(registry: &'a Registry, hub: &PersonaHub) -> PersonaLinks<'a> {
    PersonaLinks {
        guides: hub
            .related_guides
            .iter()
            .filter_map(|slug| registry.guide(slug))
            .collect(),
        tools: hub
            .recommended_tools
            .iter()
            .filter_map(|slug| registry.tool(slug))
            .collect(),
        resume_templates: hub
            .resume_templates
            .iter()
            .filter_map(|slug| registry.resume_template(slug))
            .collect(),
        cover_letter_templates: hub
            .cover_letter_templates
            .iter()
            .filter_map(|slug| registry.cover_letter_template(slug))
            .collect(),
        roles: hub
            .suggested_roles
            .iter()
            .filter_map(|slug| registry.role(slug))
            .collect(),
        other_personas: registry
            .persona_hubs()
            .iter()
            .filter(|p| p.slug != hub.slug)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> Registry {
        Registry::load()
    }

    #[test]
    fn related_roles_exclude_self_and_stay_in_industry() {
        let reg = reg();
        let role = reg.role("warehouse-clerk").unwrap();
        let related = related_roles(&reg, role);
        assert!(!related.is_empty());
        assert!(related.iter().all(|r| r.slug != "warehouse-clerk"));
        assert!(related.iter().all(|r| r.industry == "warehouse"));
        assert!(related.len() <= MAX_RELATED);
    }

    #[test]
    fn alternatives_never_contain_the_evaluated_role() {
        let reg = reg();
        let eval = reg.evaluation_for_role("forklift-operator").unwrap();
        let alts = alternative_roles(&reg, eval);
        assert!(!alts.is_empty());
        assert!(alts.iter().all(|r| r.slug != "forklift-operator"));
    }

    #[test]
    fn alternatives_drop_dangling_and_self_references() {
        let reg = reg();
        let eval = CareerEvaluation {
            alternative_roles: vec![
                "bartender".to_string(),
                "bartender-in-space".to_string(), // dangling
                "server".to_string(),
                "server".to_string(), // duplicate is fine, slices just resolve
            ],
            ..reg.evaluation_for_role("bartender").unwrap().clone()
        };
        let alts = alternative_roles(&reg, &eval);
        // "bartender" (self) and the dangling slug are gone.
        assert!(alts.iter().all(|r| r.slug != "bartender"));
        assert!(alts.iter().all(|r| r.slug != "bartender-in-space"));
        assert!(alts.iter().any(|r| r.slug == "server"));
    }

    #[test]
    fn persona_links_drop_dangling_guides() {
        let reg = reg();
        let hub = reg.persona_hub("students").unwrap();
        // The data carries one known-stale guide slug.
        assert!(hub.related_guides.iter().any(|g| g == "first-job-interview-guide"));

        let links = persona_links(&reg, hub);
        assert!(links.guides.len() < hub.related_guides.len());
        assert!(links.guides.iter().all(|g| g.slug != "first-job-interview-guide"));
        // Live references survive.
        assert!(links.guides.iter().any(|g| g.slug == "interview-prep"));
    }

    #[test]
    fn other_personas_exclude_self() {
        let reg = reg();
        let hub = reg.persona_hub("students").unwrap();
        let links = persona_links(&reg, hub);
        assert_eq!(links.other_personas.len(), reg.persona_hubs().len() - 1);
        assert!(links.other_personas.iter().all(|p| p.slug != "students"));
    }

    #[test]
    fn related_guides_share_category_and_exclude_self() {
        let reg = reg();
        let guide = reg.guide("getting-paid-faster").unwrap();
        let related = related_guides(&reg, guide);
        assert!(related.iter().all(|g| g.category == "pay"));
        assert!(related.iter().all(|g| g.slug != "getting-paid-faster"));
    }

    #[test]
    fn event_cities_resolve_fixed_set() {
        let reg = reg();
        let event = reg.seasonal_event("spring-marathon-weekend").unwrap();
        let cities = event_cities(&reg, event);
        let slugs: Vec<&str> = cities.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["chicago", "denver"]);
    }
}
