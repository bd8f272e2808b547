//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity is its semantic identity — the entity's title and its
//! URL path — with output files shown only where they are the point (the
//! sitemap listing). This keeps `build` output readable as a site inventory.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Career Hub build
//!     Roles: 15 (15 salary pages, 4 evaluations)
//!     Cities: 12 (7 high-value, 84 combination pages)
//!     Guides: 8   Personas: 4   Tools: 6
//!
//! Wrote 167 pages (84 noindex) and 8 sitemap files to dist/
//! ```
//!
//! ## Check
//!
//! ```text
//! Slugs: ok (77 entities, no duplicates)
//! References: 1 dangling
//!     persona 'students' related guide 'first-job-interview-guide' → no such guide
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::GenerateSummary;
use crate::registry::Registry;
use crate::resolver::ResolvedPage;
use crate::sitemap::SitemapFile;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Build
// ============================================================================

/// Format the registry inventory printed at the start of a build.
pub fn format_inventory(registry: &Registry) -> Vec<String> {
    let high_value = registry.high_value_cities().len();
    vec![
        "Career Hub build".to_string(),
        format!(
            "{}Roles: {} ({} salary pages, {} evaluations)",
            indent(1),
            registry.roles().len(),
            registry.roles().len(),
            registry.career_evaluations().len(),
        ),
        format!(
            "{}Cities: {} ({} high-value, {} combination pages)",
            indent(1),
            registry.cities().len(),
            high_value,
            high_value * registry.roles().len(),
        ),
        format!(
            "{}Guides: {}   Personas: {}   Tools: {}",
            indent(1),
            registry.guides().len(),
            registry.persona_hubs().len(),
            registry.tools().len(),
        ),
    ]
}

/// Format the build completion summary.
pub fn format_build_summary(summary: &GenerateSummary, output_dir: &Path) -> Vec<String> {
    vec![format!(
        "Wrote {} pages ({} noindex) and {} sitemap files to {}",
        summary.pages,
        summary.unindexed_pages,
        summary.sitemap_files,
        output_dir.display(),
    )]
}

pub fn print_build_output(registry: &Registry, summary: &GenerateSummary, output_dir: &Path) {
    for line in format_inventory(registry) {
        println!("{}", line);
    }
    println!();
    for line in format_build_summary(summary, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the `check` report: duplicate slugs, then dangling references.
pub fn format_check_report(duplicates: &[String], dangling: &[String], entities: usize) -> Vec<String> {
    let mut lines = Vec::new();

    if duplicates.is_empty() {
        lines.push(format!("Slugs: ok ({entities} entities, no duplicates)"));
    } else {
        lines.push(format!("Slugs: {} duplicate(s)", duplicates.len()));
        for d in duplicates {
            lines.push(format!("{}{d}", indent(1)));
        }
    }

    if dangling.is_empty() {
        lines.push("References: ok".to_string());
    } else {
        lines.push(format!("References: {} dangling", dangling.len()));
        for d in dangling {
            lines.push(format!("{}{d}", indent(1)));
        }
    }

    lines
}

pub fn print_check_report(duplicates: &[String], dangling: &[String], entities: usize) {
    for line in format_check_report(duplicates, dangling, entities) {
        println!("{}", line);
    }
}

// ============================================================================
// Sitemap
// ============================================================================

/// Format the sitemap plan: one line per file with its URL count.
///
/// ```text
/// sitemap-roles.xml (34 URLs)
/// sitemap-city-roles.xml (105 URLs)
/// 8 files, 187 URLs total
/// ```
pub fn format_sitemap_plan(files: &[SitemapFile]) -> Vec<String> {
    let mut lines: Vec<String> = files
        .iter()
        .map(|f| format!("{} ({} URLs)", f.filename, f.urls.len()))
        .collect();
    let total: usize = files.iter().map(|f| f.urls.len()).sum();
    lines.push(format!("{} files, {} URLs total", files.len(), total));
    lines
}

pub fn print_sitemap_plan(files: &[SitemapFile]) {
    for line in format_sitemap_plan(files) {
        println!("{}", line);
    }
}

// ============================================================================
// Resolve
// ============================================================================

/// Format one resolved path for the `resolve` subcommand.
///
/// ```text
/// /career-hub/cities/austin/warehouse-clerk/
///     Page: Warehouse Clerk Jobs in Austin, TX
///     Indexed: no (rendered, excluded from sitemap)
/// ```
pub fn format_resolved(path: &str, page: &ResolvedPage, indexed: bool) -> Vec<String> {
    let identity = match page {
        ResolvedPage::Home => "Career Hub home".to_string(),
        ResolvedPage::Role(r) => format!("Role: {}", r.title),
        ResolvedPage::Salary(r) => format!("Salary: {}", r.title),
        ResolvedPage::Evaluation { role, evaluation } => {
            format!("Evaluation: {} ({})", role.title, evaluation.verdict.label())
        }
        ResolvedPage::City(c) => format!("City: {}, {}", c.city, c.state_code),
        ResolvedPage::CityRole { city, role } => {
            format!("Combination: {} in {}, {}", role.title, city.city, city.state_code)
        }
        ResolvedPage::State { code, cities } => {
            format!("State: {} ({} cities)", code, cities.len())
        }
        ResolvedPage::Persona(p) => format!("Persona: {}", p.title),
        ResolvedPage::Guide(g) => format!("Guide: {}", g.title),
        ResolvedPage::Season(s) => format!("Season: {}", s.name),
        ResolvedPage::Event(e) => format!("Event: {}", e.name),
        ResolvedPage::WageReport(r) => format!("Wage report: {}", r.year),
        ResolvedPage::Template(t) => format!("Resume template: {}", t.name),
        ResolvedPage::ResumeExample(e) => format!("Resume example: {}", e.role_name),
        ResolvedPage::CoverLetter(t) => format!("Cover letter: {}", t.name),
        ResolvedPage::Tool(t) => format!("Tool: {}", t.name),
    };
    let index_line = if indexed {
        "Indexed: yes".to_string()
    } else {
        "Indexed: no (rendered, excluded from sitemap)".to_string()
    };
    vec![
        path.to_string(),
        format!("{}{identity}", indent(1)),
        format!("{}{index_line}", indent(1)),
    ]
}

pub fn print_resolved(path: &str, page: &ResolvedPage, indexed: bool) {
    for line in format_resolved(path, page, indexed) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::resolver::resolve_path;
    use crate::sitemap;

    #[test]
    fn inventory_counts_match_registry() {
        let reg = Registry::load();
        let lines = format_inventory(&reg);
        assert_eq!(lines[0], "Career Hub build");
        assert!(lines[1].contains("Roles: 15"));
        assert!(lines[2].contains("Cities: 12 (7 high-value"));
    }

    #[test]
    fn check_report_lists_dangling_lines_indented() {
        let lines = format_check_report(
            &[],
            &["persona 'students' related guide 'x' → no such guide".to_string()],
            77,
        );
        assert_eq!(lines[0], "Slugs: ok (77 entities, no duplicates)");
        assert_eq!(lines[1], "References: 1 dangling");
        assert!(lines[2].starts_with("    persona"));
    }

    #[test]
    fn check_report_all_clear() {
        let lines = format_check_report(&[], &[], 10);
        assert_eq!(lines, vec!["Slugs: ok (10 entities, no duplicates)", "References: ok"]);
    }

    #[test]
    fn sitemap_plan_totals_urls() {
        let reg = Registry::load();
        let config = SiteConfig::default();
        let files = sitemap::plan(&reg, &config);
        let lines = format_sitemap_plan(&files);
        assert_eq!(lines.len(), files.len() + 1);
        let total: usize = files.iter().map(|f| f.urls.len()).sum();
        assert!(lines.last().unwrap().contains(&format!("{total} URLs total")));
    }

    #[test]
    fn resolved_output_shows_identity_and_index_status() {
        let reg = Registry::load();
        let path = "/career-hub/cities/austin/warehouse-clerk/";
        let page = resolve_path(&reg, path).unwrap();
        let indexed = page.indexed(&reg);
        let lines = format_resolved(path, &page, indexed);
        assert!(lines[1].contains("Warehouse Clerk in Austin, TX"));
        assert!(lines[2].contains("Indexed: no"));
    }
}
