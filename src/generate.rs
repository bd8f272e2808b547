//! HTML site emission.
//!
//! Walks the registry, composes every page, and writes the final static
//! site: one `index.html` per URL directory, the sitemap files, and
//! `robots.txt`. Page rendering is a pure function of
//! `(registry, config, resolved page)`, so the emission loop runs the
//! renders in parallel with rayon.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── robots.txt
//! ├── sitemap.xml                    # Index over the category urlsets
//! ├── sitemap-roles.xml
//! ├── sitemap-city-roles.xml        # (-2, -3… when over budget)
//! └── career-hub/
//!     ├── index.html
//!     ├── roles/bartender/index.html
//!     ├── cities/dallas/bartender/index.html
//!     └── ...
//! ```
//!
//! ## Indexed vs rendered
//!
//! The emitted page set is a superset of the sitemap set: when
//! `render_unindexed_combinations` is on, City × Role pages outside the
//! high-value set are written too, with a `noindex` robots meta. Internal
//! links only ever point at pages that were actually emitted.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic XSS escaping. The stylesheet is embedded at compile time
//! and inlined into every page.

use crate::compose::{self, Breadcrumb, ComposedPage, related};
use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::registry::entities::{City, Role};
use crate::resolver::{self, ResolveError, ResolvedPage};
use crate::sitemap;
use crate::types::IconKind;
use crate::urls;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("route enumerated but not resolvable: {0}")]
    UnresolvedRoute(String),
}

/// What a build emitted, for CLI reporting.
#[derive(Debug)]
pub struct GenerateSummary {
    pub pages: usize,
    pub sitemap_files: usize,
    /// City × Role pairs outside the high-value set that were rendered
    /// (0 when `render_unindexed_combinations` is off).
    pub unindexed_pages: usize,
}

const CSS: &str = include_str!("../static/style.css");

/// Every path the build will emit: the full sitemap set, plus — when
/// configured — the City × Role pairs outside the high-value set.
pub fn emitted_paths(registry: &Registry, config: &SiteConfig) -> Vec<String> {
    let mut paths: Vec<String> = sitemap::Category::ALL
        .iter()
        .flat_map(|&category| sitemap::enumerate(registry, config, category))
        .map(|row| {
            row.url
                .strip_prefix(&config.base_url)
                .unwrap_or(&row.url)
                .to_string()
        })
        .collect();

    if config.render_unindexed_combinations {
        for city in registry.cities() {
            if registry.is_high_value_city(city) {
                continue;
            }
            for role in registry.roles() {
                paths.push(urls::city_role(&city.slug, &role.slug));
            }
        }
    }
    paths
}

/// Build the whole site into `output_dir`.
pub fn generate(
    registry: &Registry,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let paths = emitted_paths(registry, config);
    let mut unindexed_pages = 0;

    // Renders are pure; only the writes touch the filesystem.
    let rendered: Vec<(String, String, bool)> = paths
        .par_iter()
        .map(|path| {
            let page = resolver::resolve_path(registry, path)
                .map_err(|ResolveError::NotFound(p)| GenerateError::UnresolvedRoute(p))?;
            let composed = compose::compose(registry, config, &page);
            let indexed = composed.meta.indexed;
            let html = render_page(registry, config, &page, &composed).into_string();
            Ok((path.clone(), html, indexed))
        })
        .collect::<Result<_, GenerateError>>()?;

    for (path, html, indexed) in &rendered {
        if !indexed {
            unindexed_pages += 1;
        }
        let dir = output_dir.join(path.trim_matches('/'));
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("index.html"), html)?;
    }

    let files = sitemap::plan(registry, config);
    for file in &files {
        fs::write(
            output_dir.join(&file.filename),
            sitemap::render_urlset(&file.urls),
        )?;
    }
    fs::write(
        output_dir.join("sitemap.xml"),
        sitemap::render_index(config, &files),
    )?;
    fs::write(
        output_dir.join("robots.txt"),
        format!("User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n", config.base_url),
    )?;

    Ok(GenerateSummary {
        pages: rendered.len(),
        sitemap_files: files.len(),
        unindexed_pages,
    })
}

/// Resolve an icon to its display glyph. The only place presentation
/// meets the `IconKind` data enum.
fn icon_glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Sun => "☀",
        IconKind::Snowflake => "❄",
        IconKind::Leaf => "🍂",
        IconKind::Calendar => "📅",
        IconKind::Calculator => "🧮",
        IconKind::Clock => "⏱",
        IconKind::Document => "📄",
        IconKind::Truck => "🚚",
        IconKind::Storefront => "🏬",
        IconKind::Building => "🏢",
        IconKind::GraduationCap => "🎓",
        IconKind::Briefcase => "💼",
        IconKind::MapPin => "📍",
        IconKind::ChartBar => "📊",
    }
}

// ============================================================================
// Document scaffolding
// ============================================================================

/// Renders the base HTML document: head with metadata, JSON-LD sidecars,
/// inlined CSS, and the page body.
fn base_document(composed: &ComposedPage, content: Markup) -> Markup {
    let meta = &composed.meta;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                @if !meta.keywords.is_empty() {
                    meta name="keywords" content=(meta.keywords.join(", "));
                }
                link rel="canonical" href=(meta.canonical_url);
                @if !meta.indexed {
                    meta name="robots" content="noindex, follow";
                }
                meta property="og:type" content=(meta.open_graph.og_type);
                meta property="og:title" content=(meta.open_graph.title);
                meta property="og:description" content=(meta.open_graph.description);
                meta property="og:url" content=(meta.open_graph.url);
                meta property="og:site_name" content=(meta.open_graph.site_name);
                meta name="twitter:card" content=(meta.twitter_card.card);
                meta name="twitter:title" content=(meta.twitter_card.title);
                meta name="twitter:description" content=(meta.twitter_card.description);
                @for object in &composed.json_ld {
                    script type="application/ld+json" {
                        (PreEscaped(serde_json::to_string(object).unwrap_or_default()))
                    }
                }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header: breadcrumb trail plus hub navigation.
fn site_header(registry: &Registry, trail: &[Breadcrumb]) -> Markup {
    html! {
        header.site-header {
            nav.breadcrumb aria-label="Breadcrumb" {
                @for (i, crumb) in trail.iter().enumerate() {
                    @if i > 0 { " › " }
                    @match &crumb.href {
                        Some(href) => a href=(href) { (crumb.label) },
                        None => span { (crumb.label) },
                    }
                }
            }
            nav.site-nav {
                ul {
                    @for hub in registry.persona_hubs() {
                        li { a href=(urls::persona(&hub.slug)) { (hub.title) } }
                    }
                    li {
                        a href=(urls::wage_report(registry.wage_report().year)) {
                            (registry.wage_report().year) " Wage Report"
                        }
                    }
                }
            }
        }
    }
}

fn role_card(role: &Role) -> Markup {
    html! {
        a.card href=(urls::role(&role.slug)) {
            h3 { (role.title) }
            p.card-rate { (role.avg_hourly_rate) }
            p { (role.short_description) }
            @if role.entry_level {
                span.badge { "Entry level" }
            }
        }
    }
}

fn city_link(city: &City) -> Markup {
    html! {
        a.card href=(urls::city(&city.slug)) {
            h3 { (city.city) ", " (city.state_code) }
            p.card-rate { (city.avg_hourly_wage) }
        }
    }
}

fn markdown(body: &str) -> Markup {
    let parser = Parser::new(body);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

// ============================================================================
// Page renderers
// ============================================================================

/// Render one composed page to a full HTML document.
pub fn render_page(
    registry: &Registry,
    config: &SiteConfig,
    page: &ResolvedPage,
    composed: &ComposedPage,
) -> Markup {
    let header = site_header(registry, &composed.trail);
    let body = match page {
        ResolvedPage::Home => render_home(registry),
        ResolvedPage::Role(role) => render_role(registry, role),
        ResolvedPage::Salary(role) => render_salary(registry, role),
        ResolvedPage::Evaluation { role, evaluation } => {
            render_evaluation(registry, role, evaluation)
        }
        ResolvedPage::City(city) => render_city(registry, config, city),
        ResolvedPage::CityRole { city, role } => render_city_role(registry, city, role),
        ResolvedPage::State { code, cities } => render_state(code, cities),
        ResolvedPage::Persona(hub) => render_persona(registry, hub),
        ResolvedPage::Guide(guide) => render_guide(registry, guide),
        ResolvedPage::Season(season) => render_season(registry, season),
        ResolvedPage::Event(event) => render_event(registry, event),
        ResolvedPage::WageReport(report) => render_wage_report(registry, report),
        ResolvedPage::Template(template) => render_template(registry, template),
        ResolvedPage::ResumeExample(example) => render_resume_example(registry, example),
        ResolvedPage::CoverLetter(template) => render_cover_letter(registry, template),
        ResolvedPage::Tool(tool) => render_tool(tool),
    };
    let content = html! {
        (header)
        main { (body) }
    };
    base_document(composed, content)
}

fn render_home(registry: &Registry) -> Markup {
    html! {
        h1 { "Career Hub" }
        p.lede { "Hourly roles, city pay data, hiring seasons, and practical guides for flexible work." }

        @for industry in registry.industries() {
            section.industry {
                h2 style=(format!("--accent: {};", industry.color)) { (industry.name) }
                div.card-grid {
                    @for role in registry.roles_in_industry(&industry.id) {
                        (role_card(role))
                    }
                }
            }
        }

        section {
            h2 { "Browse by City" }
            div.card-grid {
                @for city in registry.cities() {
                    (city_link(city))
                }
            }
        }

        section {
            h2 { "Guides" }
            ul.link-list {
                @for guide in registry.guides() {
                    li {
                        span.icon { (icon_glyph(guide.icon)) }
                        a href=(urls::guide(&guide.slug)) { (guide.title) }
                        " — " (guide.description)
                    }
                }
            }
        }

        section {
            h2 { "Seasonal Hiring" }
            ul.link-list {
                @for season in registry.seasons() {
                    li {
                        span.icon { (icon_glyph(season.icon)) }
                        a href=(urls::season(&season.slug)) { (season.name) }
                    }
                }
                @for event in registry.seasonal_events() {
                    li {
                        a href=(urls::seasonal_event(&event.slug)) { (event.name) }
                        " (" (event.date) ")"
                    }
                }
            }
        }

        section {
            h2 { "Tools" }
            ul.link-list {
                @for tool in registry.tools() {
                    li {
                        span.icon { (icon_glyph(tool.icon)) }
                        a href=(urls::tool(&tool.slug)) { (tool.name) }
                    }
                }
            }
        }
    }
}

fn render_role(registry: &Registry, role: &Role) -> Markup {
    let industry = registry.industry(&role.industry);
    let related = related::related_roles(registry, role);
    let templates = registry.templates_for_role(&role.slug);
    let examples = registry.examples_for_role(&role.slug);
    let evaluated = registry.evaluation_for_role(&role.slug).is_some();

    html! {
        h1 { (role.title) }
        @if let Some(industry) = industry {
            span.badge style=(format!("--accent: {};", industry.color)) { (industry.name) }
        }
        p.lede { (role.description) }
        p.rate { "Typical pay: " strong { (role.avg_hourly_rate) } }

        nav.page-links {
            a href=(urls::salary(&role.slug)) { (role.title) " salary by city" }
            @if evaluated {
                a href=(urls::evaluation(&role.slug)) { "Is " (role.title.to_lowercase()) " a good job?" }
            }
        }

        @if !templates.is_empty() || !examples.is_empty() {
            section {
                h2 { "Apply for " (role.title) " jobs" }
                ul.link-list {
                    @for template in &templates {
                        li { a href=(urls::template(&template.slug)) { (template.name) " resume template" } }
                    }
                    @for example in &examples {
                        li { a href=(urls::resume_example(&example.slug)) { (example.role_name) " resume example" } }
                    }
                }
            }
        }

        @if !related.is_empty() {
            section {
                h2 { "Similar roles" }
                div.card-grid {
                    @for related_role in &related {
                        (role_card(related_role))
                    }
                }
            }
        }
    }
}

fn render_salary(registry: &Registry, role: &Role) -> Markup {
    html! {
        h1 { (role.title) " Salary by City" }
        p.lede { "National range: " strong { (role.avg_hourly_rate) } }

        table {
            thead {
                tr { th { "City" } th { "Local hourly band" } }
            }
            tbody {
                @for city in registry.high_value_cities() {
                    tr {
                        td { a href=(urls::city_role(&city.slug, &role.slug)) { (city.city) ", " (city.state_code) } }
                        td { (city.avg_hourly_wage) }
                    }
                }
            }
        }

        section {
            h2 { "All cities" }
            div.card-grid {
                @for city in registry.cities() {
                    (city_link(city))
                }
            }
        }
    }
}

fn render_evaluation(
    registry: &Registry,
    role: &Role,
    evaluation: &crate::registry::entities::CareerEvaluation,
) -> Markup {
    let alternatives = related::alternative_roles(registry, evaluation);
    let scores = [
        ("Pay", evaluation.scores.pay),
        ("Flexibility", evaluation.scores.flexibility),
        ("Growth", evaluation.scores.growth),
        ("Stability", evaluation.scores.stability),
        ("Ease of entry", evaluation.scores.entry_ease),
        ("Work-life balance", evaluation.scores.work_life_balance),
        ("Physical demand", evaluation.scores.physical_demand),
        ("Social interaction", evaluation.scores.social_interaction),
    ];

    html! {
        h1 { "Is " (role.title) " a Good Job?" }
        p.verdict { "Verdict: " strong { (evaluation.verdict.label()) } " — " (format!("{:.1}", evaluation.overall_score)) "/10 overall" }

        section {
            h2 { "Scores" }
            table {
                tbody {
                    @for (label, value) in scores {
                        tr { td { (label) } td { (value) "/10" } }
                    }
                }
            }
        }

        div.two-col {
            section {
                h2 { "Pros" }
                ul { @for pro in &evaluation.pros { li { (pro) } } }
            }
            section {
                h2 { "Cons" }
                ul { @for con in &evaluation.cons { li { (con) } } }
            }
        }

        div.two-col {
            section {
                h2 { "Best for" }
                ul { @for item in &evaluation.best_for { li { (item) } } }
            }
            section {
                h2 { "Not for" }
                ul { @for item in &evaluation.worst_for { li { (item) } } }
            }
        }

        @if !alternatives.is_empty() {
            section {
                h2 { "Alternatives to consider" }
                div.card-grid {
                    @for alt in &alternatives {
                        (role_card(alt))
                    }
                }
            }
        }
    }
}

fn render_city(registry: &Registry, config: &SiteConfig, city: &City) -> Markup {
    // Role links must point at pages the build actually writes: the
    // combination page for indexed cities (or when unindexed rendering is
    // on), the plain role page otherwise.
    let combination_pages_exist =
        registry.is_high_value_city(city) || config.render_unindexed_combinations;

    html! {
        h1 { "Hourly Jobs in " (city.city) ", " (city.state_code) }
        p.rate { "Typical wages: " strong { (city.avg_hourly_wage) } }

        @if let Some(enrichment) = &city.enrichment {
            section {
                h2 { "Who's hiring" }
                ul { @for employer in &enrichment.top_employers { li { (employer) } } }
                p { span.icon { (icon_glyph(IconKind::MapPin)) } " " (enrichment.transit_note) }
            }
        }

        section {
            h2 { "Roles in " (city.city) }
            div.card-grid {
                @for role in registry.roles() {
                    @let href = if combination_pages_exist {
                        urls::city_role(&city.slug, &role.slug)
                    } else {
                        urls::role(&role.slug)
                    };
                    a.card href=(href) {
                        h3 { (role.title) }
                        p.card-rate { (role.avg_hourly_rate) }
                    }
                }
            }
        }

        section {
            h2 { "More in " (city.state_code) }
            p { a href=(urls::state(&city.state_code)) { "All " (city.state_code) " cities" } }
        }
    }
}

fn render_city_role(registry: &Registry, city: &City, role: &Role) -> Markup {
    let related = related::related_roles(registry, role);
    html! {
        h1 { (role.title) " Jobs in " (city.city) ", " (city.state_code) }
        p.lede { (role.description) }

        table {
            tbody {
                tr { td { "National range for " (role.title) } td { (role.avg_hourly_rate) } }
                tr { td { "Hourly band in " (city.city) } td { (city.avg_hourly_wage) } }
            }
        }

        @if let Some(enrichment) = &city.enrichment {
            section {
                h2 { "Local picture" }
                ul { @for employer in &enrichment.top_employers { li { (employer) } } }
            }
        }

        nav.page-links {
            a href=(urls::city(&city.slug)) { "All jobs in " (city.city) }
            a href=(urls::role(&role.slug)) { "About the " (role.title) " role" }
        }

        @if !related.is_empty() {
            section {
                h2 { "Similar roles" }
                div.card-grid {
                    @for related_role in &related {
                        (role_card(related_role))
                    }
                }
            }
        }
    }
}

fn render_state(code: &str, cities: &[&City]) -> Markup {
    html! {
        h1 { "Hourly Jobs in " (code) }
        div.card-grid {
            @for city in cities {
                (city_link(city))
            }
        }
    }
}

fn render_persona(registry: &Registry, hub: &crate::registry::entities::PersonaHub) -> Markup {
    let links = related::persona_links(registry, hub);
    html! {
        h1 { (hub.title) }
        p.lede { (hub.headline) }

        div.two-col {
            section {
                h2 { "Sound familiar?" }
                ul { @for point in &hub.pain_points { li { (point) } } }
            }
            section {
                h2 { "How it works here" }
                ul { @for solution in &hub.solutions { li { (solution) } } }
            }
        }

        @if !hub.quick_tips.is_empty() {
            section {
                h2 { "Quick tips" }
                ul { @for tip in &hub.quick_tips { li { (tip) } } }
            }
        }

        @if !links.roles.is_empty() {
            section {
                h2 { "Roles that fit" }
                div.card-grid {
                    @for role in &links.roles { (role_card(role)) }
                }
            }
        }

        @if !links.guides.is_empty() {
            section {
                h2 { "Guides for you" }
                ul.link-list {
                    @for guide in &links.guides {
                        li { a href=(urls::guide(&guide.slug)) { (guide.title) } }
                    }
                }
            }
        }

        @if !links.tools.is_empty() {
            section {
                h2 { "Handy tools" }
                ul.link-list {
                    @for tool in &links.tools {
                        li { a href=(urls::tool(&tool.slug)) { (tool.name) } }
                    }
                }
            }
        }

        @if !links.resume_templates.is_empty() || !links.cover_letter_templates.is_empty() {
            section {
                h2 { "Application materials" }
                ul.link-list {
                    @for template in &links.resume_templates {
                        li { a href=(urls::template(&template.slug)) { (template.name) " resume template" } }
                    }
                    @for letter in &links.cover_letter_templates {
                        li { a href=(urls::cover_letter(&letter.slug)) { (letter.name) " cover letter" } }
                    }
                }
            }
        }

        @if !hub.faqs.is_empty() {
            section.faq {
                h2 { "FAQ" }
                @for faq in &hub.faqs {
                    details {
                        summary { (faq.question) }
                        p { (faq.answer) }
                    }
                }
            }
        }

        @if !links.other_personas.is_empty() {
            footer.other-personas {
                "Not you? "
                @for (i, persona) in links.other_personas.iter().enumerate() {
                    @if i > 0 { " · " }
                    a href=(urls::persona(&persona.slug)) { (persona.title) }
                }
            }
        }
    }
}

fn render_guide(registry: &Registry, guide: &crate::registry::entities::Guide) -> Markup {
    let related = related::related_guides(registry, guide);
    html! {
        article.guide {
            (markdown(&guide.body))
        }
        @if !related.is_empty() {
            section {
                h2 { "Related guides" }
                ul.link-list {
                    @for other in &related {
                        li { a href=(urls::guide(&other.slug)) { (other.title) } }
                    }
                }
            }
        }
    }
}

fn render_season(registry: &Registry, season: &crate::registry::entities::Season) -> Markup {
    let roles = related::season_roles(registry, season);
    html! {
        h1 { span.icon { (icon_glyph(season.icon)) } " " (season.name) }
        p.lede { (season.hiring_timeline) }
        table {
            tbody {
                tr { td { "Demand" } td { (season.demand_level) } }
                tr { td { "Typical pay bump" } td { (season.avg_pay_increase) } }
            }
        }
        section {
            h2 { "How to land it" }
            ol { @for tip in &season.tips { li { (tip) } } }
        }
        @if !roles.is_empty() {
            section {
                h2 { "Roles hiring this season" }
                div.card-grid {
                    @for role in &roles { (role_card(role)) }
                }
            }
        }
    }
}

fn render_event(registry: &Registry, event: &crate::registry::entities::SeasonalEvent) -> Markup {
    let cities = related::event_cities(registry, event);
    html! {
        h1 { "Work " (event.name) }
        p.lede { (event.date) " — " (event.demand_level) " hiring demand" }
        @if !cities.is_empty() {
            section {
                h2 { "Where" }
                div.card-grid {
                    @for city in &cities { (city_link(city)) }
                }
            }
        }
        section {
            h2 { "Tips" }
            ul { @for tip in &event.tips { li { (tip) } } }
        }
    }
}

fn render_wage_report(
    registry: &Registry,
    report: &crate::registry::entities::WageReport,
) -> Markup {
    // Derived insight, computed at render time from the dataset.
    let mut by_growth: Vec<_> = report.occupations.iter().collect();
    by_growth.sort_by(|a, b| b.yoy_change.total_cmp(&a.yoy_change));
    let fastest: Vec<_> = by_growth.into_iter().take(3).collect();

    html! {
        h1 { (report.year) " Hourly Wage Report" }
        p.lede {
            "Median hourly wage " strong { "$" (format!("{:.2}", report.summary.median_hourly)) }
            " across " (report.summary.total_occupations) " occupations, up "
            (format!("{:.1}", report.summary.median_yoy_change * 100.0)) "% year over year."
        }

        section {
            h2 { "Fastest-growing occupations" }
            ul {
                @for occ in &fastest {
                    @if let Some(role) = registry.role(&occ.occupation_slug) {
                        li {
                            a href=(urls::role(&role.slug)) { (role.title) }
                            ": +" (format!("{:.1}", occ.yoy_change * 100.0)) "%"
                        }
                    }
                }
            }
        }

        section {
            h2 { "Wages by occupation" }
            table {
                thead {
                    tr {
                        th { "Occupation" }
                        th { "10th" } th { "25th" } th { "Median" } th { "75th" } th { "90th" }
                        th { "YoY" }
                    }
                }
                tbody {
                    @for occ in &report.occupations {
                        @if let Some(role) = registry.role(&occ.occupation_slug) {
                            tr {
                                td { a href=(urls::role(&role.slug)) { (role.title) } }
                                @for p in occ.percentiles {
                                    td { "$" (format!("{:.2}", p)) }
                                }
                                td { "+" (format!("{:.1}", occ.yoy_change * 100.0)) "%" }
                            }
                        }
                    }
                }
            }
        }

        section {
            h2 { "Wage growth by industry" }
            table {
                tbody {
                    @for row in &report.industries {
                        @if let Some(industry) = registry.industry(&row.industry_slug) {
                            tr {
                                td { (industry.name) }
                                td { "+" (format!("{:.1}", row.wage_growth * 100.0)) "%" }
                            }
                        }
                    }
                }
            }
        }

        section {
            h2 { "Median wage by region" }
            table {
                tbody {
                    @for row in &report.regions {
                        tr {
                            td { (row.region) }
                            td { "$" (format!("{:.2}", row.median_hourly)) }
                        }
                    }
                }
            }
        }
    }
}

fn render_template(
    registry: &Registry,
    template: &crate::registry::entities::ResumeTemplate,
) -> Markup {
    let others = related::other_templates(registry, template);
    // Roles this template targets, resolved through the same containment
    // rule the registry adjacency uses.
    let target_roles: Vec<&Role> = registry
        .roles()
        .iter()
        .filter(|role| {
            template
                .target_roles
                .iter()
                .any(|t| crate::registry::template_matches_role(t, &role.title))
        })
        .collect();

    html! {
        h1 { (template.name) " Resume Template" }
        p.lede { (template.description) }
        p { "Layout: " (template.layout) }

        @if !target_roles.is_empty() {
            section {
                h2 { "Best for these roles" }
                ul.link-list {
                    @for role in &target_roles {
                        li { a href=(urls::role(&role.slug)) { (role.title) } }
                    }
                }
            }
        }

        @if !others.is_empty() {
            section {
                h2 { "Other templates" }
                ul.link-list {
                    @for other in &others {
                        li { a href=(urls::template(&other.slug)) { (other.name) } }
                    }
                }
            }
        }
    }
}

fn render_resume_example(
    registry: &Registry,
    example: &crate::registry::entities::ResumeExample,
) -> Markup {
    let matching_roles: Vec<&Role> = registry
        .roles()
        .iter()
        .filter(|role| crate::registry::template_matches_role(&example.role_name, &role.title))
        .collect();

    html! {
        h1 { (example.role_name) " Resume Example" }
        p.lede { (example.summary) }
        section {
            h2 { "What makes it work" }
            ul { @for highlight in &example.highlights { li { (highlight) } } }
        }
        @if !matching_roles.is_empty() {
            section {
                h2 { "Use it for" }
                ul.link-list {
                    @for role in &matching_roles {
                        li { a href=(urls::role(&role.slug)) { (role.title) " jobs" } }
                    }
                }
            }
        }
    }
}

fn render_cover_letter(
    registry: &Registry,
    template: &crate::registry::entities::CoverLetterTemplate,
) -> Markup {
    let others: Vec<_> = registry
        .cover_letter_templates()
        .iter()
        .filter(|t| t.slug != template.slug)
        .collect();
    html! {
        h1 { (template.name) " Cover Letter Template" }
        p.lede { (template.description) }
        p { "Tone: " (template.tone) }
        @if !others.is_empty() {
            section {
                h2 { "Other cover letters" }
                ul.link-list {
                    @for other in &others {
                        li { a href=(urls::cover_letter(&other.slug)) { (other.name) } }
                    }
                }
            }
        }
    }
}

fn render_tool(tool: &crate::registry::entities::Tool) -> Markup {
    html! {
        h1 { span.icon { (icon_glyph(tool.icon)) } " " (tool.name) }
        p.lede { (tool.description) }
        // Calculators are external collaborators rendered as opaque
        // widgets; no data flows back into the page model.
        div.widget-mount data-widget=(tool.slug) {
            noscript { p { "This tool needs JavaScript." } }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Registry, SiteConfig) {
        (Registry::load(), SiteConfig::default())
    }

    fn render(reg: &Registry, config: &SiteConfig, path: &str) -> String {
        let page = resolver::resolve_path(reg, path).unwrap();
        let composed = compose::compose(reg, config, &page);
        render_page(reg, config, &page, &composed).into_string()
    }

    #[test]
    fn role_page_contains_title_and_json_ld() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/roles/bartender");
        assert!(html.contains("Bartender"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("schema.org"));
        assert!(html.contains(r#"rel="canonical""#));
        assert!(!html.contains("noindex"));
    }

    #[test]
    fn json_ld_sidecar_is_valid_json() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/for/students");
        let start = html.find(r#"<script type="application/ld+json">"#).unwrap()
            + r#"<script type="application/ld+json">"#.len();
        let end = start + html[start..].find("</script>").unwrap();
        let value: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(value["@type"], "FAQPage");
    }

    #[test]
    fn unindexed_city_role_page_carries_noindex() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/cities/austin/warehouse-clerk");
        assert!(html.contains("noindex"));
        assert!(html.contains("Warehouse Clerk Jobs in Austin"));
    }

    #[test]
    fn indexed_city_role_page_has_no_noindex() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/cities/dallas/bartender");
        assert!(!html.contains("noindex"));
    }

    #[test]
    fn city_page_links_fall_back_when_unindexed_rendering_off() {
        let (reg, mut config) = fixtures();
        config.render_unindexed_combinations = false;
        // Austin combination pages won't be written, so links must point
        // at the role pages instead.
        let html = render(&reg, &config, "/career-hub/cities/austin");
        assert!(!html.contains("/career-hub/cities/austin/warehouse-clerk/"));
        assert!(html.contains("/career-hub/roles/warehouse-clerk/"));

        // Dallas is high-value; its combination links stay.
        let html = render(&reg, &config, "/career-hub/cities/dallas");
        assert!(html.contains("/career-hub/cities/dallas/warehouse-clerk/"));
    }

    #[test]
    fn persona_page_omits_dangling_guide() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/for/students");
        assert!(!html.contains("first-job-interview-guide"));
        assert!(html.contains("/career-hub/guides/interview-prep/"));
    }

    #[test]
    fn evaluation_page_never_links_itself_as_alternative() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/is-it-a-good-job/forklift-operator");
        let alternatives_section = html.split("Alternatives to consider").nth(1).unwrap();
        assert!(!alternatives_section.contains("/career-hub/roles/forklift-operator/"));
    }

    #[test]
    fn guide_markdown_renders_to_html() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/guides/getting-paid-faster");
        assert!(html.contains("<strong>Direct deposit</strong>"));
        assert!(html.contains("<h2>"));
    }

    #[test]
    fn wage_report_page_shows_summary_and_rows() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/wage-report/2026");
        assert!(html.contains("2026 Hourly Wage Report"));
        assert!(html.contains("Fastest-growing occupations"));
        // Every occupation with a live role link appears in the table.
        assert!(html.contains("/career-hub/roles/line-cook/"));
    }

    #[test]
    fn emitted_paths_cover_sitemap_and_unindexed_extras() {
        let (reg, config) = fixtures();
        let with_extras = emitted_paths(&reg, &config);

        let mut config_off = config.clone();
        config_off.render_unindexed_combinations = false;
        let without = emitted_paths(&reg, &config_off);

        let low_value_cities = reg.cities().len() - reg.high_value_cities().len();
        assert_eq!(
            with_extras.len() - without.len(),
            low_value_cities * reg.roles().len()
        );
        assert!(with_extras.contains(&"/career-hub/cities/austin/warehouse-clerk/".to_string()));
        assert!(!without.contains(&"/career-hub/cities/austin/warehouse-clerk/".to_string()));
    }

    #[test]
    fn tool_page_mounts_opaque_widget() {
        let (reg, config) = fixtures();
        let html = render(&reg, &config, "/career-hub/tools/shift-pay-calculator");
        assert!(html.contains(r#"data-widget="shift-pay-calculator""#));
    }

    #[test]
    fn maud_escapes_entity_text() {
        let (reg, config) = fixtures();
        // Industry name "Warehouse & Logistics" must be escaped in HTML.
        let html = render(&reg, &config, "/career-hub/");
        assert!(html.contains("Warehouse &amp; Logistics"));
    }
}
