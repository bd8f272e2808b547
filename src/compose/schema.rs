//! JSON-LD structured data builders.
//!
//! Each page embeds one main schema.org object plus a `BreadcrumbList`,
//! serialized into a `<script type="application/ld+json">` sidecar. The
//! shape is chosen by page *type*, not entity type: the same role drives a
//! `WebPage` on its role page, a `CollectionPage` on its salary-by-city
//! page, and plain `WebPage` again on its evaluation page.
//!
//! Shapes used: `CollectionPage` (+ `ItemList`), `WebPage`, `FAQPage`,
//! `HowTo`, `BreadcrumbList`, `SoftwareApplication`. Values are built with
//! `serde_json::json!`, so the sidecar is schema-valid JSON by construction.

use crate::compose::breadcrumbs::Breadcrumb;
use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::registry::entities::ToolKind;
use crate::resolver::ResolvedPage;
use crate::types::Faq;
use crate::urls;
use serde_json::{Value, json};

fn web_page(name: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": name,
        "description": description,
        "url": url,
    })
}

fn collection_page(name: &str, description: &str, url: &str, items: &[(String, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (item_name, item_url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item_name,
                "url": item_url,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "name": name,
        "description": description,
        "url": url,
        "mainEntity": {
            "@type": "ItemList",
            "numberOfItems": elements.len(),
            "itemListElement": elements,
        },
    })
}

fn faq_page(name: &str, url: &str, faqs: &[Faq]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "name": name,
        "url": url,
        "mainEntity": questions,
    })
}

fn how_to(name: &str, description: &str, steps: &[String]) -> Value {
    let step_values: Vec<Value> = steps
        .iter()
        .enumerate()
        .map(|(i, text)| {
            json!({
                "@type": "HowToStep",
                "position": i + 1,
                "text": text,
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "HowTo",
        "name": name,
        "description": description,
        "step": step_values,
    })
}

fn software_application(name: &str, description: &str, url: &str, kind: ToolKind) -> Value {
    let category = match kind {
        ToolKind::Calculator => "FinanceApplication",
        ToolKind::Checklist | ToolKind::Quiz => "UtilitiesApplication",
    };
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": name,
        "description": description,
        "url": url,
        "applicationCategory": category,
        "operatingSystem": "Web",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
        },
    })
}

/// BreadcrumbList over the composed trail. Linked crumbs carry an absolute
/// `item` URL; the trailing current-page crumb is name-only, which schema.org
/// permits for the last element.
pub fn breadcrumb_list(base_url: &str, trail: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, crumb)| match &crumb.href {
            Some(href) => json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.label,
                "item": urls::absolute(base_url, href),
            }),
            None => json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.label,
            }),
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// The main JSON-LD object for a resolved page.
pub fn main_schema(registry: &Registry, config: &SiteConfig, page: &ResolvedPage) -> Value {
    let abs = |path: &str| urls::absolute(&config.base_url, path);
    match page {
        ResolvedPage::Home => {
            let items: Vec<(String, String)> = registry
                .roles()
                .iter()
                .map(|role| (role.title.clone(), abs(&urls::role(&role.slug))))
                .collect();
            collection_page(
                "Career Hub",
                "Hourly roles, pay data, hiring seasons, and guides.",
                &abs(urls::HUB),
                &items,
            )
        }
        ResolvedPage::Role(role) => web_page(
            &format!("{} Jobs", role.title),
            &role.short_description,
            &abs(&urls::role(&role.slug)),
        ),
        ResolvedPage::Salary(role) => {
            // Salary-by-city is a collection over the indexed city pages.
            let items: Vec<(String, String)> = registry
                .high_value_cities()
                .iter()
                .map(|city| {
                    (
                        format!("{} in {}", role.title, city.city),
                        abs(&urls::city_role(&city.slug, &role.slug)),
                    )
                })
                .collect();
            collection_page(
                &format!("{} Salary by City", role.title),
                &format!("Where {} work pays best.", role.title.to_lowercase()),
                &abs(&urls::salary(&role.slug)),
                &items,
            )
        }
        ResolvedPage::Evaluation { role, evaluation } => web_page(
            &format!("Is {} a Good Job?", role.title),
            &format!(
                "Verdict: {}. Overall score {:.1}/10.",
                evaluation.verdict.label(),
                evaluation.overall_score
            ),
            &abs(&urls::evaluation(&role.slug)),
        ),
        ResolvedPage::City(city) => web_page(
            &format!("Hourly Jobs in {}", city.city),
            &format!("Typical hourly wages in {}: {}.", city.city, city.avg_hourly_wage),
            &abs(&urls::city(&city.slug)),
        ),
        ResolvedPage::CityRole { city, role } => web_page(
            &format!("{} Jobs in {}", role.title, city.city),
            &role.short_description,
            &abs(&urls::city_role(&city.slug, &role.slug)),
        ),
        ResolvedPage::State { code, cities } => {
            let items: Vec<(String, String)> = cities
                .iter()
                .map(|city| (city.city.clone(), abs(&urls::city(&city.slug))))
                .collect();
            collection_page(
                &format!("Hourly Jobs in {code}"),
                &format!("Metro areas in {code} with hourly work."),
                &abs(&urls::state(code)),
                &items,
            )
        }
        ResolvedPage::Persona(hub) => {
            faq_page(&hub.title, &abs(&urls::persona(&hub.slug)), &hub.faqs)
        }
        ResolvedPage::Guide(guide) => web_page(
            &guide.title,
            &guide.description,
            &abs(&urls::guide(&guide.slug)),
        ),
        ResolvedPage::Season(season) => how_to(
            &format!("How to Get Hired for {}", season.name),
            &season.hiring_timeline,
            &season.tips,
        ),
        ResolvedPage::Event(event) => web_page(
            &format!("Work {}", event.name),
            &format!("{} hiring demand on {}.", event.demand_level, event.date),
            &abs(&urls::seasonal_event(&event.slug)),
        ),
        ResolvedPage::WageReport(report) => web_page(
            &format!("{} Hourly Wage Report", report.year),
            &format!(
                "Percentile wages for {} occupations.",
                report.summary.total_occupations
            ),
            &abs(&urls::wage_report(report.year)),
        ),
        ResolvedPage::Template(template) => web_page(
            &format!("{} Resume Template", template.name),
            &template.description,
            &abs(&urls::template(&template.slug)),
        ),
        ResolvedPage::ResumeExample(example) => web_page(
            &format!("{} Resume Example", example.role_name),
            &example.summary,
            &abs(&urls::resume_example(&example.slug)),
        ),
        ResolvedPage::CoverLetter(template) => web_page(
            &format!("{} Cover Letter", template.name),
            &template.description,
            &abs(&urls::cover_letter(&template.slug)),
        ),
        ResolvedPage::Tool(tool) => software_application(
            &tool.name,
            &tool.description,
            &abs(&urls::tool(&tool.slug)),
            tool.tool_kind,
        ),
    }
}
