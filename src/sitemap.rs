//! Sitemap enumeration and XML emission.
//!
//! The crawlable URL set is partitioned into named categories, each
//! enumerated independently as a pure fold over the registry — no I/O, no
//! per-URL lookups beyond the already-loaded tables. For fixed data the
//! output is byte-stable: URLs come out in table order and `lastmod` is a
//! config constant, not the build clock.
//!
//! ## Combinatorial bounding
//!
//! The `city-roles` category multiplies cities by roles. Unbounded, that
//! grows quadratically; instead it iterates `Registry::high_value_cities`,
//! the same predicate the resolver's `indexed` flag uses. Every URL this
//! module emits resolves; every pair it omits still renders on request but
//! carries `noindex`.
//!
//! ## Partitioning
//!
//! Each category becomes one or more `sitemap-{name}[-N].xml` urlsets,
//! split when it exceeds the configured per-file budget, all reachable
//! from the top-level `sitemap.xml` index.

use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::urls;
use serde::Serialize;

/// The fixed set of sitemap categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Core,
    Roles,
    Cities,
    CityRoles,
    Tools,
    Guides,
    States,
    JobApplication,
    Personas,
    Seasonal,
    WageReport,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Core,
        Category::Roles,
        Category::Cities,
        Category::CityRoles,
        Category::Tools,
        Category::Guides,
        Category::States,
        Category::JobApplication,
        Category::Personas,
        Category::Seasonal,
        Category::WageReport,
    ];

    /// The category's name as used in sitemap filenames.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Roles => "roles",
            Category::Cities => "cities",
            Category::CityRoles => "city-roles",
            Category::Tools => "tools",
            Category::Guides => "guides",
            Category::States => "states",
            Category::JobApplication => "job-application",
            Category::Personas => "personas",
            Category::Seasonal => "seasonal",
            Category::WageReport => "wage-report",
        }
    }
}

/// Sitemap-protocol change frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

/// One sitemap row.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapUrl {
    /// Absolute URL on the canonical host.
    pub url: String,
    /// ISO date, from config (fixed for reproducible builds).
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    /// 0.0–1.0.
    pub priority: f32,
}

/// Enumerate every URL in one category, in table order.
pub fn enumerate(registry: &Registry, config: &SiteConfig, category: Category) -> Vec<SitemapUrl> {
    let row = |path: String, changefreq: ChangeFrequency, priority: f32| SitemapUrl {
        url: urls::absolute(&config.base_url, &path),
        lastmod: config.sitemap.lastmod.clone(),
        changefreq,
        priority,
    };

    match category {
        Category::Core => vec![row(urls::HUB.to_string(), ChangeFrequency::Daily, 1.0)],
        Category::Roles => {
            let mut out = Vec::new();
            for role in registry.roles() {
                out.push(row(urls::role(&role.slug), ChangeFrequency::Weekly, 0.9));
                out.push(row(urls::salary(&role.slug), ChangeFrequency::Monthly, 0.8));
            }
            // Evaluation pages exist only for evaluated roles; the resolver
            // 404s the rest, so the sitemap must not advertise them.
            for eval in registry.career_evaluations() {
                out.push(row(
                    urls::evaluation(&eval.role_slug),
                    ChangeFrequency::Monthly,
                    0.7,
                ));
            }
            out
        }
        Category::Cities => registry
            .cities()
            .iter()
            .map(|city| row(urls::city(&city.slug), ChangeFrequency::Weekly, 0.8))
            .collect(),
        Category::CityRoles => {
            // Bounded by the shared high-value predicate; see module docs.
            let mut out = Vec::new();
            for city in registry.high_value_cities() {
                for role in registry.roles() {
                    out.push(row(
                        urls::city_role(&city.slug, &role.slug),
                        ChangeFrequency::Weekly,
                        0.7,
                    ));
                }
            }
            out
        }
        Category::Tools => registry
            .tools()
            .iter()
            .map(|tool| row(urls::tool(&tool.slug), ChangeFrequency::Monthly, 0.6))
            .collect(),
        Category::Guides => registry
            .guides()
            .iter()
            .map(|guide| row(urls::guide(&guide.slug), ChangeFrequency::Monthly, 0.7))
            .collect(),
        Category::States => registry
            .state_codes()
            .iter()
            .map(|code| row(urls::state(code), ChangeFrequency::Monthly, 0.6))
            .collect(),
        Category::JobApplication => {
            let mut out = Vec::new();
            for template in registry.resume_templates() {
                out.push(row(
                    urls::template(&template.slug),
                    ChangeFrequency::Monthly,
                    0.6,
                ));
            }
            for example in registry.resume_examples() {
                out.push(row(
                    urls::resume_example(&example.slug),
                    ChangeFrequency::Monthly,
                    0.5,
                ));
            }
            for letter in registry.cover_letter_templates() {
                out.push(row(
                    urls::cover_letter(&letter.slug),
                    ChangeFrequency::Monthly,
                    0.5,
                ));
            }
            out
        }
        Category::Personas => registry
            .persona_hubs()
            .iter()
            .map(|hub| row(urls::persona(&hub.slug), ChangeFrequency::Monthly, 0.8))
            .collect(),
        Category::Seasonal => {
            let mut out = Vec::new();
            for season in registry.seasons() {
                out.push(row(urls::season(&season.slug), ChangeFrequency::Monthly, 0.7));
            }
            for event in registry.seasonal_events() {
                out.push(row(
                    urls::seasonal_event(&event.slug),
                    ChangeFrequency::Weekly,
                    0.6,
                ));
            }
            out
        }
        Category::WageReport => vec![row(
            urls::wage_report(registry.wage_report().year),
            ChangeFrequency::Yearly,
            0.8,
        )],
    }
}

/// One emitted sitemap file: a filename and its URL rows.
#[derive(Debug)]
pub struct SitemapFile {
    pub filename: String,
    pub category: Category,
    pub urls: Vec<SitemapUrl>,
}

/// Plan the full sitemap set: every category, chunked to the per-file
/// budget. Chunks are numbered from 2 (`sitemap-city-roles.xml`,
/// `sitemap-city-roles-2.xml`, …).
pub fn plan(registry: &Registry, config: &SiteConfig) -> Vec<SitemapFile> {
    let mut files = Vec::new();
    for category in Category::ALL {
        let rows = enumerate(registry, config, category);
        if rows.is_empty() {
            continue;
        }
        let chunks: Vec<&[SitemapUrl]> = rows.chunks(config.sitemap.max_urls_per_file).collect();
        let multi = chunks.len() > 1;
        for (i, chunk) in chunks.iter().enumerate() {
            let filename = if multi && i > 0 {
                format!("sitemap-{}-{}.xml", category.name(), i + 1)
            } else {
                format!("sitemap-{}.xml", category.name())
            };
            files.push(SitemapFile {
                filename,
                category,
                urls: chunk.to_vec(),
            });
        }
    }
    files
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render one urlset document.
pub fn render_urlset(rows: &[SitemapUrl]) -> String {
    let mut out = String::with_capacity(rows.len() * 160 + 128);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for row in rows {
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&row.url)));
        out.push_str(&format!("    <lastmod>{}</lastmod>\n", xml_escape(&row.lastmod)));
        out.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            row.changefreq.as_str()
        ));
        out.push_str(&format!("    <priority>{:.1}</priority>\n", row.priority));
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

/// Render the top-level sitemap index pointing at every urlset file.
pub fn render_index(config: &SiteConfig, files: &[SitemapFile]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for file in files {
        out.push_str("  <sitemap>\n");
        out.push_str(&format!(
            "    <loc>{}/{}</loc>\n",
            xml_escape(&config.base_url),
            xml_escape(&file.filename)
        ));
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            xml_escape(&config.sitemap.lastmod)
        ));
        out.push_str("  </sitemap>\n");
    }
    out.push_str("</sitemapindex>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_path;

    fn fixtures() -> (Registry, SiteConfig) {
        (Registry::load(), SiteConfig::default())
    }

    #[test]
    fn city_roles_is_exactly_high_value_times_roles() {
        let (reg, config) = fixtures();
        let rows = enumerate(&reg, &config, Category::CityRoles);
        assert_eq!(
            rows.len(),
            reg.high_value_cities().len() * reg.roles().len()
        );
    }

    #[test]
    fn city_roles_omits_unindexed_pairs() {
        let (reg, config) = fixtures();
        let rows = enumerate(&reg, &config, Category::CityRoles);
        assert!(
            rows.iter().all(|r| !r.url.contains("/cities/austin/")),
            "austin is not high-value and must not be advertised"
        );
    }

    #[test]
    fn every_enumerated_url_resolves() {
        let (reg, config) = fixtures();
        for category in Category::ALL {
            for row in enumerate(&reg, &config, category) {
                let path = row.url.strip_prefix(&config.base_url).unwrap();
                assert!(
                    resolve_path(&reg, path).is_ok(),
                    "sitemap advertises unresolvable {path} ({})",
                    category.name()
                );
            }
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let (reg, config) = fixtures();
        for category in Category::ALL {
            let a = render_urlset(&enumerate(&reg, &config, category));
            let b = render_urlset(&enumerate(&reg, &config, category));
            assert_eq!(a, b, "{}", category.name());
        }
    }

    #[test]
    fn no_duplicate_urls_across_categories() {
        let (reg, config) = fixtures();
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            for row in enumerate(&reg, &config, category) {
                assert!(seen.insert(row.url.clone()), "duplicate {}", row.url);
            }
        }
    }

    #[test]
    fn evaluation_pages_listed_only_for_evaluated_roles() {
        let (reg, config) = fixtures();
        let rows = enumerate(&reg, &config, Category::Roles);
        let eval_urls: Vec<&str> = rows
            .iter()
            .map(|r| r.url.as_str())
            .filter(|u| u.contains("/is-it-a-good-job/"))
            .collect();
        assert_eq!(eval_urls.len(), reg.career_evaluations().len());
        assert!(!eval_urls.iter().any(|u| u.contains("/receptionist/")));
    }

    #[test]
    fn plan_chunks_oversized_categories() {
        let (reg, mut config) = fixtures();
        config.sitemap.max_urls_per_file = 10;
        let files = plan(&reg, &config);
        let city_role_files: Vec<&SitemapFile> = files
            .iter()
            .filter(|f| f.category == Category::CityRoles)
            .collect();
        let total: usize = city_role_files.iter().map(|f| f.urls.len()).sum();
        assert_eq!(total, reg.high_value_cities().len() * reg.roles().len());
        assert!(city_role_files.len() > 1);
        assert_eq!(city_role_files[0].filename, "sitemap-city-roles.xml");
        assert_eq!(city_role_files[1].filename, "sitemap-city-roles-2.xml");
        assert!(city_role_files.iter().all(|f| f.urls.len() <= 10));
    }

    #[test]
    fn urlset_is_escaped_xml() {
        let rows = vec![SitemapUrl {
            url: "https://x.test/a?b=1&c=2".to_string(),
            lastmod: "2026-08-01".to_string(),
            changefreq: ChangeFrequency::Weekly,
            priority: 0.8,
        }];
        let xml = render_urlset(&rows);
        assert!(xml.contains("&amp;"));
        assert!(!xml.contains("b=1&c"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn index_references_every_planned_file() {
        let (reg, config) = fixtures();
        let files = plan(&reg, &config);
        let index = render_index(&config, &files);
        for file in &files {
            assert!(index.contains(&file.filename), "{}", file.filename);
        }
    }
}
