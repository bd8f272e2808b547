//! Sitemap ↔ resolver parity: every URL the sitemap advertises must
//! resolve, and the indexed flag must agree with sitemap membership.

use hubgen::config::SiteConfig;
use hubgen::registry::Registry;
use hubgen::resolver::resolve_path;
use hubgen::sitemap::{self, Category};
use std::collections::HashSet;

fn all_sitemap_paths(registry: &Registry, config: &SiteConfig) -> Vec<String> {
    Category::ALL
        .iter()
        .flat_map(|&c| sitemap::enumerate(registry, config, c))
        .map(|row| {
            row.url
                .strip_prefix(&config.base_url)
                .expect("sitemap URL outside base_url")
                .to_string()
        })
        .collect()
}

#[test]
fn every_sitemap_url_resolves_and_is_indexed() {
    let registry = Registry::load();
    let config = SiteConfig::default();

    let paths = all_sitemap_paths(&registry, &config);
    assert!(paths.len() > 100);

    for path in &paths {
        let page = resolve_path(&registry, path)
            .unwrap_or_else(|e| panic!("sitemap URL does not resolve: {path}: {e}"));
        assert!(
            page.indexed(&registry),
            "sitemap lists a page that reports unindexed: {path}"
        );
    }
}

#[test]
fn no_url_appears_twice_across_categories() {
    let registry = Registry::load();
    let config = SiteConfig::default();

    let paths = all_sitemap_paths(&registry, &config);
    let unique: HashSet<&String> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());
}

#[test]
fn combination_urls_cover_exactly_high_value_cities() {
    let registry = Registry::load();
    let config = SiteConfig::default();

    let rows = sitemap::enumerate(&registry, &config, Category::CityRoles);
    assert_eq!(
        rows.len(),
        registry.high_value_cities().len() * registry.roles().len()
    );
    assert!(rows.iter().all(|r| !r.url.contains("/cities/austin/")));
    assert!(rows.iter().any(|r| r.url.contains("/cities/dallas/bartender/")));
}

#[test]
fn resolvable_unindexed_pages_stay_out_of_the_sitemap() {
    let registry = Registry::load();
    let config = SiteConfig::default();

    // The page resolves...
    let page = resolve_path(&registry, "/career-hub/cities/austin/warehouse-clerk/").unwrap();
    assert!(!page.indexed(&registry));

    // ...but no sitemap category lists it.
    let paths = all_sitemap_paths(&registry, &config);
    assert!(!paths.contains(&"/career-hub/cities/austin/warehouse-clerk/".to_string()));
}

#[test]
fn evaluation_urls_exist_only_for_evaluated_roles() {
    let registry = Registry::load();
    let config = SiteConfig::default();

    let paths = all_sitemap_paths(&registry, &config);
    assert!(paths.contains(&"/career-hub/is-it-a-good-job/bartender/".to_string()));
    // Receptionist is a real role with no evaluation row.
    assert!(!paths.contains(&"/career-hub/is-it-a-good-job/receptionist/".to_string()));
    assert!(resolve_path(&registry, "/career-hub/is-it-a-good-job/receptionist/").is_err());
}

#[test]
fn chunking_respects_the_per_file_budget() {
    let registry = Registry::load();
    let config = SiteConfig::default();
    let mut small = config.clone();
    small.sitemap.max_urls_per_file = 25;

    let files = sitemap::plan(&registry, &small);
    assert!(files.iter().all(|f| f.urls.len() <= 25));

    // Same URL set either way, just partitioned differently.
    let chunked: usize = files.iter().map(|f| f.urls.len()).sum();
    let whole: usize = sitemap::plan(&registry, &config)
        .iter()
        .map(|f| f.urls.len())
        .sum();
    assert_eq!(chunked, whole);
}
