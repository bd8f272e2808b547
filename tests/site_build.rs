//! End-to-end build tests: run the full pipeline into a temp directory and
//! inspect the emitted tree.

use hubgen::config::SiteConfig;
use hubgen::generate;
use hubgen::registry::Registry;
use std::fs;
use std::path::Path;

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel))
        .unwrap_or_else(|e| panic!("missing {rel}: {e}"))
}

#[test]
fn build_writes_every_page_family() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::load();
    let config = SiteConfig::default();

    let summary = generate::generate(&registry, &config, tmp.path()).unwrap();
    assert!(summary.pages > 100);

    // One representative page per family.
    for rel in [
        "career-hub/index.html",
        "career-hub/roles/bartender/index.html",
        "career-hub/salary/bartender/index.html",
        "career-hub/is-it-a-good-job/forklift-operator/index.html",
        "career-hub/cities/dallas/index.html",
        "career-hub/cities/dallas/bartender/index.html",
        "career-hub/states/tx/index.html",
        "career-hub/for/students/index.html",
        "career-hub/guides/first-day-checklist/index.html",
        "career-hub/seasonal-hiring/summer/index.html",
        "career-hub/seasonal-hiring/events/austin-music-week/index.html",
        "career-hub/wage-report/2026/index.html",
        "career-hub/templates/clean-classic/index.html",
        "career-hub/job-application/resume-examples/bartender-experienced/index.html",
        "career-hub/job-application/cover-letters/friendly-direct/index.html",
        "career-hub/tools/shift-pay-calculator/index.html",
    ] {
        assert!(tmp.path().join(rel).is_file(), "expected {rel}");
    }

    assert!(tmp.path().join("sitemap.xml").is_file());
    assert!(tmp.path().join("robots.txt").is_file());
}

#[test]
fn pages_embed_json_ld_and_canonical() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::load();
    let config = SiteConfig::default();
    generate::generate(&registry, &config, tmp.path()).unwrap();

    let html = read(tmp.path(), "career-hub/roles/bartender/index.html");
    assert!(html.contains(r#"<script type="application/ld+json">"#));
    assert!(html.contains("https://schema.org"));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://www.example.com/career-hub/roles/bartender/">"#
    ));
}

#[test]
fn unindexed_combination_pages_render_with_noindex_by_default() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::load();
    let config = SiteConfig::default();
    generate::generate(&registry, &config, tmp.path()).unwrap();

    // Austin is outside the high-value set: the page exists but is noindex.
    let html = read(tmp.path(), "career-hub/cities/austin/warehouse-clerk/index.html");
    assert!(html.contains(r#"content="noindex, follow""#));

    // Dallas is high-value: same family, no noindex.
    let html = read(tmp.path(), "career-hub/cities/dallas/warehouse-clerk/index.html");
    assert!(!html.contains("noindex"));
}

#[test]
fn unindexed_combination_pages_skipped_when_disabled() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::load();
    let config = SiteConfig {
        render_unindexed_combinations: false,
        ..SiteConfig::default()
    };
    let summary = generate::generate(&registry, &config, tmp.path()).unwrap();
    assert_eq!(summary.unindexed_pages, 0);

    assert!(!tmp.path().join("career-hub/cities/austin/warehouse-clerk").exists());
    // High-value combinations still build.
    assert!(tmp.path().join("career-hub/cities/dallas/warehouse-clerk/index.html").is_file());

    // And the austin city page links roles instead of missing combination pages.
    let html = read(tmp.path(), "career-hub/cities/austin/index.html");
    assert!(!html.contains("/career-hub/cities/austin/warehouse-clerk/"));
    assert!(html.contains("/career-hub/roles/warehouse-clerk/"));
}

#[test]
fn robots_txt_points_at_sitemap_index() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::load();
    let config = SiteConfig::default();
    generate::generate(&registry, &config, tmp.path()).unwrap();

    let robots = read(tmp.path(), "robots.txt");
    assert!(robots.contains("Sitemap: https://www.example.com/sitemap.xml"));
}

#[test]
fn sitemap_index_references_files_that_exist() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = Registry::load();
    let config = SiteConfig::default();
    generate::generate(&registry, &config, tmp.path()).unwrap();

    let index = read(tmp.path(), "sitemap.xml");
    for line in index.lines().filter(|l| l.contains("<loc>")) {
        let loc = line
            .trim()
            .trim_start_matches("<loc>")
            .trim_end_matches("</loc>");
        let filename = loc.rsplit('/').next().unwrap();
        assert!(
            tmp.path().join(filename).is_file(),
            "sitemap index references missing {filename}"
        );
    }
}

#[test]
fn two_builds_are_byte_identical() {
    let registry = Registry::load();
    let config = SiteConfig::default();

    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    generate::generate(&registry, &config, a.path()).unwrap();
    generate::generate(&registry, &config, b.path()).unwrap();

    for rel in [
        "career-hub/index.html",
        "career-hub/roles/bartender/index.html",
        "sitemap.xml",
        "sitemap-roles.xml",
    ] {
        assert_eq!(read(a.path(), rel), read(b.path(), rel), "{rel} differs");
    }
}
