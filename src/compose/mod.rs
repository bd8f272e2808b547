//! Page composition: resolved entity → renderable content model.
//!
//! The composer sits between the resolver and HTML emission. For one
//! resolved page it produces a [`ComposedPage`]: the metadata block, the
//! breadcrumb trail, and the JSON-LD sidecar objects. Related-entity
//! selection lives in [`related`] and is consumed directly by the page
//! renderers, which need the typed entities rather than a serialized form.
//!
//! Everything here is a pure function of `(registry, config, page)` —
//! composing a page twice yields identical output, and any number of pages
//! can compose concurrently over the shared registry.

pub mod breadcrumbs;
pub mod metadata;
pub mod related;
pub mod schema;

use crate::config::SiteConfig;
use crate::registry::Registry;
use crate::resolver::ResolvedPage;
use serde_json::Value;

pub use breadcrumbs::Breadcrumb;
pub use metadata::PageMeta;

/// The composed content model for one page.
#[derive(Debug)]
pub struct ComposedPage {
    pub meta: PageMeta,
    pub trail: Vec<Breadcrumb>,
    /// JSON-LD objects, main shape first, BreadcrumbList last.
    pub json_ld: Vec<Value>,
}

/// Compose metadata, breadcrumbs, and structured data for a resolved page.
pub fn compose(registry: &Registry, config: &SiteConfig, page: &ResolvedPage) -> ComposedPage {
    let meta = metadata::page_meta(registry, config, page);
    let trail = breadcrumbs::breadcrumbs(page);
    let mut json_ld = vec![schema::main_schema(registry, config, page)];
    if trail.len() > 1 {
        json_ld.push(schema::breadcrumb_list(&config.base_url, &trail));
    }
    ComposedPage {
        meta,
        trail,
        json_ld,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_path;

    #[test]
    fn composed_page_bundles_meta_trail_and_schema() {
        let reg = Registry::load();
        let config = SiteConfig::default();
        let page = resolve_path(&reg, "/career-hub/roles/bartender").unwrap();
        let composed = compose(&reg, &config, &page);

        assert!(composed.meta.title.contains("Bartender"));
        assert_eq!(composed.trail.len(), 2);
        assert_eq!(composed.json_ld.len(), 2);
        assert_eq!(composed.json_ld[1]["@type"], "BreadcrumbList");
    }

    #[test]
    fn home_page_has_no_breadcrumb_schema() {
        let reg = Registry::load();
        let config = SiteConfig::default();
        let page = resolve_path(&reg, "/career-hub/").unwrap();
        let composed = compose(&reg, &config, &page);
        assert_eq!(composed.json_ld.len(), 1);
        assert_eq!(composed.json_ld[0]["@type"], "CollectionPage");
    }
}
