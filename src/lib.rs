//! # Hubgen
//!
//! A programmatic-SEO page engine for a staffing platform's career hub.
//! The content model lives in code: a registry of hourly roles, cities,
//! guides, personas, seasons, and wage data expands into a few hundred
//! interlinked static pages under `/career-hub/`.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Registry   code tables  →  Registry        (load once, index by slug)
//! 2. Resolve    URL path     →  ResolvedPage    (path segments → entities)
//! 3. Compose    ResolvedPage →  ComposedPage    (metadata, breadcrumbs, JSON-LD)
//! 4. Generate   ComposedPage →  dist/           (HTML, sitemaps, robots.txt)
//! ```
//!
//! Every stage after load is a pure function over the immutable registry,
//! so page builds parallelize trivially and composing the same page twice
//! yields byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`registry`] | Entity tables, slug indexes, precomputed role↔template relations, integrity checks |
//! | [`resolver`] | URL path → resolved entity tuple; the only 404 source |
//! | [`compose`] | Page metadata, breadcrumb trails, related-entity selection, JSON-LD schemas |
//! | [`sitemap`] | Category-partitioned URL enumeration, chunked XML urlsets, sitemap index |
//! | [`generate`] | Maud HTML emission — writes the final site tree |
//! | [`urls`] | The one place URL paths are built; composer, sitemap, and emitter all call it |
//! | [`config`] | `hub.toml` loading, validation, defaults |
//! | [`types`] | Shared value types (`WageRange`, `SearchVolume`, `IconKind`, `Faq`) |
//! | [`output`] | CLI output formatting for build, check, sitemap, and resolve |
//!
//! # Design Decisions
//!
//! ## Indexed Set vs Rendered Set
//!
//! The sitemap enumerates the bounded, crawlable page set: City × Role
//! combination pages exist only for high-value cities (high search volume
//! or editorial enrichment). The resolver is deliberately looser — any
//! existing city/role pair resolves — so guessable URLs render with a
//! `noindex` meta instead of 404ing. One predicate,
//! [`registry::Registry::is_high_value_city`], drives both sides so they
//! cannot drift apart.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped, and there is no template directory to ship or get out of
//! sync with the page model.
//!
//! ## Soft Referential Integrity
//!
//! Entity cross-references (a persona's recommended guides, an
//! evaluation's alternative roles) are slugs, not indices. A dangling slug
//! is dropped at composition time and reported by `check` — stale content
//! degrades a related-links list, never a build.

pub mod compose;
pub mod config;
pub mod generate;
pub mod output;
pub mod registry;
pub mod resolver;
pub mod sitemap;
pub mod types;
pub mod urls;
