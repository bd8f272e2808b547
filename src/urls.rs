//! Canonical URL paths for every page family.
//!
//! One path builder per page family, used by the composer (canonical URL,
//! breadcrumb hrefs), the sitemap generator, and HTML emission. Keeping all
//! three on the same builders means a route can't drift between what the
//! sitemap advertises, what metadata claims, and where the file lands.
//!
//! Paths are directory-style with a trailing slash (`/career-hub/roles/
//! bartender/`), matching the `index.html`-per-directory output layout.

/// The hub root.
pub const HUB: &str = "/career-hub/";

pub fn role(slug: &str) -> String {
    format!("{HUB}roles/{slug}/")
}

pub fn salary(slug: &str) -> String {
    format!("{HUB}salary/{slug}/")
}

pub fn evaluation(slug: &str) -> String {
    format!("{HUB}is-it-a-good-job/{slug}/")
}

pub fn city(slug: &str) -> String {
    format!("{HUB}cities/{slug}/")
}

pub fn city_role(city_slug: &str, role_slug: &str) -> String {
    format!("{HUB}cities/{city_slug}/{role_slug}/")
}

pub fn state(code: &str) -> String {
    format!("{HUB}states/{}/", code.to_lowercase())
}

pub fn persona(slug: &str) -> String {
    format!("{HUB}for/{slug}/")
}

pub fn guide(slug: &str) -> String {
    format!("{HUB}guides/{slug}/")
}

pub fn season(slug: &str) -> String {
    format!("{HUB}seasonal-hiring/{slug}/")
}

pub fn seasonal_event(slug: &str) -> String {
    format!("{HUB}seasonal-hiring/events/{slug}/")
}

pub fn wage_report(year: u16) -> String {
    format!("{HUB}wage-report/{year}/")
}

pub fn template(slug: &str) -> String {
    format!("{HUB}templates/{slug}/")
}

pub fn resume_example(slug: &str) -> String {
    format!("{HUB}job-application/resume-examples/{slug}/")
}

pub fn cover_letter(slug: &str) -> String {
    format!("{HUB}job-application/cover-letters/{slug}/")
}

pub fn tool(slug: &str) -> String {
    format!("{HUB}tools/{slug}/")
}

/// Absolute URL on the canonical host.
pub fn absolute(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_slash_terminated_and_hub_prefixed() {
        for path in [
            role("bartender"),
            city_role("dallas", "bartender"),
            state("TX"),
            seasonal_event("austin-music-week"),
            wage_report(2026),
            cover_letter("friendly-direct"),
        ] {
            assert!(path.starts_with(HUB), "{path}");
            assert!(path.ends_with('/'), "{path}");
        }
    }

    #[test]
    fn state_paths_are_lowercase() {
        assert_eq!(state("TX"), "/career-hub/states/tx/");
    }

    #[test]
    fn absolute_joins_host_and_path() {
        assert_eq!(
            absolute("https://hub.test", &role("server")),
            "https://hub.test/career-hub/roles/server/"
        );
    }
}
