use clap::{Parser, Subcommand};
use hubgen::registry::Registry;
use hubgen::{config, generate, output, resolver, sitemap};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "hubgen")]
#[command(about = "Static page engine for the career hub")]
#[command(long_about = "\
Static page engine for the career hub

The content model lives in code: roles, cities, guides, personas, seasons,
and wage data expand into a few hundred interlinked pages under
/career-hub/, plus category sitemaps and robots.txt.

URL surface:

  /career-hub/                                  Hub home
  /career-hub/roles/{role}/                     Role detail
  /career-hub/salary/{role}/                    Salary by city
  /career-hub/is-it-a-good-job/{role}/          Career evaluation
  /career-hub/cities/{city}/                    City hub
  /career-hub/cities/{city}/{role}/             City × Role combination
  /career-hub/states/{code}/                    State index
  /career-hub/for/{persona}/                    Persona hub
  /career-hub/guides/{guide}/                   Guide article
  /career-hub/seasonal-hiring/{season}/         Season page
  /career-hub/seasonal-hiring/events/{event}/   Event page
  /career-hub/wage-report/{year}/               Annual wage report
  /career-hub/templates/{template}/             Resume template
  /career-hub/job-application/resume-examples/{example}/
  /career-hub/job-application/cover-letters/{letter}/
  /career-hub/tools/{tool}/                     Interactive tool shell

Combination pages are sitemap-listed only for high-value cities; other
pairs still render, with a noindex meta.

Run 'hubgen gen-config' to print a documented hub.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site config file
    #[arg(long, default_value = "hub.toml", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the full site: pages, sitemaps, robots.txt
    Build,
    /// Validate the registry without building (duplicate slugs, dangling references)
    Check,
    /// Print the sitemap plan: files and URL counts
    Sitemap,
    /// Resolve one URL path and show what it maps to
    Resolve {
        /// Path under /career-hub/ to resolve
        path: String,
    },
    /// Print a stock hub.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::SiteConfig::load(&cli.config)?;
            init_thread_pool(&site_config.processing);
            let registry = Registry::load();
            let summary = generate::generate(&registry, &site_config, &cli.output)?;
            output::print_build_output(&registry, &summary, &cli.output);
        }
        Command::Check => {
            let registry = Registry::load();
            let duplicates = registry.duplicate_slugs();
            let dangling = registry.integrity_report();
            let entities = registry.roles().len()
                + registry.industries().len()
                + registry.cities().len()
                + registry.guides().len()
                + registry.persona_hubs().len()
                + registry.seasons().len()
                + registry.seasonal_events().len()
                + registry.career_evaluations().len()
                + registry.resume_templates().len()
                + registry.cover_letter_templates().len()
                + registry.resume_examples().len()
                + registry.tools().len();
            output::print_check_report(&duplicates, &dangling, entities);
            if !duplicates.is_empty() {
                // Duplicate slugs shadow pages; dangling refs don't.
                std::process::exit(1);
            }
        }
        Command::Sitemap => {
            let site_config = config::SiteConfig::load(&cli.config)?;
            let registry = Registry::load();
            let files = sitemap::plan(&registry, &site_config);
            output::print_sitemap_plan(&files);
        }
        Command::Resolve { path } => {
            let registry = Registry::load();
            match resolver::resolve_path(&registry, &path) {
                Ok(page) => {
                    let indexed = page.indexed(&registry);
                    output::print_resolved(&path, &page, indexed);
                }
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    // Ignore the error if a pool was already built (tests, repeated init).
    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global();
}
