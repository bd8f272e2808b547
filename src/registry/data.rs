//! In-repo data tables.
//!
//! These are the static seed definitions the registry loads once at
//! startup. Rows are plain struct literals; every cross-reference is a
//! slug into another table. The tables are the single source of truth —
//! no database, no fetch at build time.
//!
//! Editorial note: copy here is intentionally short. Long-form page copy
//! lives in guide bodies (markdown); everything else is a sentence or two
//! rendered into cards and meta descriptions.

use super::entities::*;
use crate::types::{DemandLevel, Faq, IconKind, SearchVolume, Verdict, WageRange};

fn s(v: &str) -> String {
    v.to_string()
}

fn vs(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

pub(super) fn industries() -> Vec<Industry> {
    vec![
        Industry { id: s("hospitality"), name: s("Hospitality"), color: s("#e07a3f") },
        Industry { id: s("warehouse"), name: s("Warehouse & Logistics"), color: s("#3f6fe0") },
        Industry { id: s("retail"), name: s("Retail"), color: s("#3fa35f") },
        Industry { id: s("events"), name: s("Events & Staffing"), color: s("#a03fe0") },
        Industry { id: s("office"), name: s("Office & Admin"), color: s("#5f6b7a") },
    ]
}

pub(super) fn roles() -> Vec<Role> {
    let role = |slug: &str,
                title: &str,
                industry: &str,
                min: f64,
                max: f64,
                entry_level: bool,
                search_volume: SearchVolume,
                description: &str,
                short: &str| Role {
        slug: s(slug),
        title: s(title),
        industry: s(industry),
        avg_hourly_rate: WageRange::new(min, max),
        entry_level,
        search_volume,
        description: s(description),
        short_description: s(short),
    };

    vec![
        role(
            "bartender", "Bartender", "hospitality", 12.0, 28.0, false, SearchVolume::High,
            "Bartenders mix and serve drinks, manage the bar inventory, and keep service moving during rush hours. Tips typically double the base rate at busy venues.",
            "Mix and serve drinks; tips often double base pay.",
        ),
        role(
            "server", "Server", "hospitality", 10.0, 22.0, true, SearchVolume::High,
            "Servers take orders, deliver food, and handle payment at restaurants and event venues. Most shifts are evenings and weekends.",
            "Take orders and serve tables at restaurants and events.",
        ),
        role(
            "barista", "Barista", "hospitality", 11.0, 18.0, true, SearchVolume::Medium,
            "Baristas prepare espresso drinks and handle the counter at cafes. Early mornings, fast pace, lots of regulars.",
            "Prepare coffee drinks and run the cafe counter.",
        ),
        role(
            "line-cook", "Line Cook", "hospitality", 14.0, 22.0, false, SearchVolume::Medium,
            "Line cooks work a station in a commercial kitchen, prepping and firing dishes to order. Physical, hot, and skill-building.",
            "Prep and cook to order on a kitchen station.",
        ),
        role(
            "warehouse-clerk", "Warehouse Clerk", "warehouse", 15.0, 21.0, true, SearchVolume::High,
            "Warehouse clerks pick, pack, and stage orders, scan inventory, and keep the floor organized. Steady daytime and overnight shifts available.",
            "Pick, pack, and stage orders on the warehouse floor.",
        ),
        role(
            "forklift-operator", "Forklift Operator", "warehouse", 17.0, 25.0, false, SearchVolume::High,
            "Forklift operators move palletized freight, load trailers, and stage inventory. Certification required; certified operators earn a premium over general warehouse rates.",
            "Move palletized freight; certification earns a premium.",
        ),
        role(
            "package-handler", "Package Handler", "warehouse", 14.0, 19.0, true, SearchVolume::Medium,
            "Package handlers sort, load, and unload parcels at distribution hubs. Short intense shifts, often early morning or overnight.",
            "Sort and load parcels at distribution hubs.",
        ),
        role(
            "delivery-driver", "Delivery Driver", "warehouse", 16.0, 24.0, true, SearchVolume::High,
            "Delivery drivers run local routes in a company vehicle or their own car. Pay varies with route density and tips.",
            "Run local delivery routes; pay varies with route density.",
        ),
        role(
            "retail-associate", "Retail Associate", "retail", 12.0, 18.0, true, SearchVolume::High,
            "Retail associates help customers, stock shelves, and work the register. The most widely available entry-level job in most metros.",
            "Help customers, stock, and run the register.",
        ),
        role(
            "cashier", "Cashier", "retail", 11.0, 16.0, true, SearchVolume::Medium,
            "Cashiers handle checkout, returns, and front-of-store questions. Predictable tasks and schedules make it a common first job.",
            "Handle checkout and returns at the front of store.",
        ),
        role(
            "stock-associate", "Stock Associate", "retail", 13.0, 18.0, true, SearchVolume::Low,
            "Stock associates receive freight, work backroom inventory, and replenish the floor, often before opening hours.",
            "Receive freight and replenish the sales floor.",
        ),
        role(
            "event-staff", "Event Staff", "events", 13.0, 20.0, true, SearchVolume::Medium,
            "Event staff handle check-in, ushering, setup, and teardown at concerts, games, and conferences. Gig-style scheduling around events you pick.",
            "Work check-in, ushering, and setup at live events.",
        ),
        role(
            "brand-ambassador", "Brand Ambassador", "events", 15.0, 25.0, true, SearchVolume::Low,
            "Brand ambassadors run product demos and sampling activations. Outgoing work with premium hourly rates and irregular hours.",
            "Run product demos and sampling activations.",
        ),
        role(
            "data-entry-clerk", "Data Entry Clerk", "office", 14.0, 19.0, true, SearchVolume::Low,
            "Data entry clerks key records, verify documents, and maintain spreadsheets. Quiet, seated work, sometimes remote.",
            "Key records and maintain spreadsheets, often remote.",
        ),
        role(
            "receptionist", "Receptionist", "office", 14.0, 20.0, true, SearchVolume::Medium,
            "Receptionists greet visitors, route calls, and keep the front desk running. A common bridge into office careers.",
            "Greet visitors and keep the front desk running.",
        ),
    ]
}

pub(super) fn cities() -> Vec<City> {
    let city = |slug: &str, name: &str, state: &str, min: f64, max: f64, sv: SearchVolume| City {
        slug: s(slug),
        city: s(name),
        state_code: s(state),
        avg_hourly_wage: WageRange::new(min, max),
        search_volume: sv,
        enrichment: None,
    };
    let enriched = |mut c: City, employers: &[&str], transit: &str| {
        c.enrichment = Some(CityEnrichment {
            top_employers: vs(employers),
            transit_note: s(transit),
        });
        c
    };

    vec![
        // Austin deliberately carries neither a high tier nor enrichment:
        // its role pages render on request but stay out of the sitemap.
        city("austin", "Austin", "TX", 14.0, 22.0, SearchVolume::Medium),
        city("dallas", "Dallas", "TX", 14.0, 23.0, SearchVolume::High),
        enriched(
            city("houston", "Houston", "TX", 13.0, 22.0, SearchVolume::Medium),
            &["Port of Houston operators", "Texas Medical Center", "Grocery distribution hubs"],
            "METRO bus lines reach most distribution corridors; park-and-rides serve the suburbs.",
        ),
        city("phoenix", "Phoenix", "AZ", 14.0, 21.0, SearchVolume::Low),
        city("denver", "Denver", "CO", 16.0, 25.0, SearchVolume::High),
        enriched(
            city("chicago", "Chicago", "IL", 15.0, 24.0, SearchVolume::High),
            &["O'Hare logistics parks", "McCormick Place events", "Magnificent Mile retail"],
            "The L covers downtown and both airports; Metra serves suburban warehouse belts.",
        ),
        city("atlanta", "Atlanta", "GA", 13.0, 21.0, SearchVolume::Medium),
        enriched(
            city("miami", "Miami", "FL", 13.0, 22.0, SearchVolume::Medium),
            &["PortMiami cruise terminals", "Wynwood hospitality", "Doral distribution centers"],
            "Metrorail and trolleys cover the core; most warehouse work needs a car.",
        ),
        city("seattle", "Seattle", "WA", 17.0, 26.0, SearchVolume::Low),
        city("nashville", "Nashville", "TN", 13.0, 21.0, SearchVolume::High),
        enriched(
            city("las-vegas", "Las Vegas", "NV", 14.0, 26.0, SearchVolume::Medium),
            &["Strip resorts and casinos", "Convention center contractors", "Allegiant Stadium events"],
            "The Deuce runs the Strip 24/7; most hospitality shifts are transit-reachable.",
        ),
        city("charlotte", "Charlotte", "NC", 13.0, 20.0, SearchVolume::Low),
    ]
}

pub(super) fn guides() -> Vec<Guide> {
    let guide = |slug: &str, title: &str, category: &str, description: &str, body: &str, icon: IconKind| Guide {
        slug: s(slug),
        title: s(title),
        category: s(category),
        description: s(description),
        body: s(body),
        icon,
    };

    vec![
        guide(
            "first-day-checklist", "Your First Day: A Checklist", "getting-started",
            "Everything to bring, wear, and know before your first shift.",
            "# Your First Day\n\nShow up fifteen minutes early. Bring two forms of ID for I-9 verification,\nyour bank details for direct deposit, and any certifications the posting asked for.\n\n## What to wear\n\nWhen in doubt: closed-toe shoes, no logos, layers. Warehouse and kitchen roles\nhave specific safety requirements your recruiter will confirm.\n\n## Who to find\n\nYour shift lead checks you in. If nobody meets you at the door, ask for the\nsupervisor named in your confirmation message.",
            IconKind::Document,
        ),
        guide(
            "getting-paid-faster", "Getting Paid Faster", "pay",
            "How pay schedules, instant pay, and direct deposit actually work.",
            "# Getting Paid Faster\n\nMost staffing shifts pay weekly. Two things speed that up:\n\n1. **Direct deposit** set up before your first shift — paper checks add days.\n2. **Instant pay** where offered, which advances a portion of earned wages for a small fee.\n\n## Watch the cutoffs\n\nHours approved after the weekly cutoff roll to the next cycle. Submit\ntimesheets the same day you work.",
            IconKind::Clock,
        ),
        guide(
            "shift-work-101", "Shift Work 101", "getting-started",
            "Reading shift postings, swap rules, and no-show policies.",
            "# Shift Work 101\n\nA posting lists the venue, the block of hours, the rate, and any gear\nrequirements. Claiming a shift is a commitment — repeated no-shows lower\nyour priority for future postings.\n\n## Swaps and cancels\n\nMost platforms let you release a shift up to a cutoff (commonly 24 hours)\nwithout penalty. Inside the window, find a swap or contact support.",
            IconKind::Calendar,
        ),
        guide(
            "resume-basics", "Resume Basics for Hourly Work", "job-search",
            "A one-page format that gets read by busy hiring managers.",
            "# Resume Basics\n\nHourly hiring managers skim. One page, reverse-chronological, with\navailability stated up front.\n\n## The three lines that matter\n\n- A headline with the role you want\n- Your availability window\n- Certifications (food handler, forklift, TIPS) near the top",
            IconKind::Document,
        ),
        guide(
            "interview-prep", "Interview Prep in 20 Minutes", "job-search",
            "The five questions hourly interviews actually ask.",
            "# Interview Prep\n\nHourly interviews are short and practical. Prepare answers for:\n\n1. What's your availability?\n2. How do you get to work?\n3. Tell me about a busy shift you handled.\n4. Why this role?\n5. When can you start?\n\nBring your ID and certifications — some venues hire on the spot.",
            IconKind::Briefcase,
        ),
        guide(
            "w2-vs-1099", "W-2 vs 1099: What It Means for You", "pay",
            "Employment classification in plain language — taxes, benefits, and protections.",
            "# W-2 vs 1099\n\nW-2 workers have taxes withheld and are covered by minimum wage and\novertime law. 1099 contractors handle their own taxes and quarterly\nestimates.\n\n## Rule of thumb\n\nIf the platform sets your schedule and supervises the work, expect W-2.\nKeep every pay stub either way.",
            IconKind::ChartBar,
        ),
        guide(
            "certifications-overview", "Certifications That Raise Your Rate", "job-search",
            "Food handler, TIPS, forklift, OSHA-10: cost, time, and payoff.",
            "# Certifications That Raise Your Rate\n\n| Certification | Typical cost | Time | Unlocks |\n|---|---|---|---|\n| Food handler card | $10–15 | 2 hrs | Kitchen and counter roles |\n| TIPS / alcohol service | $40 | 4 hrs | Bartending, serving |\n| Forklift operator | $60–150 | 1 day | Certified warehouse rates |\n| OSHA-10 | $25–90 | 10 hrs | Site and event safety roles |\n\nForklift certification has the fastest payback: the rate premium usually\ncovers the course within two shifts.",
            IconKind::GraduationCap,
        ),
        guide(
            "side-gig-taxes", "Side Gig Taxes Without the Panic", "pay",
            "Quarterly estimates, deductions, and records for supplemental income.",
            "# Side Gig Taxes\n\nIf you earn 1099 income, set aside 25–30% and pay quarterly estimates.\nTrack mileage and gear purchases — both are commonly deductible.\n\nThis guide is general information, not tax advice; the numbers that matter\nare on your own forms.",
            IconKind::Calculator,
        ),
    ]
}

pub(super) fn persona_hubs() -> Vec<PersonaHub> {
    vec![
        PersonaHub {
            slug: s("students"),
            title: s("Flexible Work for Students"),
            headline: s("Earn around your class schedule, not instead of it."),
            pain_points: vs(&[
                "Class schedules change every semester",
                "Exam weeks need zero shifts",
                "No car on campus",
            ]),
            solutions: vs(&[
                "Claim individual shifts instead of committing to fixed weekly hours",
                "Release shifts before cutoff during exam crunch",
                "Filter postings by transit-reachable venues",
            ]),
            quick_tips: vs(&[
                "Stack Friday–Sunday event shifts for the best hourly rates",
                "Get a food handler card — it opens the most campus-adjacent roles",
            ]),
            recommended_tools: vs(&["shift-pay-calculator", "availability-planner"]),
            // "first-job-interview-guide" is stale — the guide was folded into
            // interview-prep. The composer drops it; check reports it.
            related_guides: vs(&["interview-prep", "resume-basics", "first-job-interview-guide", "shift-work-101"]),
            resume_templates: vs(&["skills-first", "compact-one-page"]),
            cover_letter_templates: vs(&["friendly-direct"]),
            suggested_roles: vs(&["barista", "event-staff", "retail-associate", "server"]),
            faqs: vec![
                Faq::new(
                    "Can I work only during breaks?",
                    "Yes. There is no minimum weekly commitment; claim shifts only for the weeks you want to work.",
                ),
                Faq::new(
                    "Do I need experience?",
                    "Most suggested roles here are entry-level. Event staff and retail postings rarely require prior experience.",
                ),
            ],
        },
        PersonaHub {
            slug: s("parents"),
            title: s("Shifts That Fit School Hours"),
            headline: s("Work 9-to-2 while the kids are in class."),
            pain_points: vs(&[
                "Only free between drop-off and pickup",
                "School holidays wreck fixed schedules",
                "Need pay that arrives weekly",
            ]),
            solutions: vs(&[
                "Daytime warehouse and retail blocks run 9am–2pm in most metros",
                "Skip claiming shifts during school breaks with no penalty",
                "Weekly pay with optional instant pay on earned wages",
            ]),
            quick_tips: vs(&[
                "Morning stocking shifts end before school pickup",
                "Data entry work can often be done remotely",
            ]),
            recommended_tools: vs(&["take-home-pay-estimator", "commute-cost-calculator"]),
            related_guides: vs(&["getting-paid-faster", "shift-work-101"]),
            resume_templates: vs(&["clean-classic"]),
            cover_letter_templates: vs(&["career-changer", "formal-standard"]),
            suggested_roles: vs(&["stock-associate", "data-entry-clerk", "cashier", "receptionist"]),
            faqs: vec![Faq::new(
                "What happens if a kid gets sick?",
                "Release the shift before the cutoff window and it goes back to the pool without penalty.",
            )],
        },
        PersonaHub {
            slug: s("retirees"),
            title: s("Part-Time Work in Retirement"),
            headline: s("A few shifts a week, on your terms."),
            pain_points: vs(&[
                "Full-time schedules are off the table",
                "Physically demanding roles are a concern",
                "Social Security earnings limits need watching",
            ]),
            solutions: vs(&[
                "Claim two or three shifts a week with no escalating commitment",
                "Reception, cashier, and event check-in roles are low-impact",
                "Weekly pay stubs make earnings tracking simple",
            ]),
            quick_tips: vs(&["Event ushering is seated for most of the shift"]),
            recommended_tools: vs(&["take-home-pay-estimator"]),
            related_guides: vs(&["w2-vs-1099", "first-day-checklist"]),
            resume_templates: vs(&["clean-classic"]),
            cover_letter_templates: vs(&["formal-standard"]),
            suggested_roles: vs(&["receptionist", "event-staff", "cashier"]),
            faqs: vec![Faq::new(
                "Will this affect my Social Security?",
                "Earnings limits depend on your age and filing status. Your weekly pay stubs give you exact numbers to check against the current thresholds.",
            )],
        },
        PersonaHub {
            slug: s("gig-workers"),
            title: s("Stack Shifts With Your Gig Work"),
            headline: s("Fill the gaps between rideshare and delivery blocks."),
            pain_points: vs(&[
                "Gig demand is feast or famine",
                "1099 income complicates taxes",
                "No benefits accrue from app work",
            ]),
            solutions: vs(&[
                "W-2 staffing shifts between gig peaks smooth out weekly income",
                "Warehouse and event work pays premium rates on the days gig demand dips",
            ]),
            quick_tips: vs(&[
                "Tuesday–Thursday warehouse shifts complement weekend gig peaks",
                "Keep W-2 and 1099 records separate from day one",
            ]),
            recommended_tools: vs(&["take-home-pay-estimator", "shift-pay-calculator"]),
            related_guides: vs(&["w2-vs-1099", "side-gig-taxes", "getting-paid-faster"]),
            resume_templates: vs(&["skills-first"]),
            cover_letter_templates: vs(&["friendly-direct"]),
            suggested_roles: vs(&["package-handler", "delivery-driver", "event-staff", "forklift-operator"]),
            faqs: vec![Faq::new(
                "Can I do both in the same week?",
                "Yes. Staffing shifts are claimed individually, so you can schedule them around your app blocks.",
            )],
        },
    ]
}

pub(super) fn seasons() -> Vec<Season> {
    vec![
        Season {
            slug: s("summer"),
            name: s("Summer Hiring Season"),
            industries: vs(&["hospitality", "events"]),
            months: vec![5, 6, 7, 8],
            demand_level: DemandLevel::High,
            avg_pay_increase: s("10–20%"),
            hiring_timeline: s("Postings open in March; peak onboarding is mid-May."),
            tips: vs(&[
                "Apply in March and April before the student wave",
                "Outdoor venues pay heat premiums in the Southwest",
            ]),
            icon: IconKind::Sun,
        },
        Season {
            slug: s("holiday"),
            name: s("Holiday Rush"),
            industries: vs(&["retail", "warehouse"]),
            months: vec![10, 11, 12],
            demand_level: DemandLevel::Extreme,
            avg_pay_increase: s("15–25%"),
            hiring_timeline: s("Warehouse ramp starts in September; retail floors staff up by early November."),
            tips: vs(&[
                "Overnight sort shifts carry the largest differentials",
                "Strong holiday performance is the most common route to a permanent offer",
            ]),
            icon: IconKind::Snowflake,
        },
        Season {
            slug: s("spring-events"),
            name: s("Spring Event Season"),
            industries: vs(&["events", "hospitality"]),
            months: vec![3, 4, 5],
            demand_level: DemandLevel::High,
            avg_pay_increase: s("10–15%"),
            hiring_timeline: s("Festival and conference staffing posts 4–6 weeks before each event."),
            tips: vs(&["Multi-day festivals often bundle shifts — claim the whole run for guaranteed hours"]),
            icon: IconKind::Leaf,
        },
        Season {
            slug: s("back-to-school"),
            name: s("Back-to-School Season"),
            industries: vs(&["retail", "warehouse"]),
            months: vec![7, 8],
            demand_level: DemandLevel::Moderate,
            avg_pay_increase: s("5–10%"),
            hiring_timeline: s("Stocking and fulfillment shifts spike from mid-July through late August."),
            tips: vs(&["Early-morning replenishment shifts end before noon"]),
            icon: IconKind::Calendar,
        },
    ]
}

pub(super) fn seasonal_events() -> Vec<SeasonalEvent> {
    vec![
        SeasonalEvent {
            slug: s("austin-music-week"),
            name: s("Austin Music Week"),
            date: s("2026-03-13"),
            industries: vs(&["events", "hospitality"]),
            demand_level: DemandLevel::Extreme,
            cities: vs(&["austin"]),
            tips: vs(&[
                "Venue staff and bartending shifts post in January and fill fast",
                "Downtown parking is impossible — plan transit before claiming",
            ]),
        },
        SeasonalEvent {
            slug: s("spring-marathon-weekend"),
            name: s("Spring Marathon Weekend"),
            date: s("2026-04-26"),
            industries: vs(&["events"]),
            demand_level: DemandLevel::High,
            cities: vs(&["chicago", "denver"]),
            tips: vs(&["Water-station and check-in shifts start before dawn; gear-check runs all day"]),
        },
        SeasonalEvent {
            slug: s("holiday-pop-up-markets"),
            name: s("Holiday Pop-Up Markets"),
            date: s("2026-11-27"),
            industries: vs(&["retail", "events"]),
            demand_level: DemandLevel::High,
            cities: vec![],
            tips: vs(&["Markets run Thanksgiving through New Year's in most metros — recurring weekend work"]),
        },
    ]
}

pub(super) fn career_evaluations() -> Vec<CareerEvaluation> {
    vec![
        CareerEvaluation {
            role_slug: s("forklift-operator"),
            verdict: Verdict::Good,
            scores: EvaluationScores {
                pay: 8,
                flexibility: 6,
                growth: 7,
                stability: 8,
                entry_ease: 5,
                work_life_balance: 6,
                physical_demand: 5,
                social_interaction: 4,
            },
            overall_score: 6.1,
            pros: vs(&[
                "Certification premium over general warehouse rates",
                "Steady year-round demand with a holiday spike",
                "Clear path to lead and supervisor roles",
            ]),
            cons: vs(&[
                "Certification course required before your first shift",
                "Repetitive solo work for most of the day",
            ]),
            best_for: vs(&["People who like working independently", "Anyone planning a logistics career"]),
            worst_for: vs(&["People who want customer-facing variety"]),
            alternative_roles: vs(&["warehouse-clerk", "package-handler", "delivery-driver"]),
        },
        CareerEvaluation {
            role_slug: s("bartender"),
            verdict: Verdict::Excellent,
            scores: EvaluationScores {
                pay: 9,
                flexibility: 8,
                growth: 6,
                stability: 6,
                entry_ease: 4,
                work_life_balance: 5,
                physical_demand: 6,
                social_interaction: 10,
            },
            overall_score: 6.8,
            pros: vs(&[
                "Tips frequently double the base rate",
                "High-demand skill that travels to any city",
                "Pick venues and nights that fit your life",
            ]),
            cons: vs(&["Late nights and weekends", "Alcohol-service certification needed in most states"]),
            best_for: vs(&["Night owls", "People who thrive on conversation"]),
            worst_for: vs(&["Early risers", "Anyone avoiding alcohol environments"]),
            alternative_roles: vs(&["server", "barista", "event-staff"]),
        },
        CareerEvaluation {
            role_slug: s("warehouse-clerk"),
            verdict: Verdict::Good,
            scores: EvaluationScores {
                pay: 6,
                flexibility: 7,
                growth: 6,
                stability: 8,
                entry_ease: 9,
                work_life_balance: 7,
                physical_demand: 4,
                social_interaction: 4,
            },
            overall_score: 6.4,
            pros: vs(&[
                "No experience required — the fastest onboarding in the catalog",
                "Day, evening, and overnight blocks in every metro",
            ]),
            cons: vs(&["On your feet the whole shift", "Rates trail certified roles"]),
            best_for: vs(&["First-time workers", "Anyone who wants predictable tasks"]),
            worst_for: vs(&["People who need seated work"]),
            alternative_roles: vs(&["package-handler", "stock-associate", "forklift-operator"]),
        },
        CareerEvaluation {
            role_slug: s("retail-associate"),
            verdict: Verdict::Depends,
            scores: EvaluationScores {
                pay: 4,
                flexibility: 7,
                growth: 5,
                stability: 6,
                entry_ease: 9,
                work_life_balance: 6,
                physical_demand: 5,
                social_interaction: 8,
            },
            overall_score: 6.3,
            pros: vs(&["Openings everywhere, year-round", "Customer-facing experience transfers widely"]),
            cons: vs(&["Lowest pay band in the catalog", "Weekend and holiday scheduling pressure"]),
            best_for: vs(&["People who enjoy helping customers", "Anyone building a first resume"]),
            worst_for: vs(&["People optimizing purely for rate"]),
            alternative_roles: vs(&["cashier", "stock-associate", "event-staff"]),
        },
    ]
}

pub(super) fn resume_templates() -> Vec<ResumeTemplate> {
    vec![
        ResumeTemplate {
            slug: s("clean-classic"),
            name: s("Clean Classic"),
            description: s("A traditional single-column layout that reads well on paper and in applicant systems."),
            target_roles: vs(&["Receptionist", "Data Entry Clerk", "Cashier"]),
            layout: s("single-column"),
        },
        ResumeTemplate {
            slug: s("bold-modern"),
            name: s("Bold Modern"),
            description: s("A two-column layout with a strong headline — suited to customer-facing roles."),
            target_roles: vs(&["Bartender", "Server", "Brand Ambassador"]),
            layout: s("two-column"),
        },
        ResumeTemplate {
            slug: s("skills-first"),
            name: s("Skills First"),
            description: s("Leads with certifications and skills instead of work history — ideal with limited experience."),
            target_roles: vs(&["Warehouse Clerk", "Forklift Operator", "Package Handler"]),
            layout: s("skills-top"),
        },
        ResumeTemplate {
            slug: s("compact-one-page"),
            name: s("Compact One-Page"),
            description: s("Maximum density for people with short histories: students, first jobs, career changers."),
            target_roles: vs(&["Retail Associate", "Event Staff", "Barista"]),
            layout: s("compact"),
        },
    ]
}

pub(super) fn cover_letter_templates() -> Vec<CoverLetterTemplate> {
    vec![
        CoverLetterTemplate {
            slug: s("friendly-direct"),
            name: s("Friendly & Direct"),
            description: s("Three short paragraphs in a conversational register — availability up front."),
            target_roles: vs(&["Server", "Barista", "Event Staff", "Retail Associate"]),
            tone: s("conversational"),
        },
        CoverLetterTemplate {
            slug: s("formal-standard"),
            name: s("Formal Standard"),
            description: s("A conventional business letter for office and front-desk roles."),
            target_roles: vs(&["Receptionist", "Data Entry Clerk"]),
            tone: s("formal"),
        },
        CoverLetterTemplate {
            slug: s("career-changer"),
            name: s("Career Changer"),
            description: s("Frames transferable skills for people moving into a new line of work."),
            target_roles: vs(&["Warehouse Clerk", "Delivery Driver", "Forklift Operator"]),
            tone: s("narrative"),
        },
    ]
}

pub(super) fn resume_examples() -> Vec<ResumeExample> {
    let example = |slug: &str, role_name: &str, summary: &str, highlights: &[&str]| ResumeExample {
        slug: s(slug),
        role_name: s(role_name),
        summary: s(summary),
        highlights: vs(highlights),
    };

    vec![
        example(
            "warehouse-clerk-first-job", "Warehouse Clerk",
            "A first-job resume built around reliability signals instead of history.",
            &["Availability window stated in the headline", "Forklift coursework listed under certifications"],
        ),
        example(
            "bartender-experienced", "Bartender",
            "An experienced bartender resume emphasizing volume and certifications.",
            &["Drinks-per-hour volume quantified", "TIPS certification above work history"],
        ),
        example(
            "retail-associate-student", "Retail Associate",
            "A student resume that turns campus activities into customer-service evidence.",
            &["Club treasurer role framed as cash handling"],
        ),
        example(
            "forklift-operator-certified", "Forklift Operator",
            "A certified operator resume that leads with equipment classes and safety record.",
            &["Class I–III equipment listed explicitly", "Zero-incident record quantified"],
        ),
        example(
            "barista-career-change", "Barista",
            "A career-change resume mapping office skills onto cafe pace and service.",
            &["Customer-facing metrics pulled from a support role"],
        ),
    ]
}

pub(super) fn tools() -> Vec<Tool> {
    let tool = |slug: &str, name: &str, description: &str, kind: ToolKind, icon: IconKind| Tool {
        slug: s(slug),
        name: s(name),
        description: s(description),
        tool_kind: kind,
        icon,
    };

    vec![
        tool(
            "shift-pay-calculator", "Shift Pay Calculator",
            "Estimate total pay for a shift from rate, hours, and expected tips.",
            ToolKind::Calculator, IconKind::Calculator,
        ),
        tool(
            "take-home-pay-estimator", "Take-Home Pay Estimator",
            "See what lands in your account after withholding, by state.",
            ToolKind::Calculator, IconKind::ChartBar,
        ),
        tool(
            "commute-cost-calculator", "Commute Cost Calculator",
            "Compare driving, transit, and rideshare costs against a shift's pay.",
            ToolKind::Calculator, IconKind::Truck,
        ),
        tool(
            "tip-income-calculator", "Tip Income Calculator",
            "Project weekly tip income from venue type and shift mix.",
            ToolKind::Calculator, IconKind::Calculator,
        ),
        tool(
            "availability-planner", "Availability Planner",
            "Build a weekly availability grid you can paste into applications.",
            ToolKind::Checklist, IconKind::Calendar,
        ),
        tool(
            "job-fit-quiz", "Job Fit Quiz",
            "Ten questions that map your preferences to role suggestions.",
            ToolKind::Quiz, IconKind::Briefcase,
        ),
    ]
}

/// The single supported wage-report year.
pub const WAGE_REPORT_YEAR: u16 = 2026;

pub(super) fn wage_report() -> WageReport {
    let occ = |slug: &str, percentiles: [f64; 5], yoy: f64| OccupationWage {
        occupation_slug: s(slug),
        percentiles,
        yoy_change: yoy,
    };

    let occupations = vec![
        occ("bartender", [10.5, 12.0, 16.5, 22.0, 28.0], 0.041),
        occ("server", [9.0, 10.5, 14.0, 18.5, 22.0], 0.035),
        occ("barista", [10.0, 11.5, 13.5, 16.0, 18.0], 0.028),
        occ("line-cook", [13.0, 14.5, 17.5, 20.0, 22.5], 0.052),
        occ("warehouse-clerk", [13.5, 15.0, 17.5, 19.5, 21.0], 0.038),
        occ("forklift-operator", [15.5, 17.0, 20.5, 23.0, 25.5], 0.046),
        occ("package-handler", [13.0, 14.0, 16.0, 17.5, 19.0], 0.031),
        occ("delivery-driver", [14.5, 16.0, 19.5, 22.0, 24.5], 0.044),
        occ("retail-associate", [11.0, 12.0, 14.5, 16.5, 18.0], 0.022),
        occ("cashier", [10.5, 11.5, 13.0, 14.5, 16.0], 0.019),
        occ("stock-associate", [12.0, 13.0, 15.0, 16.5, 18.0], 0.027),
        occ("event-staff", [12.0, 13.5, 16.0, 18.5, 20.5], 0.049),
        occ("brand-ambassador", [14.0, 15.5, 19.5, 22.5, 25.0], 0.033),
        occ("data-entry-clerk", [13.0, 14.0, 16.0, 17.5, 19.0], 0.015),
        occ("receptionist", [13.0, 14.5, 16.5, 18.5, 20.0], 0.024),
    ];

    let industries = vec![
        IndustryWage { industry_slug: s("hospitality"), wage_growth: 0.039 },
        IndustryWage { industry_slug: s("warehouse"), wage_growth: 0.040 },
        IndustryWage { industry_slug: s("retail"), wage_growth: 0.023 },
        IndustryWage { industry_slug: s("events"), wage_growth: 0.043 },
        IndustryWage { industry_slug: s("office"), wage_growth: 0.020 },
    ];

    let regions = vec![
        RegionWage { region: s("South"), median_hourly: 15.5 },
        RegionWage { region: s("West"), median_hourly: 18.0 },
        RegionWage { region: s("Midwest"), median_hourly: 16.5 },
        RegionWage { region: s("Northeast"), median_hourly: 17.5 },
    ];

    let summary = WageReportSummary {
        total_occupations: occupations.len(),
        median_hourly: 16.5,
        median_yoy_change: 0.033,
    };

    WageReport {
        year: WAGE_REPORT_YEAR,
        occupations,
        industries,
        regions,
        summary,
    }
}
