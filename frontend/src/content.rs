// Page copy and calculator tables. Kept as plain data so the pages stay thin.

use crate::roi::{RevenueBasis, RoiModel, SliderSpec, Unit, Weight};
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub target: f64,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceCard {
    pub route: Route,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
}

const WORKING_DAYS_PER_MONTH: f64 = 26.0;
const WEEKS_PER_MONTH: f64 = 4.33;

fn slider(
    id: &'static str,
    label: &'static str,
    (min, max, step): (f64, f64, f64),
    default: f64,
    unit: Unit,
) -> SliderSpec {
    SliderSpec { id, label, min, max, step, default, unit }
}

fn weight(input: &'static str, per_unit: f64) -> Weight {
    Weight { input, per_unit }
}

pub fn ai_automation_model() -> RoiModel {
    RoiModel {
        inputs: vec![
            slider("daily_leads", "Daily leads", (5.0, 200.0, 5.0), 30.0, Unit::Count),
            slider("close_rate", "Close rate", (1.0, 50.0, 1.0), 10.0, Unit::Percent),
            slider("avg_deal_value", "Average deal value", (100.0, 20_000.0, 100.0), 1_500.0, Unit::Currency),
            slider("hours_saved", "Hours saved per week", (1.0, 80.0, 1.0), 15.0, Unit::Hours),
        ],
        basis: Some(RevenueBasis {
            volume_input: "daily_leads",
            rate_input: "close_rate",
            unit_value_input: "avg_deal_value",
            periods: WORKING_DAYS_PER_MONTH,
            uplift: 0.35,
        }),
        // RM 45 an hour over a month of weeks
        weights: vec![weight("hours_saved", 45.0 * WEEKS_PER_MONTH)],
        baseline_cost: 2_999.0,
    }
}

pub fn app_development_model() -> RoiModel {
    RoiModel {
        inputs: vec![
            slider("apps_scaled", "Apps scaled per year", (1.0, 20.0, 1.0), 3.0, Unit::Count),
            slider("hours_saved", "Hours saved per week", (1.0, 80.0, 1.0), 20.0, Unit::Hours),
            slider("downtime_reduced", "Downtime reduced", (0.0, 200.0, 2.0), 24.0, Unit::Hours),
        ],
        basis: None,
        weights: vec![
            weight("apps_scaled", 6_000.0),
            weight("hours_saved", 180.0),
            weight("downtime_reduced", 250.0),
        ],
        baseline_cost: 8_999.0,
    }
}

pub fn cloud_solutions_model() -> RoiModel {
    RoiModel {
        inputs: vec![
            slider("cloud_cost_saved", "Cloud cost saved per year", (1_000.0, 100_000.0, 1_000.0), 12_000.0, Unit::Currency),
            slider("downtime_reduced", "Downtime reduced", (0.0, 200.0, 2.0), 36.0, Unit::Hours),
            slider("apps_scaled", "Apps scaled per year", (1.0, 20.0, 1.0), 2.0, Unit::Count),
        ],
        basis: None,
        weights: vec![
            weight("cloud_cost_saved", 1.0),
            weight("downtime_reduced", 400.0),
            weight("apps_scaled", 1_500.0),
        ],
        baseline_cost: 5_999.0,
    }
}

pub fn data_analysis_model() -> RoiModel {
    RoiModel {
        inputs: vec![
            slider("leads_analyzed", "Leads analyzed per month", (100.0, 10_000.0, 100.0), 1_000.0, Unit::Count),
            slider("trend_lift", "Revenue trend lift", (1.0, 50.0, 1.0), 8.0, Unit::Percent),
            slider("hours_saved", "Reporting hours saved per week", (1.0, 40.0, 1.0), 6.0, Unit::Hours),
        ],
        basis: None,
        weights: vec![
            weight("leads_analyzed", 2.5),
            weight("trend_lift", 600.0),
            weight("hours_saved", 180.0),
        ],
        baseline_cost: 3_999.0,
    }
}

pub fn web_pricing_model() -> RoiModel {
    RoiModel {
        inputs: vec![
            slider("pages_built", "Pages built", (1.0, 30.0, 1.0), 8.0, Unit::Count),
            slider("conversion_lift", "Conversion lift", (0.0, 100.0, 1.0), 20.0, Unit::Percent),
            slider("ops_hours", "Ops hours saved per month", (0.0, 100.0, 1.0), 30.0, Unit::Hours),
        ],
        basis: None,
        weights: vec![
            weight("pages_built", 1_800.0),
            weight("conversion_lift", 450.0),
            weight("ops_hours", 180.0),
        ],
        baseline_cost: 4_999.0,
    }
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        route: Route::AiAutomation,
        title: "AI Automation",
        summary: "Chat agents, lead qualification and follow-ups that run while you sleep.",
        icon: "🤖",
    },
    ServiceCard {
        route: Route::AppDevelopment,
        title: "App Development",
        summary: "Web and mobile apps built to ship fast and scale without rewrites.",
        icon: "📱",
    },
    ServiceCard {
        route: Route::CloudSolutions,
        title: "Cloud Solutions",
        summary: "Migrations, cost tuning and uptime you don't have to think about.",
        icon: "☁️",
    },
    ServiceCard {
        route: Route::DataAnalysis,
        title: "Data Analysis",
        summary: "Dashboards and forecasts that turn your CRM into decisions.",
        icon: "📊",
    },
    ServiceCard {
        route: Route::WebPricing,
        title: "Web Development",
        summary: "Fast marketing sites with clear pricing and no surprise invoices.",
        icon: "🌐",
    },
];

pub const HOME_STATS: &[Stat] = &[
    Stat { label: "Projects delivered", target: 120.0, prefix: "", suffix: "+" },
    Stat { label: "Client retention", target: 94.0, prefix: "", suffix: "%" },
    Stat { label: "Hours automated monthly", target: 8_500.0, prefix: "", suffix: "" },
];

pub const AUTOMATION_PREVIEW_STEPS: &[&str] = &[
    "New lead captured from WhatsApp",
    "Lead scored and qualified",
    "Follow-up sent in 40 seconds",
    "Meeting booked on your calendar",
];

pub const TERMINAL_COMMANDS: &[&str] = &[
    "npx create-app nexa-client --template mobile",
    "git commit -m \"feat: offline sync\"",
    "cargo test --release",
    "docker build -t nexa/api:latest .",
    "kubectl rollout status deploy/api",
    "deploy --env production",
];

pub const CLOUD_STATS: &[Stat] = &[
    Stat { label: "Average uptime", target: 99.9, prefix: "", suffix: "%" },
    Stat { label: "Average cloud bill cut", target: 38.0, prefix: "", suffix: "%" },
    Stat { label: "Workloads migrated", target: 260.0, prefix: "", suffix: "" },
];

pub const DATA_STATS: &[Stat] = &[
    Stat { label: "Rows processed daily", target: 4_200_000.0, prefix: "", suffix: "" },
    Stat { label: "Forecast accuracy", target: 91.0, prefix: "", suffix: "%" },
    Stat { label: "Dashboards live", target: 75.0, prefix: "", suffix: "" },
];

pub const AI_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter Bot",
        price: "RM 2,999",
        period: "one-time",
        blurb: "One channel, one workflow, live in a week.",
        features: &["WhatsApp or web chat agent", "Lead capture to Google Sheets", "30 days of tuning"],
        highlighted: false,
    },
    PricingTier {
        name: "Growth Engine",
        price: "RM 6,999",
        period: "one-time",
        blurb: "Qualification, follow-ups and booking on autopilot.",
        features: &["Multi-channel agents", "CRM integration", "Automated follow-up sequences", "Monthly performance review"],
        highlighted: true,
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        period: "",
        blurb: "Custom models and on-prem deployment.",
        features: &["Dedicated engineer", "SLA-backed support", "Private model hosting"],
        highlighted: false,
    },
];

pub const APP_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "MVP",
        price: "RM 8,999",
        period: "from",
        blurb: "A clickable, shippable first version.",
        features: &["Up to 8 screens", "Auth and payments", "App store submission"],
        highlighted: false,
    },
    PricingTier {
        name: "Scale",
        price: "RM 19,999",
        period: "from",
        blurb: "Production apps with real traffic.",
        features: &["Offline sync", "Admin dashboard", "CI/CD pipeline", "Load testing"],
        highlighted: true,
    },
    PricingTier {
        name: "Retainer",
        price: "RM 4,500",
        period: "/month",
        blurb: "A team on call for features and fixes.",
        features: &["40 engineering hours", "Priority bug fixes", "Quarterly roadmap"],
        highlighted: false,
    },
];

pub const CLOUD_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Audit",
        price: "RM 1,999",
        period: "one-time",
        blurb: "Find out where the bill goes.",
        features: &["Cost breakdown report", "Security checklist", "Action plan"],
        highlighted: false,
    },
    PricingTier {
        name: "Migration",
        price: "RM 5,999",
        period: "from",
        blurb: "Move to managed infrastructure without downtime.",
        features: &["Zero-downtime cutover", "Infrastructure as code", "Monitoring and alerts", "Rollback plan"],
        highlighted: true,
    },
    PricingTier {
        name: "Managed",
        price: "RM 2,500",
        period: "/month",
        blurb: "We keep it up, patched and cheap.",
        features: &["24/7 monitoring", "Monthly cost tuning", "Incident response"],
        highlighted: false,
    },
];

pub const DATA_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Snapshot",
        price: "RM 3,999",
        period: "one-time",
        blurb: "One dashboard from the data you already have.",
        features: &["Data cleanup", "Sales dashboard", "Handover session"],
        highlighted: false,
    },
    PricingTier {
        name: "Insights",
        price: "RM 7,999",
        period: "one-time",
        blurb: "Forecasts and lead scoring wired into your CRM.",
        features: &["Revenue forecasting", "Lead scoring model", "Weekly automated reports", "Data warehouse setup"],
        highlighted: true,
    },
    PricingTier {
        name: "Analyst on Demand",
        price: "RM 3,000",
        period: "/month",
        blurb: "Ongoing questions, answered with data.",
        features: &["20 analyst hours", "Ad-hoc reports", "Quarterly strategy review"],
        highlighted: false,
    },
];

pub const WEB_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Landing Page",
        price: "RM 1,499",
        period: "one-time",
        blurb: "One page that converts.",
        features: &["Single responsive page", "Contact form", "Basic SEO"],
        highlighted: false,
    },
    PricingTier {
        name: "Business Site",
        price: "RM 4,999",
        period: "one-time",
        blurb: "Up to ten pages with a CMS.",
        features: &["Up to 10 pages", "Content management", "Analytics setup", "Speed optimization"],
        highlighted: true,
    },
    PricingTier {
        name: "E-commerce",
        price: "RM 9,999",
        period: "from",
        blurb: "A store with payments and inventory.",
        features: &["Product catalogue", "Payment gateway", "Order management"],
        highlighted: false,
    },
];

pub const AI_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "ai-channels",
        question: "Which channels can the agent answer on?",
        answer: "WhatsApp, Instagram, Facebook Messenger and your website chat. Growth Engine covers all of them from one inbox.",
    },
    FaqEntry {
        id: "ai-handoff",
        question: "What happens when the bot can't answer?",
        answer: "It hands the conversation to a human on your team with the full transcript and a summary.",
    },
    FaqEntry {
        id: "ai-data",
        question: "Where is our customer data stored?",
        answer: "In your own accounts. We connect to your CRM and spreadsheets instead of copying data elsewhere.",
    },
];

pub const APP_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "app-timeline",
        question: "How long does an MVP take?",
        answer: "Most MVPs ship in six to eight weeks, depending on integrations.",
    },
    FaqEntry {
        id: "app-ownership",
        question: "Who owns the code?",
        answer: "You do. The repository is transferred to your organization at handover.",
    },
];

pub const CLOUD_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "cloud-providers",
        question: "Which providers do you work with?",
        answer: "AWS, Google Cloud and Azure, plus managed platforms like Vercel and Supabase.",
    },
    FaqEntry {
        id: "cloud-downtime",
        question: "Will the migration cause downtime?",
        answer: "We plan cutovers with a rollback path and schedule them outside your peak hours.",
    },
];

pub const DATA_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "data-sources",
        question: "What data sources can you connect?",
        answer: "Spreadsheets, CRMs, accounting tools and any database we can get read access to.",
    },
    FaqEntry {
        id: "data-skills",
        question: "Does my team need to know SQL?",
        answer: "No. Dashboards are point-and-click and reports arrive by email.",
    },
];

pub const WEB_FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "web-hosting",
        question: "Is hosting included?",
        answer: "The first year of hosting and SSL is included in every package.",
    },
    FaqEntry {
        id: "web-edits",
        question: "Can I edit the site myself?",
        answer: "Business Site and E-commerce include a CMS so you can change text and images without us.",
    },
    FaqEntry {
        id: "web-payment",
        question: "How does payment work?",
        answer: "50% to start, 50% at launch. Bank transfer and card are both fine.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn every_service_links_to_its_own_page() {
        let paths: Vec<String> = SERVICES.iter().map(|s| s.route.to_path()).collect();
        for (i, path) in paths.iter().enumerate() {
            assert!(!paths[..i].contains(path), "{} linked twice", path);
        }
        for service in SERVICES {
            assert!(
                !matches!(service.route, Route::Home | Route::Contact | Route::NotFound),
                "{} has no page",
                service.title
            );
        }
        assert_eq!(SERVICES[4].route, Route::WebPricing);
    }
}
