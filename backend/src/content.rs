// Fixed rows written by the seeding tool.
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
    pub sort_order: i32,
}

#[derive(Debug, Serialize)]
pub struct PricingTier {
    pub slug: &'static str,
    pub service_slug: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub currency: &'static str,
    pub billing_period: &'static str,
    pub features: Vec<&'static str>,
    pub highlighted: bool,
    pub sort_order: i32,
}

#[derive(Debug, Serialize)]
pub struct Faq {
    pub slug: &'static str,
    pub page: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub sort_order: i32,
}

#[derive(Debug, Serialize)]
pub struct SiteSetting {
    pub key: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PricingPage {
    pub slug: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub baseline_cost: i64,
    pub roi_weights: Value,
}

/// One table upsert: target table, conflict column and the rows as JSON.
#[derive(Debug)]
pub struct TableSeed {
    pub table: &'static str,
    pub on_conflict: &'static str,
    pub rows: Value,
}

#[derive(Debug)]
pub struct SeedPlan {
    pub tables: Vec<TableSeed>,
}

impl SeedPlan {
    /// services, pricing_tiers, faqs, site_settings, pricing_pages, in that order
    pub fn standard() -> Result<Self, serde_json::Error> {
        Ok(SeedPlan {
            tables: vec![
                TableSeed { table: "services", on_conflict: "slug", rows: serde_json::to_value(services())? },
                TableSeed { table: "pricing_tiers", on_conflict: "slug", rows: serde_json::to_value(pricing_tiers())? },
                TableSeed { table: "faqs", on_conflict: "slug", rows: serde_json::to_value(faqs())? },
                TableSeed { table: "site_settings", on_conflict: "key", rows: serde_json::to_value(site_settings())? },
                TableSeed { table: "pricing_pages", on_conflict: "slug", rows: serde_json::to_value(pricing_pages())? },
            ],
        })
    }
}

pub fn services() -> Vec<Service> {
    vec![
        Service { slug: "ai-automation", title: "AI Automation", summary: "Chat agents, lead qualification and automated follow-ups.", icon: "bot", sort_order: 1 },
        Service { slug: "app-development", title: "App Development", summary: "Web and mobile apps built to scale.", icon: "smartphone", sort_order: 2 },
        Service { slug: "cloud-solutions", title: "Cloud Solutions", summary: "Migrations, cost tuning and managed infrastructure.", icon: "cloud", sort_order: 3 },
        Service { slug: "data-analysis", title: "Data Analysis", summary: "Dashboards, forecasting and lead scoring.", icon: "bar-chart", sort_order: 4 },
        Service { slug: "web-development", title: "Web Development", summary: "Fast marketing sites with fixed pricing.", icon: "globe", sort_order: 5 },
    ]
}

fn tier(
    slug: &'static str,
    service_slug: &'static str,
    name: &'static str,
    price: i64,
    billing_period: &'static str,
    features: Vec<&'static str>,
    highlighted: bool,
    sort_order: i32,
) -> PricingTier {
    PricingTier {
        slug,
        service_slug,
        name,
        price,
        currency: "MYR",
        billing_period,
        features,
        highlighted,
        sort_order,
    }
}

pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        tier("ai-starter", "ai-automation", "Starter Bot", 2_499, "one_time", vec!["Single channel agent", "Lead capture"], false, 1),
        tier("ai-growth", "ai-automation", "Growth Engine", 5_999, "one_time", vec!["Multi-channel agents", "CRM integration", "Follow-up sequences"], true, 2),
        tier("app-mvp", "app-development", "MVP", 9_999, "one_time", vec!["Up to 8 screens", "Auth and payments"], false, 1),
        tier("app-scale", "app-development", "Scale", 19_999, "one_time", vec!["Offline sync", "Admin dashboard", "CI/CD"], true, 2),
        tier("cloud-audit", "cloud-solutions", "Audit", 1_999, "one_time", vec!["Cost breakdown", "Security checklist"], false, 1),
        tier("cloud-managed", "cloud-solutions", "Managed", 2_500, "monthly", vec!["24/7 monitoring", "Monthly cost tuning"], true, 2),
        tier("data-snapshot", "data-analysis", "Snapshot", 3_499, "one_time", vec!["Data cleanup", "Sales dashboard"], false, 1),
        tier("data-insights", "data-analysis", "Insights", 7_999, "one_time", vec!["Forecasting", "Lead scoring"], true, 2),
        tier("web-landing", "web-development", "Landing Page", 1_499, "one_time", vec!["Single page", "Contact form"], false, 1),
        tier("web-business", "web-development", "Business Site", 4_999, "one_time", vec!["Up to 10 pages", "CMS", "Analytics"], true, 2),
        tier("web-ecommerce", "web-development", "E-commerce", 9_999, "one_time", vec!["Catalogue", "Payments", "Orders"], false, 3),
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq { slug: "general-timeline", page: "general", question: "How fast can you start?", answer: "Usually within two weeks of the discovery call.", sort_order: 1 },
        Faq { slug: "general-payment", page: "general", question: "How does payment work?", answer: "50% upfront and 50% on delivery.", sort_order: 2 },
        Faq { slug: "ai-channels", page: "ai-automation", question: "Which channels can the agent answer on?", answer: "WhatsApp, Instagram, Messenger and website chat.", sort_order: 1 },
        Faq { slug: "web-hosting", page: "web-development", question: "Is hosting included?", answer: "The first year of hosting and SSL is included.", sort_order: 1 },
        Faq { slug: "cloud-downtime", page: "cloud-solutions", question: "Will the migration cause downtime?", answer: "Cutovers are planned with a rollback path outside peak hours.", sort_order: 1 },
    ]
}

pub fn site_settings() -> Vec<SiteSetting> {
    vec![
        SiteSetting { key: "agency_name", value: "Nexa Digital" },
        SiteSetting { key: "contact_email", value: "hello@nexadigital.my" },
        SiteSetting { key: "booking_url", value: "https://cal.com/nexadigital/discovery-call" },
        SiteSetting { key: "currency", value: "MYR" },
    ]
}

pub fn pricing_pages() -> Vec<PricingPage> {
    vec![
        PricingPage {
            slug: "ai-automation",
            title: "AI Automation Pricing",
            headline: "Every lead answered in under a minute.",
            baseline_cost: 2_999,
            roi_weights: serde_json::json!({ "hours_saved": 194.85, "uplift": 0.35, "working_days": 26 }),
        },
        PricingPage {
            slug: "app-development",
            title: "App Development Pricing",
            headline: "From idea to app store in weeks.",
            baseline_cost: 8_999,
            roi_weights: serde_json::json!({ "apps_scaled": 6000, "hours_saved": 180, "downtime_reduced": 250 }),
        },
        PricingPage {
            slug: "cloud-solutions",
            title: "Cloud Solutions Pricing",
            headline: "Smaller bills. Fewer 3am pages.",
            baseline_cost: 5_999,
            roi_weights: serde_json::json!({ "cloud_cost_saved": 1, "downtime_reduced": 400, "apps_scaled": 1500 }),
        },
        PricingPage {
            slug: "data-analysis",
            title: "Data Analysis Pricing",
            headline: "Know which leads will close before you call them.",
            baseline_cost: 3_999,
            roi_weights: serde_json::json!({ "leads_analyzed": 2.5, "trend_lift": 600, "hours_saved": 180 }),
        },
        PricingPage {
            slug: "web-development",
            title: "Web Development Pricing",
            headline: "Websites with a price tag, not a quote request.",
            baseline_cost: 4_999,
            roi_weights: serde_json::json!({ "pages_built": 1800, "conversion_lift": 450, "ops_hours": 180 }),
        },
    ]
}
