
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    ""  // Production URL
}

pub const AGENCY_NAME: &str = "Nexa Digital";

pub const CONTACT_EMAIL: &str = "hello@nexadigital.my";

/// Every "book a call" button points here.
pub const BOOKING_URL: &str = "https://cal.com/nexadigital/discovery-call";

pub const PAYMENT_INFO_URL: &str = "https://nexadigital.my/payment-information";

pub const CURRENCY_PREFIX: &str = "RM";
