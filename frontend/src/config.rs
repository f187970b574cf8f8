#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Payment endpoint when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

/// Set `STRIPE_PUBLISHABLE_KEY` at build time for live payments.
pub fn stripe_publishable_key() -> &'static str {
    option_env!("STRIPE_PUBLISHABLE_KEY").unwrap_or("pk_test_your_stripe_publishable_key_here")
}

pub const CONTACT_EMAIL: &str = "agarwal.jitendra9@gmail.com";
pub const CONTACT_PHONE: &str = "+91 7044216968";
