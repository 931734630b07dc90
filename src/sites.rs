//! Seed lists for each collection strategy.

/// Sites that render their corporate pages server-side.
pub const STATIC_SITES: &[&str] = &[
    "https://www.ikea.com/in/en/",
    "https://www.lvmh.com",
    "https://www.chanel.com",
    "https://www.hermes.com",
    "https://www.gucci.com",
    "https://www.pradagroup.com",
    "https://www.burberry.com",
    "https://www.rolex.com",
    "https://www.patek.com",
    "https://www.omega.com",
];

/// Sites that need a real browser to render.
pub const DYNAMIC_SITES: &[&str] = &[
    "https://www.gucci.com/int/en/nst/about-gucci",
    "https://in.burberry.com/",
];

pub const STATIC_OUTPUT: &str = "static_websites_data.csv";
pub const DYNAMIC_OUTPUT: &str = "dynamic_websites_data.csv";
pub const COMBINED_OUTPUT: &str = "final_result.csv";
