//! Word pools for assembling company names

/// Technology terms
pub const TECH_WORDS: &[&str] = &[
    "Technologies", "Systems", "Digital", "Cyber", "Data", "Cloud", "AI", "Tech",
];

/// Professional service terms
pub const SERVICE_WORDS: &[&str] = &[
    "Solutions", "Services", "Consulting", "Advisory", "Associates", "Partners",
];

/// Classic business terms
pub const BUSINESS_WORDS: &[&str] = &[
    "Enterprises", "Ventures", "Industries", "Corporation", "Group", "Holdings",
];

/// Startup-flavoured terms
pub const MODERN_WORDS: &[&str] = &[
    "Innovations", "Labs", "Hub", "Works", "Studio", "Forge", "Nexus",
];

/// Category pools, picked round-robin by index
pub const WORD_CATEGORIES: &[&[&str]] = &[TECH_WORDS, SERVICE_WORDS, BUSINESS_WORDS, MODERN_WORDS];

/// Optional boosters placed in front of a name (empty means none)
pub const PREFIXES: &[&str] = &[
    "", "Global ", "Smart ", "Prime ", "Elite ", "Neo ", "Pro ", "Meta ",
];

/// Business types used by synthetic registry entries
pub const BUSINESS_TYPES: &[&str] = &[
    "solutions", "systems", "services", "technologies", "enterprises",
    "consulting", "digital", "software", "innovations", "labs",
    "ventures", "industries", "corporation", "holdings", "group",
];

/// Cities used by synthetic registry entries
pub const CITIES: &[&str] = &["Delhi", "Mumbai", "Bangalore", "Chennai", "Hyderabad", "Pune"];

/// State codes used in synthetic registration ids
pub const STATE_CODES: &[&str] = &["DL", "MH", "KA"];

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_start = true;
    for c in word.chars() {
        if c.is_alphabetic() {
            if at_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_start = false;
        } else {
            out.push(c);
            at_start = true;
        }
    }
    out
}
