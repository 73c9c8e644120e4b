//! Company name handling: normalization, convention rules and alternative generation

pub mod generator;
pub mod normalizer;
pub mod validator;
pub mod words;

// Re-export main functionality
pub use generator::AlternativeNameGenerator;
pub use normalizer::normalize;
pub use validator::ConventionValidator;

/// Registration suffixes stripped by [`normalize`], checked in this order.
pub const REGISTRATION_SUFFIXES: &[&str] = &[
    "pvt ltd", "private limited", "ltd", "limited", "pvt", "private",
];

/// Endings accepted by the convention rules (compared lower-cased).
pub const VALID_SUFFIXES: &[&str] = &[
    "pvt ltd", "private limited", "pvt. ltd.", "private limited.", "limited", "ltd", "ltd.",
];

/// Suffixes appended to generated alternatives.
pub const GENERATED_SUFFIXES: &[&str] = &["Private Limited", "Pvt Ltd"];

/// Case-insensitive similarity ratio between two names, 0-100.
///
/// Indel ratio over characters, `2 * lcs / (len_a + len_b) * 100`, rounded.
/// Symmetric, and 100 for equal inputs (including two empty strings).
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 100;
    }

    let ratio = rapidfuzz::fuzz::ratio(a.chars(), b.chars());
    ratio.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_reflexive() {
        for name in ["", "acme", "Acme Solutions Private Limited", "टाटा"] {
            assert_eq!(similarity(name, name), 100);
        }
    }

    #[test]
    fn test_similarity_symmetric() {
        let pairs = [
            ("acme solutions", "acme solution"),
            ("tata", "tata consultancy"),
            ("zeta", "omega labs"),
            ("", "anything"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{} / {}", a, b);
        }
    }

    #[test]
    fn test_similarity_case_insensitive() {
        assert_eq!(similarity("ACME Labs", "acme labs"), 100);
    }

    #[test]
    fn test_similarity_known_ratios() {
        // one dropped letter stays above the exact threshold
        assert_eq!(similarity("acme solutions", "acme solution"), 96);
        // one extra word stays above the similar threshold
        assert_eq!(similarity("acme solutions", "acme solutions india"), 82);
        assert_eq!(similarity("this is a test", "this is a test!"), 97);
        assert_eq!(similarity("abc", "xyz"), 0);
    }

    #[test]
    fn test_similarity_ordering() {
        let close = similarity("acme solutions", "acme solution");
        let far = similarity("acme solutions", "zenith holdings");
        assert!(close > 90);
        assert!(far < 50);
    }
}
