//! Expansion of common Colombian address abbreviations.

use std::sync::LazyLock;

use regex::Regex;

/// Abbreviation patterns in application order. Each token must stand alone
/// as a word; a trailing `.` is consumed with it.
static EXPANSIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\bcl\b\.?", "calle"),
        (r"\bcr\b\.?", "carrera"),
        (r"\bkr\b\.?", "carrera"),
        (r"\btv\b\.?", "transversal"),
        (r"\bav\b\.?", "avenida"),
        (r"\bdiag\b\.?", "diagonal"),
        (r"\bapto\b\.?", "apartamento"),
        (r"\bapt\b\.?", "apartamento"),
        (r"\bno\b\.?", "#"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("valid abbreviation regex"),
            replacement,
        )
    })
    .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Lowercases, trims, expands abbreviations, and collapses whitespace.
///
/// Total and idempotent: no expansion produces text another pattern matches.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    let mut normalized = address.trim().to_lowercase();
    for (pattern, replacement) in EXPANSIONS.iter() {
        if pattern.is_match(&normalized) {
            normalized = pattern.replace_all(&normalized, *replacement).into_owned();
        }
    }
    WHITESPACE
        .replace_all(&normalized, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_calle_with_dot() {
        assert_eq!(normalize_address("Cl. 4 #11-79"), "calle 4 #11-79");
    }

    #[test]
    fn expands_carrera_variants() {
        assert_eq!(normalize_address("Cr 27 # 45-10"), "carrera 27 # 45-10");
        assert_eq!(normalize_address("KR. 33"), "carrera 33");
    }

    #[test]
    fn expands_remaining_abbreviations() {
        assert_eq!(
            normalize_address("Tv. 93 Av. Quebradaseca Diag 15 Apto. 301"),
            "transversal 93 avenida quebradaseca diagonal 15 apartamento 301"
        );
        assert_eq!(normalize_address("apt 2"), "apartamento 2");
    }

    #[test]
    fn number_sign_abbreviation() {
        assert_eq!(normalize_address("Calle 45 No. 23-67"), "calle 45 # 23-67");
    }

    #[test]
    fn does_not_touch_tokens_inside_words() {
        assert_eq!(normalize_address("Clínica Chicamocha"), "clínica chicamocha");
        assert_eq!(normalize_address("Cabecera del Llano"), "cabecera del llano");
        assert_eq!(normalize_address("Norte"), "norte");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            normalize_address("  Calle   45 \t #23-67 ,\n Bucaramanga  "),
            "calle 45 #23-67 , bucaramanga"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_address(""), "");
        assert_eq!(normalize_address("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "Cl. 4 #11-79, Floridablanca",
            "Cr 27 No. 45-10 Apto 301",
            "Av. Quebradaseca Tv 93 Diag. 15",
            "calle carrera avenida transversal diagonal apartamento #",
            "",
        ] {
            let once = normalize_address(input);
            assert_eq!(normalize_address(&once), once, "input: {input:?}");
        }
    }
}
