//! Case conversions used when matching mixed-case input against a lower case
//! dictionary.
use smol_str::SmolStr;

/// Lower cases every character.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Upper cases the first character, leaving the rest untouched.
#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// Whether the first character is an upper case letter.
pub fn is_first_upper(s: &str) -> bool {
    s.chars().next().map(char::is_uppercase).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower() {
        assert_eq!(lower_case("Forimuch"), "forimuch");
        assert_eq!(lower_case("ŁÓDŹ"), "łódź");
        assert_eq!(lower_case(""), "");
    }

    #[test]
    fn first_upper() {
        assert_eq!(upper_first("where"), "Where");
        assert_eq!(upper_first("ßa"), "SSa");
        assert_eq!(upper_first("Where"), "Where");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn detects_leading_capital() {
        assert!(is_first_upper("Quick"));
        assert!(!is_first_upper("quick"));
        assert!(!is_first_upper("1quick"));
        assert!(!is_first_upper(""));
    }
}
