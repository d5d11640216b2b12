//! Registration password rules.

/// Minimum password length, counted in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Outcome of each password rule for a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordCheck {
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
    pub has_special: bool,
}

impl PasswordCheck {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
            has_upper: password.chars().any(|ch| ch.is_ascii_uppercase()),
            has_lower: password.chars().any(|ch| ch.is_ascii_lowercase()),
            has_number: password.chars().any(|ch| ch.is_ascii_digit()),
            has_special: password.chars().any(|ch| SPECIAL_CHARACTERS.contains(ch)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_length && self.has_upper && self.has_lower && self.has_number && self.has_special
    }

    /// Rules paired with their checklist labels, in display order.
    pub fn requirements(&self) -> [(bool, &'static str); 5] {
        [
            (self.min_length, "En az 8 karakter"),
            (self.has_upper, "Büyük harf içermeli"),
            (self.has_lower, "Küçük harf içermeli"),
            (self.has_number, "Sayı içermeli"),
            (self.has_special, "Özel karakter içermeli"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accepts_password_meeting_every_rule() {
        let check = PasswordCheck::evaluate("Guclu#Parola1");

        assert!(check.is_valid());
    }

    #[test]
    fn password_without_digit_is_invalid() {
        let check = PasswordCheck::evaluate("Abcdefg!");

        assert!(!check.has_number);
        assert!(check.min_length && check.has_upper && check.has_lower && check.has_special);
        assert!(!check.is_valid());
    }

    #[test]
    fn short_password_fails_length_rule_only() {
        let check = PasswordCheck::evaluate("Ab1!");

        assert!(!check.min_length);
        assert!(check.has_upper && check.has_lower && check.has_number && check.has_special);
    }

    #[test]
    fn non_ascii_letters_do_not_satisfy_case_rules() {
        let check = PasswordCheck::evaluate("ĞÜŞİÖÇğüşıöç1!");

        assert!(!check.has_upper);
        assert!(!check.has_lower);
    }

    #[test]
    fn characters_outside_special_set_are_not_special() {
        let check = PasswordCheck::evaluate("Abcdefg1-_=+");

        assert!(!check.has_special);
    }

    #[test]
    fn length_counts_utf16_units() {
        // Four astral code points are eight UTF-16 units.
        let check = PasswordCheck::evaluate("😀😀😀😀");

        assert!(check.min_length);
    }

    #[test]
    fn requirements_follow_rule_results() {
        let check = PasswordCheck::evaluate("abc");
        let labels: Vec<_> = check.requirements().iter().map(|(met, _)| *met).collect();

        assert_eq!(labels, vec![false, false, true, false, false]);
    }

    proptest! {
        #[test]
        fn is_valid_is_conjunction_of_rules(password in any::<String>()) {
            let check = PasswordCheck::evaluate(&password);

            prop_assert_eq!(
                check.is_valid(),
                check.min_length
                    && check.has_upper
                    && check.has_lower
                    && check.has_number
                    && check.has_special
            );
        }

        #[test]
        fn requirements_mirror_rule_fields(password in "[ -~]{0,16}") {
            let check = PasswordCheck::evaluate(&password);
            let all_met = check.requirements().iter().all(|(met, _)| *met);

            prop_assert_eq!(all_met, check.is_valid());
        }
    }
}
