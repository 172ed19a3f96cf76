//! Form validation rules.
//!
//! Each validator checks its rules in order and reports the first failure.
//! Rules mirror the copy the forms show, so the error's `Display` can be
//! rendered directly.

use crate::ValidationError;

/// Shortest accepted mobile number.
pub const MOBILE_MIN_DIGITS: usize = 10;

/// Longest accepted mobile number.
pub const MOBILE_MAX_DIGITS: usize = 15;

/// Minimum password length in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Validate a mobile number: 10 to 15 ASCII digits, nothing else.
pub fn validate_mobile_number(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::MobileRequired);
    }
    let len = input.chars().count();
    let all_digits = input.chars().all(|c| c.is_ascii_digit());
    if !all_digits || !(MOBILE_MIN_DIGITS..=MOBILE_MAX_DIGITS).contains(&len) {
        return Err(ValidationError::MobileInvalid);
    }
    Ok(())
}

/// Validate a one-time passcode of exactly `length` digits.
pub fn validate_code(input: &str, length: usize) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::CodeRequired);
    }
    if input.chars().count() != length {
        return Err(ValidationError::CodeLength { expected: length });
    }
    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CodeNotNumeric);
    }
    Ok(())
}

/// Validate a display name. Whitespace-only names count as empty.
pub fn validate_name(input: &str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Validate an email address.
///
/// Accepts `local@domain.tld` where no part is empty and no whitespace
/// appears anywhere.
pub fn validate_email(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if input.chars().any(char::is_whitespace) {
        return Err(ValidationError::EmailInvalid);
    }

    let Some((local, domain)) = input.split_once('@') else {
        return Err(ValidationError::EmailInvalid);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::EmailInvalid);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Validate a password: present and at least [`PASSWORD_MIN_CHARS`] long.
pub fn validate_password(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if input.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort { min: PASSWORD_MIN_CHARS });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn mobile_number_rules() {
        assert_eq!(validate_mobile_number(""), Err(ValidationError::MobileRequired));
        assert_eq!(validate_mobile_number("12345"), Err(ValidationError::MobileInvalid));
        assert_eq!(validate_mobile_number("98765abcde"), Err(ValidationError::MobileInvalid));
        assert_eq!(validate_mobile_number("+919876543210"), Err(ValidationError::MobileInvalid));
        assert_eq!(validate_mobile_number("9876543210"), Ok(()));
        assert_eq!(validate_mobile_number("123456789012345"), Ok(()));
        assert_eq!(validate_mobile_number("1234567890123456"), Err(ValidationError::MobileInvalid));
    }

    #[test]
    fn code_rules_in_order() {
        assert_eq!(validate_code("", 6), Err(ValidationError::CodeRequired));
        assert_eq!(validate_code("123", 6), Err(ValidationError::CodeLength { expected: 6 }));
        assert_eq!(validate_code("12a456", 6), Err(ValidationError::CodeNotNumeric));
        assert_eq!(validate_code("123456", 6), Ok(()));
        assert_eq!(validate_code("1234", 4), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("jane"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("jane@"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("jane@example"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("jane@example..com"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("ja ne@example.com"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("jane@a@b.com"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("jane.doe@example.co.in"), Ok(()));
    }

    #[test]
    fn name_and_password_rules() {
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_name("Jane"), Ok(()));
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(
            validate_password("12345"),
            Err(ValidationError::PasswordTooShort { min: PASSWORD_MIN_CHARS })
        );
        assert_eq!(validate_password("123456"), Ok(()));
    }

    proptest! {
        #[test]
        fn prop_digit_strings_in_range_are_valid_numbers(number in "[0-9]{10,15}") {
            prop_assert_eq!(validate_mobile_number(&number), Ok(()));
        }

        #[test]
        fn prop_code_of_exact_length_is_valid(code in "[0-9]{1,12}") {
            let len = code.len();
            prop_assert_eq!(validate_code(&code, len), Ok(()));
        }
    }
}
