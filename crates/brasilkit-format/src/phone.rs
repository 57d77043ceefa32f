// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Phone-number formatting keyed purely by digit count.
//
// There is no checksum and no validation beyond length: 8/9 digits are
// local numbers, 10/11 add an area code, 13 adds the +55 country code.
// Anything else is returned unchanged.

/// Format a Brazilian phone number according to its digit count.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        // +55 (11) 99999-9999, only when the country code really is 55
        13 if digits.starts_with("55") => format!(
            "+{} ({}) {}-{}",
            &digits[..2],
            &digits[2..4],
            &digits[4..9],
            &digits[9..]
        ),
        // (11) 99999-9999, mobile with area code
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        // (11) 9999-9999, landline with area code
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        // 99999-9999, mobile without area code
        9 => format!("{}-{}", &digits[..5], &digits[5..]),
        // 9999-9999, landline without area code
        8 => format!("{}-{}", &digits[..4], &digits[4..]),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_digits_with_country_code() {
        assert_eq!(format_phone("5511999998888"), "+55 (11) 99999-8888");
    }

    #[test]
    fn thirteen_digits_without_55_prefix_pass_through() {
        assert_eq!(format_phone("4911999998888"), "4911999998888");
    }

    #[test]
    fn eleven_digit_mobile() {
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn ten_digit_landline() {
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
    }

    #[test]
    fn nine_and_eight_digit_local_numbers() {
        assert_eq!(format_phone("999998888"), "99999-8888");
        assert_eq!(format_phone("33334444"), "3333-4444");
    }

    #[test]
    fn punctuated_input_is_renormalized() {
        assert_eq!(format_phone("(11) 99999-8888"), "(11) 99999-8888");
        assert_eq!(format_phone("+55 11 99999 8888"), "+55 (11) 99999-8888");
    }

    #[test]
    fn unrecognized_lengths_return_the_input() {
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("not a phone"), "not a phone");
    }
}
