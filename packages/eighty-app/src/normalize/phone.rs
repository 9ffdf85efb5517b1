//! Vanity phone number conversion.

/// Convert keypad letters in a phone number to digits (`1-800-FLOWERS`).
///
/// Input with nothing but digits is returned unchanged; otherwise the text is
/// uppercased and every letter replaced by its keypad digit.
pub fn convert_alphanumeric_phone(phone: &str) -> String {
    if phone.chars().all(|c| c.is_ascii_digit()) {
        return phone.to_string();
    }

    phone
        .to_uppercase()
        .chars()
        .map(|c| keypad_digit(c).unwrap_or(c))
        .collect()
}

fn keypad_digit(letter: char) -> Option<char> {
    let digit = match letter {
        'A'..='C' => '2',
        'D'..='F' => '3',
        'G'..='I' => '4',
        'J'..='L' => '5',
        'M'..='O' => '6',
        'P'..='S' => '7',
        'T'..='V' => '8',
        'W'..='Z' => '9',
        _ => return None,
    };
    Some(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_to_digits() {
        assert_eq!(convert_alphanumeric_phone("18007777EBT"), "18007777328");
        assert_eq!(convert_alphanumeric_phone("770-382-GOLD"), "770-382-4653");
        assert_eq!(convert_alphanumeric_phone("1-800-flowers"), "1-800-3569377");
    }

    #[test]
    fn test_digits_unchanged() {
        assert_eq!(convert_alphanumeric_phone("5551234"), "5551234");
        assert_eq!(convert_alphanumeric_phone(""), "");
    }
}
