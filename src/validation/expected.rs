use num_bigint::BigUint;

/// Parse a recorded point given as a decimal integer.
///
/// The value must fit the 32-byte encoding it stands for.
pub fn parse_expected_point(value: &str) -> Result<BigUint, String> {
    let digits = value.trim();
    if digits.is_empty() {
        return Err("Expected point cannot be empty".to_string());
    }

    let invalid_chars: Vec<char> = digits.chars().filter(|c| !c.is_ascii_digit()).collect();
    if !invalid_chars.is_empty() {
        let invalid_str = invalid_chars
            .iter()
            .map(|c| format!("'{c}'"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(format!(
            "Expected point '{digits}' must be a decimal integer (invalid characters: {invalid_str})"
        ));
    }

    let parsed = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| format!("Expected point '{digits}' is not a valid integer"))?;

    if parsed.bits() > 256 {
        return Err(format!(
            "Expected point '{digits}' does not fit in 32 bytes ({} bits)",
            parsed.bits()
        ));
    }

    Ok(parsed)
}
