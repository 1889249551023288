//! Canadian postal codes (`A1A 1A1`).

/// Returns true when `input` has the letter-digit-letter digit-letter-digit
/// shape, with at most one space between the two halves.
pub fn is_postal_code(input: &str) -> bool {
    split_postal_code(input).is_some()
}

/// Canonical upper-case `A1A 1A1` form, or `None` if `input` is not a postal code.
pub fn normalize_postal_code(input: &str) -> Option<String> {
    let (fsa, ldu) = split_postal_code(input)?;
    Some(format!(
        "{} {}",
        fsa.to_ascii_uppercase(),
        ldu.to_ascii_uppercase()
    ))
}

fn split_postal_code(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim();
    if !trimmed.is_ascii() {
        return None;
    }

    let (fsa, ldu) = match trimmed.len() {
        6 => trimmed.split_at(3),
        7 => {
            let (fsa, rest) = trimmed.split_at(3);
            (fsa, rest.strip_prefix(' ')?)
        }
        _ => return None,
    };

    let shape_ok = |part: &str, letter_first: bool| {
        part.chars().enumerate().all(|(idx, ch)| {
            if (idx % 2 == 0) == letter_first {
                ch.is_ascii_alphabetic()
            } else {
                ch.is_ascii_digit()
            }
        })
    };

    (shape_ok(fsa, true) && shape_ok(ldu, false)).then_some((fsa, ldu))
}
