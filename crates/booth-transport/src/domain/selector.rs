//! Resolution of a typed button selector against the registry.

use booth_core::error::DomainError;

use super::destination::{Destination, DestinationRegistry};

/// Uppercases the first character and leaves the rest untouched.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drops a leading `button`/`buttons` word, as in `press button 4`.
fn strip_button_word(token: &str) -> &str {
    let Some((head, rest)) = token.split_once(char::is_whitespace) else {
        return token;
    };
    if head.eq_ignore_ascii_case("button") || head.eq_ignore_ascii_case("buttons") {
        rest.trim_start()
    } else {
        token
    }
}

/// Resolves `raw` to a destination.
///
/// The label is tried first (capitalized exact match, then ignoring case);
/// a token that parses fully as a positive integer is then tried as an
/// ordinal.
///
/// # Errors
///
/// Returns `DomainError::NoSelector` for an empty token and
/// `DomainError::UnknownDestination` when nothing matches.
pub fn resolve<'a>(
    registry: &'a DestinationRegistry,
    raw: &str,
) -> Result<&'a Destination, DomainError> {
    let token = strip_button_word(raw.trim());
    if token.is_empty() {
        return Err(DomainError::NoSelector);
    }

    let label = capitalize(token);
    if let Some(destination) = registry
        .lookup_by_label(&label)
        .or_else(|| registry.lookup_by_label_ignoring_case(token))
    {
        return Ok(destination);
    }

    token
        .parse::<usize>()
        .ok()
        .and_then(|ordinal| registry.lookup_by_ordinal(ordinal))
        .ok_or_else(|| DomainError::UnknownDestination(token.to_owned()))
}
