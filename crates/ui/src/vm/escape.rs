/// Escape text for interpolation into HTML element content or attributes.
///
/// Every character that could open a tag, end an attribute or start an
/// entity is encoded, so the result never contains a raw `& < > " '`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Characters that must never survive `escape_html` unencoded.
#[cfg(test)]
pub(crate) const MARKUP_CHARS: [char; 4] = ['<', '>', '"', '\''];

/// True when `html` holds no raw markup character and every `&` starts an
/// entity.
#[cfg(test)]
pub(crate) fn is_inert(html: &str) -> bool {
    if html.contains(MARKUP_CHARS) {
        return false;
    }
    html.match_indices('&').all(|(at, _)| {
        let rest = &html[at + 1..];
        rest.find(';').is_some_and(|end| {
            end > 0
                && rest[..end]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '#')
        })
    })
}
