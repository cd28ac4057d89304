/// Characters allowed in a package identifier.
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Reduce a raw dependency descriptor to the bare package name.
///
/// Takes the longest leading run of identifier characters, dropping
/// version constraints, extras and environment markers
/// (`"requests>=2.0,<3; extra=='x'"` becomes `"requests"`). A descriptor
/// that starts with a non-identifier character is returned whole, trimmed;
/// extraction never fails.
pub fn extract(descriptor: &str) -> &str {
    let trimmed = descriptor.trim();
    let end = trimmed
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(trimmed.len());
    if end == 0 { trimmed } else { &trimmed[..end] }
}
