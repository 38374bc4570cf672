//! Identifier utilities shared by the generators.

/// Returns true if `c` may start an identifier in the target languages.
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Returns true if `c` may appear inside an identifier in the target languages.
pub fn is_identifier_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Derive a type name from a project-relative path
/// (e.g., "Views/Home/Index.cshtml" -> "Views_Home_Index_cshtml").
///
/// Every non-identifier character becomes `_`. A leading digit gets an
/// `_` prefix so the result is always a valid identifier.
pub fn sanitize_type_name(path: &str) -> String {
    let mut result = String::with_capacity(path.len() + 1);
    match path.chars().next() {
        None => return "_".to_string(),
        Some(first) if !is_identifier_start(first) && is_identifier_part(first) => {
            result.push('_');
        }
        Some(_) => {}
    }
    result.extend(
        path.chars()
            .map(|c| if is_identifier_part(c) { c } else { '_' }),
    );
    result
}
