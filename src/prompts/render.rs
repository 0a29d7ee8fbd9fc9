//! Placeholder substitution
//!
//! Pure text-to-text; no filesystem involvement, so it can be unit-tested
//! without one.

/// Replace every occurrence of each marker with its value
///
/// Literal whole-string find/replace, not regex. All occurrences of a given
/// marker are replaced; markers without a substitution are left untouched.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (marker, value) in substitutions {
        output = output.replace(marker, value);
    }
    output
}
