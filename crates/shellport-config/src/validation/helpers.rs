//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Like [`validate_range`], and put `fallback` in place of a bad value.
pub(crate) fn repair_range(
    errors: &mut Vec<String>,
    name: &str,
    value: &mut u32,
    fallback: u32,
    min: u32,
    max: u32,
) {
    let before = errors.len();
    validate_range(errors, name, *value, min, max);
    if errors.len() > before {
        *value = fallback;
    }
}
