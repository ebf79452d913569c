//! Fully-qualified metric names

/// Separator between namespace, subsystem and name
pub const FQ_NAME_SEPARATOR: char = '_';

/// Join namespace, subsystem and name with `_`, skipping empty parts.
///
/// An empty `name` yields an empty string, whatever the other parts hold.
pub fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let mut fq_name = String::with_capacity(namespace.len() + subsystem.len() + name.len() + 2);
    for part in [namespace, subsystem, name] {
        if part.is_empty() {
            continue;
        }
        if !fq_name.is_empty() {
            fq_name.push(FQ_NAME_SEPARATOR);
        }
        fq_name.push_str(part);
    }
    fq_name
}
