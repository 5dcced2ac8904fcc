//! Small shared helpers.

/// Last segment of the leading path of a type name.
///
/// `"app::cards::Card<app::Theme>"` becomes `"Card"`. Names that do not start
/// with a path, such as tuples, references, and slices, are returned whole.
pub(crate) fn short_type_name(full: &str) -> &str {
    let end = full
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
        .unwrap_or(full.len());
    let path = &full[..end];
    if path.is_empty() {
        return full;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Short name of `T` as produced by [`std::any::type_name`].
pub(crate) fn type_display_name<T: ?Sized>() -> &'static str {
    short_type_name(std::any::type_name::<T>())
}
