pub mod index_type;

use core::fmt;

/// Writes `items` as `[a, b, c]` using each element's `Display`.
pub(crate) fn fmt_sequence<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(item, f)?;
    }
    f.write_str("]")
}
