//! Row and cell bases, and how space is distributed between them.

use simple_ui_core::logging::targets;

/// How a row's height or a cell's width is determined.
///
/// # Conversions
///
/// - `f32` is a fixed length in pixels, independent of the total.
/// - `&str` is a percentage of the total: `"50%"`, `" 12.5 %"`. Text that
///   does not start with a number contributes nothing.
/// - `None` is flexible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Basis {
    /// Shares whatever the other items leave over.
    #[default]
    Flexible,
    /// An absolute length.
    Fixed(f32),
    /// A percentage of the total, `50.0` meaning half.
    Percent(f32),
}

impl Basis {
    /// Parse percentage text by its leading number.
    ///
    /// Unparseable text yields `Percent(0.0)`: it still counts as resolved,
    /// not as flexible.
    pub fn percent(text: &str) -> Self {
        Basis::Percent(leading_number(text).unwrap_or(0.0))
    }

    pub fn is_flexible(&self) -> bool {
        matches!(self, Basis::Flexible)
    }

    /// This item's share of `total`, or `None` if it is flexible.
    ///
    /// Non-finite results resolve to zero.
    pub fn resolve(&self, total: f32) -> Option<f32> {
        let value = match *self {
            Basis::Flexible => return None,
            Basis::Fixed(length) => length,
            Basis::Percent(percent) => total * percent / 100.0,
        };
        Some(if value.is_finite() { value } else { 0.0 })
    }
}

impl From<f32> for Basis {
    fn from(length: f32) -> Self {
        Basis::Fixed(length)
    }
}

impl From<i32> for Basis {
    fn from(length: i32) -> Self {
        Basis::Fixed(length as f32)
    }
}

impl From<u32> for Basis {
    fn from(length: u32) -> Self {
        Basis::Fixed(length as f32)
    }
}

impl From<&str> for Basis {
    fn from(text: &str) -> Self {
        Basis::percent(text)
    }
}

impl From<String> for Basis {
    fn from(text: String) -> Self {
        Basis::percent(&text)
    }
}

impl<T: Into<Basis>> From<Option<T>> for Basis {
    fn from(value: Option<T>) -> Self {
        value.map_or(Basis::Flexible, Into::into)
    }
}

/// The longest prefix of `text` (after leading whitespace) that reads as a
/// decimal number.
fn leading_number(text: &str) -> Option<f32> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    // Optional exponent, only if it has digits.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits = bytes[exp_end..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exp_end + digits;
        }
    }
    text[..end].parse().ok()
}

/// Split `total` between items with the given bases.
///
/// Fixed and percentage items take their resolved size; the remainder is
/// shared evenly by flexible items. The remainder is not clamped: when the
/// resolved items overflow `total`, flexible items get negative sizes.
pub fn distribute(total: f32, bases: &[Basis]) -> Vec<f32> {
    let resolved: Vec<Option<f32>> = bases.iter().map(|b| b.resolve(total)).collect();
    let used: f32 = resolved.iter().flatten().sum();
    let flexible = resolved.iter().filter(|r| r.is_none()).count();

    let share = if flexible == 0 {
        0.0
    } else {
        (total - used) / flexible as f32
    };
    if share < 0.0 {
        tracing::debug!(
            target: targets::LAYOUT,
            total,
            used,
            share,
            "resolved bases overflow total; flexible items get a negative share"
        );
    }

    resolved.into_iter().map(|r| r.unwrap_or(share)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Basis::from(50.0), Basis::Fixed(50.0));
        assert_eq!(Basis::from("50%"), Basis::Percent(50.0));
        assert_eq!(Basis::from(None::<f32>), Basis::Flexible);
        assert_eq!(Basis::from(Some("25%")), Basis::Percent(25.0));
    }

    #[test]
    fn test_integer_lengths_are_fixed() {
        fn basis(value: impl Into<Basis>) -> Basis {
            value.into()
        }
        assert_eq!(basis(20), Basis::Fixed(20.0));
        assert_eq!(basis(7u32), Basis::Fixed(7.0));
        assert_eq!(basis(-5), Basis::Fixed(-5.0));
        assert_eq!(basis(Some(12)), Basis::Fixed(12.0));
        assert_eq!(distribute(100.0, &[basis(20), Basis::Flexible]), vec![20.0, 80.0]);
    }

    #[test]
    fn test_percentage_text_parsing() {
        assert_eq!(Basis::percent(" 12.5 %"), Basis::Percent(12.5));
        assert_eq!(Basis::percent("33"), Basis::Percent(33.0));
        assert_eq!(Basis::percent("1e1%"), Basis::Percent(10.0));
        assert_eq!(Basis::percent("5e%"), Basis::Percent(5.0));
        assert_eq!(Basis::percent(".5%"), Basis::Percent(0.5));
        assert_eq!(Basis::percent("abc"), Basis::Percent(0.0));
        assert_eq!(Basis::percent(""), Basis::Percent(0.0));
    }

    #[test]
    fn test_invalid_percentage_is_resolved_not_flexible() {
        let sizes = distribute(100.0, &[Basis::percent("abc"), Basis::Flexible]);
        assert_eq!(sizes, vec![0.0, 100.0]);
    }

    #[test]
    fn test_percent_and_fixed() {
        assert_eq!(Basis::percent("50%").resolve(200.0), Some(100.0));
        assert_eq!(Basis::Fixed(50.0).resolve(200.0), Some(50.0));
        assert_eq!(Basis::Fixed(50.0).resolve(10.0), Some(50.0));
        assert_eq!(Basis::Flexible.resolve(10.0), None);
    }

    #[test]
    fn test_nan_resolves_to_zero() {
        assert_eq!(Basis::Fixed(f32::NAN).resolve(100.0), Some(0.0));
        assert_eq!(Basis::Percent(50.0).resolve(f32::INFINITY), Some(0.0));
    }

    #[test]
    fn test_flexible_items_split_remainder() {
        let sizes = distribute(100.0, &[Basis::Flexible, Basis::Fixed(20.0), Basis::Flexible]);
        assert_eq!(sizes, vec![40.0, 20.0, 40.0]);
        assert_eq!(sizes.iter().sum::<f32>(), 100.0);
    }

    #[test]
    fn test_negative_remainder_is_preserved() {
        let sizes = distribute(100.0, &[Basis::Fixed(150.0), Basis::Flexible]);
        assert_eq!(sizes, vec![150.0, -50.0]);
    }

    #[test]
    fn test_no_flexible_items() {
        let sizes = distribute(100.0, &[Basis::percent("30%"), Basis::Fixed(10.0)]);
        assert_eq!(sizes, vec![30.0, 10.0]);
        assert!(distribute(100.0, &[]).is_empty());
    }
}
