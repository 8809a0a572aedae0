//! Global layout parameters for invalidation tracking.

use super::style::TreeStyle;

/// Global parameters that affect tree layout.
///
/// Used for invalidation: if current params != last layout params, a full
/// relayout is needed. Per-node state (expansion, tag text) is tracked by the
/// tree revision, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutParams {
    /// Viewport width in surface units.
    pub width: i32,
    /// Style in effect.
    pub style: TreeStyle,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(width: i32, style: TreeStyle) -> Self {
        Self { width, style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_same_params() {
        let params1 = LayoutParams::new(80, TreeStyle::default());
        let params2 = LayoutParams::new(80, TreeStyle::default());
        assert_eq!(params1, params2);
    }

    #[test]
    fn test_inequality_different_width() {
        let params1 = LayoutParams::new(80, TreeStyle::default());
        let params2 = LayoutParams::new(120, TreeStyle::default());
        assert_ne!(params1, params2);
    }

    #[test]
    fn test_inequality_different_style() {
        let params1 = LayoutParams::new(80, TreeStyle::default());
        let params2 = LayoutParams::new(80, TreeStyle::default().with_lines(false));
        assert_ne!(params1, params2);
    }
}
