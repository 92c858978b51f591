//! Responsive Layout System
//!
//! Decides between the mobile and desktop shells and provides the sizing
//! numbers the renderers use.
//!
//! Widths are classified in *logical units*: terminal columns multiplied by
//! a configurable cell width. With the default cell width of 8 a 100-column
//! terminal sits exactly on the 800-unit breakpoint.

// ============================================================================
// Breakpoints
// ============================================================================

/// Logical width at or above which the desktop shell is used
pub const DEFAULT_BREAKPOINT: u32 = 800;

/// Logical units per terminal column
pub const DEFAULT_CELL_WIDTH: u32 = 8;

/// Terminal height breakpoints for condensing content
pub mod breakpoints {
    /// Short terminal (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
    /// Tall terminal (>= 40 rows)
    pub const MD_HEIGHT: u16 = 40;
}

/// Convert a column count to logical units.
///
/// Zero columns means the size is unknown and yields `None`.
pub fn logical_width(columns: u16, cell_width: u32) -> Option<u32> {
    if columns == 0 {
        None
    } else {
        Some(u32::from(columns).saturating_mul(cell_width))
    }
}

// ============================================================================
// Viewport Classification
// ============================================================================

/// Which shell arrangement to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutClass {
    /// Top bar + content + bottom navigation
    Mobile,
    /// Sidebar beside the content
    #[default]
    Desktop,
}

impl LayoutClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutClass::Mobile => "mobile",
            LayoutClass::Desktop => "desktop",
        }
    }
}

/// Maps a viewport width to a [`LayoutClass`].
///
/// Pure and total: an absent width is desktop, anything below the
/// breakpoint is mobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportClassifier {
    pub breakpoint: u32,
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
        }
    }
}

impl ViewportClassifier {
    pub fn new(breakpoint: u32) -> Self {
        Self { breakpoint }
    }

    pub fn classify(&self, width: Option<u32>) -> LayoutClass {
        match width {
            Some(w) if w < self.breakpoint => LayoutClass::Mobile,
            _ => LayoutClass::Desktop,
        }
    }
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions plus the derived layout class.
///
/// Built once per frame and passed to every render function.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    pub class: LayoutClass,
}

impl LayoutContext {
    /// Create a context, classifying `logical` with `classifier`.
    pub fn new(width: u16, height: u16, logical: Option<u32>, classifier: &ViewportClassifier) -> Self {
        Self {
            width,
            height,
            class: classifier.classify(logical),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.class == LayoutClass::Mobile
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Sidebar width for the desktop shell: 22% of the width, 20..=30 columns.
    pub fn sidebar_width(&self) -> u16 {
        ((u32::from(self.width) * 22 / 100) as u16).clamp(20, 30)
    }

    /// Number of KPI cards per row.
    pub fn kpi_columns(&self) -> usize {
        if self.is_mobile() {
            2
        } else {
            4
        }
    }

    /// Height of one KPI card row.
    pub fn kpi_height(&self) -> u16 {
        if self.is_short() {
            3
        } else {
            5
        }
    }

    /// Whether charts are drawn beside each other or stacked.
    pub fn should_stack_charts(&self) -> bool {
        self.is_mobile()
    }

    /// Maximum display length for free text in table cells.
    pub fn max_message_length(&self) -> usize {
        if self.is_mobile() {
            32
        } else if self.height >= breakpoints::MD_HEIGHT {
            80
        } else {
            60
        }
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal with no width reported.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            class: LayoutClass::Desktop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_absent_is_desktop() {
        assert_eq!(ViewportClassifier::default().classify(None), LayoutClass::Desktop);
    }

    #[test]
    fn test_classify_boundary() {
        let classifier = ViewportClassifier::default();
        assert_eq!(classifier.classify(Some(799)), LayoutClass::Mobile);
        assert_eq!(classifier.classify(Some(800)), LayoutClass::Desktop);
        assert_eq!(classifier.classify(Some(0)), LayoutClass::Mobile);
    }

    #[test]
    fn test_custom_breakpoint() {
        let classifier = ViewportClassifier::new(600);
        assert_eq!(classifier.classify(Some(700)), LayoutClass::Desktop);
        assert_eq!(classifier.classify(Some(599)), LayoutClass::Mobile);
    }

    #[test]
    fn test_logical_width() {
        assert_eq!(logical_width(100, DEFAULT_CELL_WIDTH), Some(800));
        assert_eq!(logical_width(99, DEFAULT_CELL_WIDTH), Some(792));
        assert_eq!(logical_width(0, DEFAULT_CELL_WIDTH), None);
    }

    #[test]
    fn test_zero_columns_classify_desktop() {
        let classifier = ViewportClassifier::default();
        let ctx = LayoutContext::new(0, 24, logical_width(0, DEFAULT_CELL_WIDTH), &classifier);
        assert_eq!(ctx.class, LayoutClass::Desktop);
    }

    #[test]
    fn test_sidebar_width_bounds() {
        let classifier = ViewportClassifier::default();
        let narrow = LayoutContext::new(60, 24, None, &classifier);
        let wide = LayoutContext::new(300, 24, None, &classifier);
        assert_eq!(narrow.sidebar_width(), 20);
        assert_eq!(wide.sidebar_width(), 30);
    }

    #[test]
    fn test_kpi_columns_follow_class() {
        let classifier = ViewportClassifier::default();
        let mobile = LayoutContext::new(60, 24, logical_width(60, 8), &classifier);
        let desktop = LayoutContext::new(120, 24, logical_width(120, 8), &classifier);
        assert_eq!(mobile.kpi_columns(), 2);
        assert_eq!(desktop.kpi_columns(), 4);
    }

    #[test]
    fn test_kpi_height_condenses_when_short() {
        let ctx = LayoutContext::default();
        assert_eq!(ctx.kpi_height(), 5);
        let short = LayoutContext {
            height: 20,
            ..ctx
        };
        assert_eq!(short.kpi_height(), 3);
    }
}
