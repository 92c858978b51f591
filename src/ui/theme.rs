//! Color theme constants for the Vyapaar UI
//!
//! Defines the dark palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected nav entry
pub const COLOR_ACCENT: Color = Color::Rgb(99, 102, 241); // indigo #6366F1

/// Brand header text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Regular body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Background for input fields
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Healthy stock, positive trends
pub const COLOR_OK: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Warnings and overstock
pub const COLOR_WARNING: Color = Color::Rgb(245, 158, 11); // amber #F59E0B

/// Critical alerts, low stock, errors
pub const COLOR_CRITICAL: Color = Color::Red;

/// Informational badges
pub const COLOR_INFO: Color = Color::Cyan;

// ============================================================================
// Chart Colors
// ============================================================================

pub const COLOR_SERIES_PRIMARY: Color = Color::Rgb(99, 102, 241);
pub const COLOR_SERIES_SECONDARY: Color = Color::Rgb(4, 181, 117);

// ============================================================================
// Overlay Colors
// ============================================================================

/// Background color for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Background for toast messages
pub const COLOR_TOAST_BG: Color = Color::Rgb(30, 30, 46);
