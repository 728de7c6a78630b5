//! Color theme constants for hubdeck
//!
//! Dark palette with a GitHub-blue accent.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Border color for unfocused panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for focus, selection and links
pub const COLOR_ACCENT: Color = Color::Rgb(88, 166, 255); // GitHub blue #58A6FF

/// Header title color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for labels and placeholders
pub const COLOR_DIM: Color = Color::DarkGray;

/// Typed text inside inputs
pub const COLOR_INPUT_TEXT: Color = Color::White;

/// Regular body text
pub const COLOR_TEXT: Color = Color::Gray;

// ============================================================================
// Status Colors
// ============================================================================

/// Inline upstream error message
pub const COLOR_ERROR: Color = Color::Red;

/// Loading indicators
pub const COLOR_LOADING: Color = Color::Yellow;

/// Numbers on the profile card
pub const COLOR_STAT: Color = Color::Rgb(4, 181, 117); // green #04B575

// ============================================================================
// Side Panel Colors
// ============================================================================

/// Side panel background
pub const COLOR_PANEL_BG: Color = Color::Rgb(0, 21, 41);

/// Menu item under the cursor
pub const COLOR_MENU_SELECTED_BG: Color = Color::Rgb(22, 119, 255);

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background of the modal alert
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Border of the modal alert
pub const COLOR_DIALOG_BORDER: Color = Color::Red;
