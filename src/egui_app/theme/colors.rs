//! Color Constants for the DEK RAI Theme
//!
//! Warm orange accent over a light neutral background, with the pink action
//! color used for form submit buttons.

use eframe::egui::Color32;

/// Dashboard header and accent - Orange
pub const ACCENT: Color32 = Color32::from_rgb(0xFF, 0x5E, 0x15);

/// Softer companion accent - Light orange
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(0xFF, 0x8A, 0x65);

/// Submit button background - Pink
pub const ACTION: Color32 = Color32::from_rgb(0xD8, 0x1B, 0x60);

/// Auth form title - Blue
pub const TITLE: Color32 = Color32::from_rgb(0x02, 0x77, 0xBD);

/// Auth form subtitle - Pink
pub const SUBTITLE: Color32 = Color32::from_rgb(0xFF, 0x40, 0x81);

/// Top navigation bar background - Yellow
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x37);

/// Text on the top navigation bar
pub const TOP_BAR_TEXT: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);

/// Auth screen background - Near-white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF9, 0xF9, 0xF9);

/// Dashboard content background - Light gray
pub const CONTENT_BG: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);

/// Sidebar and card background - White
pub const PANEL_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Primary text - Dark slate
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x18, 0x2B, 0x3B);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x75, 0x75, 0x75);

/// Text on accent backgrounds
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border
pub const BORDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Success notification - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error notification - Red
pub const ERROR: Color32 = Color32::from_rgb(0xD3, 0x2F, 0x2F);
