// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Note dimensions and their coercion into pixel values.

use alloc::string::String;

/// Fallback width (px) for a note whose width cannot be resolved.
pub const DEFAULT_WISH_WIDTH: f64 = 200.0;

/// Fallback height (px) for a note whose height cannot be resolved.
pub const DEFAULT_WISH_HEIGHT: f64 = 150.0;

/// One edge length of a note.
///
/// The presentation layer stores sizes either as bare numbers or as CSS-style
/// strings such as `"200px"`. Geometry must never see the string form, so
/// every consumer goes through [`Dimension::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub enum Dimension {
    /// A plain pixel value.
    Px(f64),
    /// Raw text, e.g. `"200px"`. The leading numeric prefix is the value.
    Text(String),
}

impl Dimension {
    /// Resolve to a non-negative pixel value.
    ///
    /// Text dimensions are parsed from their leading numeric prefix
    /// (`"200px"` → `200.0`). Non-numeric, non-finite, or negative input
    /// falls back to `fallback`.
    pub fn resolve(&self, fallback: f64) -> f64 {
        let value = match self {
            Self::Px(v) => Some(*v),
            Self::Text(s) => parse_numeric_prefix(s),
        };
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => fallback,
        }
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl From<&str> for Dimension {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

/// Parse the leading numeric prefix of a string, ignoring surrounding space.
///
/// Accepts an optional sign, digits, and at most one decimal point; stops at
/// the first other character (typically a unit suffix). Returns `None` when
/// no digits are present.
fn parse_numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

/// Width and height of a note, both subject to coercion.
#[derive(Clone, Debug, PartialEq)]
pub struct WishSize {
    /// Note width.
    pub width: Dimension,
    /// Note height.
    pub height: Dimension,
}

impl WishSize {
    /// A size from plain pixel values.
    pub fn px(width: f64, height: f64) -> Self {
        Self {
            width: Dimension::Px(width),
            height: Dimension::Px(height),
        }
    }

    /// Resolved `(width, height)` in pixels, applying the documented fallbacks.
    pub fn resolve(&self) -> (f64, f64) {
        (
            self.width.resolve(DEFAULT_WISH_WIDTH),
            self.height.resolve(DEFAULT_WISH_HEIGHT),
        )
    }
}

impl Default for WishSize {
    fn default() -> Self {
        Self::px(DEFAULT_WISH_WIDTH, DEFAULT_WISH_HEIGHT)
    }
}
