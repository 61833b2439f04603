//! Client-side image dimension checks for banner uploads.
//!
//! Uploads are rejected locally, before any request is made, when the image
//! does not match the configured banner size.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How strictly the expected size is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionMode {
    /// Width and height must match exactly.
    Exact,
    /// Width and height must be at least the expected size.
    AtLeast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRule {
    pub width: u32,
    pub height: u32,
    pub mode: DimensionMode,
}

impl DimensionRule {
    #[must_use]
    pub const fn exact(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mode: DimensionMode::Exact,
        }
    }

    #[must_use]
    pub const fn at_least(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mode: DimensionMode::AtLeast,
        }
    }
}

/// Check `(width, height)` against `rule`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the expected and actual size.
pub fn validate_dimensions(actual: (u32, u32), rule: &DimensionRule) -> Result<(), CoreError> {
    let (width, height) = actual;
    let ok = match rule.mode {
        DimensionMode::Exact => width == rule.width && height == rule.height,
        DimensionMode::AtLeast => width >= rule.width && height >= rule.height,
    };
    if ok {
        return Ok(());
    }

    let expectation = match rule.mode {
        DimensionMode::Exact => "exactly",
        DimensionMode::AtLeast => "at least",
    };
    Err(CoreError::Validation(format!(
        "image must be {expectation} {}x{} pixels, got {width}x{height}",
        rule.width, rule.height
    )))
}

/// Read image dimensions from the file header.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the file cannot be opened or is not a
/// recognized image format.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32), CoreError> {
    image::image_dimensions(path).map_err(|error| {
        CoreError::Validation(format!(
            "cannot read image dimensions from {}: {error}",
            path.display()
        ))
    })
}

/// Read an image file and validate it against `rule`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the file is unreadable or the wrong size.
pub fn validate_image_file(path: &Path, rule: &DimensionRule) -> Result<(u32, u32), CoreError> {
    let dimensions = read_dimensions(path)?;
    validate_dimensions(dimensions, rule)?;
    Ok(dimensions)
}
