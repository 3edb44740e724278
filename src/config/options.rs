//! API options for matrix pretty-printing.
//!
//! This module provides the `FormatOptions` struct, which controls how
//! `DenseMatrix::display_with` renders a matrix: an optional fixed number
//! of decimal places and the separator placed between columns.

/// Display parameters for dense matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fixed decimal places for each element (None keeps the element's own formatting)
    pub precision: Option<usize>,

    /// Separator placed between columns within a row
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            precision: None,
            separator: " ".to_string(),
        }
    }
}

impl FormatOptions {
    /// Options with a fixed number of decimal places.
    pub fn with_precision(precision: usize) -> Self {
        FormatOptions {
            precision: Some(precision),
            ..Self::default()
        }
    }
}
