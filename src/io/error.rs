//! Error types for pattern computation, page tiling and file export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// A tapered shade was requested whose diameters do not narrow toward the top
    InvalidTaper {
        /// Requested top diameter
        top_diameter: f64,
        /// Requested bottom diameter
        bottom_diameter: f64,
    },

    /// The unrolled sector would wrap past a full turn
    ///
    /// Such a shade cannot be cut from a single seamless flat panel.
    AngleOverflow {
        /// Computed sector angle in radians
        sector_angle: f64,
    },

    /// Tiling would need more pages than the configured ceiling allows
    PatternTooLarge {
        /// Pages needed to cover the pattern
        required: usize,
        /// Configured page ceiling
        limit: usize,
    },

    /// Input parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered page to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to write the vector outline to disk
    SvgExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PatternError {
    /// Whether the error stems from user input rather than the environment
    ///
    /// User-facing errors are reported verbatim so the dimensions can be adjusted and retried.
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidTaper { .. }
                | Self::AngleOverflow { .. }
                | Self::PatternTooLarge { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTaper {
                top_diameter,
                bottom_diameter,
            } => {
                write!(
                    f,
                    "Invalid taper: top diameter {top_diameter} must be strictly smaller than bottom diameter {bottom_diameter}"
                )
            }
            Self::AngleOverflow { sector_angle } => {
                write!(
                    f,
                    "Sector angle {sector_angle:.4} rad exceeds a full turn; the shade cannot be cut as a single flat panel"
                )
            }
            Self::PatternTooLarge { required, limit } => {
                write!(
                    f,
                    "Pattern needs {required} pages, more than the limit of {limit}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export page image to '{}': {source}",
                    path.display()
                )
            }
            Self::SvgExport { path, source } => {
                write!(
                    f,
                    "Failed to export outline to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::SvgExport { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject values that are not finite and strictly positive
///
/// # Errors
///
/// Returns `InvalidParameter` naming `parameter` when `value` is zero, negative, NaN or infinite
pub fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite number greater than zero",
        ))
    }
}
