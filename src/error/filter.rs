//! Filter and pattern errors

use super::DmError;

/// Creates an invalid services filter error
pub fn invalid_services(filter: impl Into<String>, reason: impl Into<String>) -> DmError {
    DmError::InvalidServiceFilter {
        filter: filter.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid component pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> DmError {
    DmError::InvalidComponentPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
