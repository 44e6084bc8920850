//! Snapshot-related errors

use super::DmError;

/// Creates a snapshot not found error
pub fn not_found(path: impl Into<String>) -> DmError {
    DmError::SnapshotNotFound { path: path.into() }
}

/// Creates a snapshot read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DmError {
    DmError::SnapshotReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a snapshot parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DmError {
    DmError::SnapshotParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid snapshot error
pub fn invalid(message: impl Into<String>) -> DmError {
    DmError::InvalidSnapshot {
        message: message.into(),
    }
}
