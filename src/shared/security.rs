use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single stored lead document (1 MB)
///
/// An audit result with every issue populated stays well below this; anything
/// larger is not something this tool wrote.
pub const MAX_LEAD_DOCUMENT_SIZE: u64 = 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the link itself is
/// inspected, not the target it points to.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates the lead storage directory.
///
/// A missing directory is fine (it is created on first write); an existing
/// one must be a real directory and not a symlink.
pub fn validate_data_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    validate_not_symlink(path, "storage")?;

    if !path.is_dir() {
        anyhow::bail!(
            "{} is not a directory\n\n💡 Hint: point --data-dir at a directory",
            path.display()
        );
    }

    Ok(())
}

/// Validates document size is within acceptable limits
pub fn validate_document_size(size: u64, path: &Path, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            size,
            max_size
        );
    }
    Ok(())
}
