use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};

/// Writes a rendered document to `path`, creating missing parent folders.
pub fn write_document(
    path: &Path,
    document: &str,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

/// Writes a rendered document to a stream such as stdout.
pub fn print_document<W: Write>(
    out: &mut W,
    document: &str,
) -> Result<()> {
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(())
}
