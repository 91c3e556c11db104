//! Digest building blocks: fenced file blocks and output-name derivation.

use crate::error::DigestError;
use std::fs;
use std::path::Path;

/// Compute the digest file stem for a directory.
///
/// The path of `dir` relative to `root` with components joined by `-`; the
/// root itself maps to the literal `root`. Output names therefore never
/// contain a path separator.
pub fn output_file_name(root: &Path, dir: &Path) -> Result<String, DigestError> {
    let relative = dir
        .strip_prefix(root)
        .map_err(|_| DigestError::InvalidPath(dir.display().to_string()))?;

    let components: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if components.is_empty() {
        Ok("root".to_string())
    } else {
        Ok(components.join("-"))
    }
}

/// Render one labeled fenced block: the root-relative path, then the content.
///
/// The file must decode as UTF-8 text; a decode or read failure propagates
/// and aborts the run (no partial-file recovery).
pub fn render_file_block(root: &Path, file: &Path) -> Result<String, DigestError> {
    let relative = file
        .strip_prefix(root)
        .map_err(|_| DigestError::InvalidPath(file.display().to_string()))?;
    let content = fs::read_to_string(file)?;
    Ok(format!("# {}\n```\n{}\n```\n\n", relative.display(), content))
}
