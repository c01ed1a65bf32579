use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants;

/// Output folder used when the user does not name one: the video file stem
/// plus a fixed suffix, beside the video.
pub fn default_output_dir(video: &Path) -> PathBuf {
    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "video".to_string());

    video.with_file_name(format!("{}{}", stem, constants::OUTPUT_DIR_SUFFIX))
}

/// Create the output directory if needed and prove it is writable.
///
/// Returns the absolute path. An existing directory is fine; an existing
/// non-directory or a write-protected directory is an error.
pub fn prepare_output_dir(dir: &Path) -> Result<PathBuf> {
    if dir.exists() {
        if !dir.is_dir() {
            anyhow::bail!("'{}' exists and is not a directory", dir.display());
        }
    } else {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create '{}'", dir.display()))?;
    }

    // Probe writability by touching a scratch file; metadata readonly bits
    // miss unix permission and ACL denials.
    let probe = dir.join(".vfex_write_probe");
    fs::write(&probe, b"")
        .with_context(|| format!("write permission denied in '{}'", dir.display()))?;
    let _ = fs::remove_file(&probe);

    absolute_path(dir)
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()
            .context("failed to resolve the current directory")?
            .join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_uses_the_video_stem() {
        let dir = default_output_dir(Path::new("/clips/holiday.mp4"));
        assert_eq!(dir, PathBuf::from("/clips/holiday_images"));
    }

    #[test]
    fn prepare_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("frames/out");

        let resolved = prepare_output_dir(&target).unwrap();
        assert!(resolved.is_dir());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn prepare_accepts_an_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let resolved = prepare_output_dir(tmp.path()).unwrap();
        assert_eq!(resolved, tmp.path());
    }

    #[test]
    fn prepare_rejects_a_file_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, b"x").unwrap();

        assert!(prepare_output_dir(&file).is_err());
    }
}
