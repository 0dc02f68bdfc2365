use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::store::log::ttlog;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the sessions file to `dest_file`, optionally zipped.
    /// Returns the path of the backup actually written.
    pub fn backup(
        data_file: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let dest = expand_tilde(dest_file);

        // 1️⃣ Check sessions file exists
        if !data_file.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Sessions file not found: {}", data_file.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        ensure_writable(&final_target, force)?;

        // 3️⃣ Copy or compress
        let final_path = if compress {
            compress_backup(data_file, &final_target)?
        } else {
            fs::copy(data_file, &dest)?;
            dest
        };
        success(format!("Backup created: {}", final_path.display()));

        // 4️⃣ Internal log (non blocking)
        if let Err(e) = ttlog(
            data_file,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(final_path)
    }
}

/// Write `src` into a single-entry deflated zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "sessions.json".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    Ok(zip_path.to_path_buf())
}
