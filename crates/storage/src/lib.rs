use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Utc;

use shared::domain::ContactSubmission;

/// Column order of the contact record file.
pub const CONTACTS_HEADER: [&str; 4] = ["timestamp", "email", "subject", "message"];

/// Append-only CSV store for contact submissions.
///
/// The backing file is created with a header row on first write and then
/// only ever grows by one record per submission; existing rows are never
/// rewritten. There is no locking: concurrent writers may interleave
/// appends.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one submission, stamping it with the current UTC time in
    /// RFC 3339 form. Any I/O failure is returned to the caller; the
    /// submission is lost in that case, there is no retry or queue.
    pub fn append(&self, submission: &ContactSubmission) -> Result<()> {
        ensure_parent_dir_exists(&self.path)?;
        let is_new_file = !self.path.exists();

        let file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| {
                format!("failed to open contact store at '{}'", self.path.display())
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new_file {
            writer
                .write_record(CONTACTS_HEADER)
                .context("failed to write contact store header")?;
        }

        let timestamp = Utc::now().to_rfc3339();
        writer
            .write_record([
                timestamp.as_str(),
                submission.sender_email(),
                submission.subject(),
                submission.message(),
            ])
            .context("failed to append contact record")?;
        writer.flush().context("failed to flush contact record")?;

        Ok(())
    }
}

fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for contact store",
            parent.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests;
