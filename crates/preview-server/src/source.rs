//! Reading and writing the target component file.
//!
//! Nothing here is cached: every call goes back to the filesystem, so a
//! snapshot is always consistent with the file at the time of the call.

use crate::error::{Result, ServerError};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Size and modification time of the component file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileStat {
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub last_modified: SystemTime,
}

impl FileStat {
    /// Modification time in whole milliseconds since the Unix epoch.
    ///
    /// Times before the epoch count as 0.
    pub fn modified_ms(&self) -> u64 {
        system_time_to_millis(self.last_modified)
    }

    /// Modification time as an RFC 3339 UTC timestamp.
    pub fn modified_rfc3339(&self) -> String {
        DateTime::<Utc>::from(self.last_modified).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Modification time formatted for people, in local time.
    pub fn modified_display(&self) -> String {
        DateTime::<Local>::from(self.last_modified)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Content plus metadata of the component file at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSnapshot {
    /// File content decoded as UTF-8 (invalid sequences are replaced)
    pub content: String,
    /// Metadata captured alongside the content
    pub stat: FileStat,
}

impl FileSnapshot {
    /// Read the file's content and metadata.
    ///
    /// # Errors
    ///
    /// `ComponentNotFound` if the file is gone, `NotAFile` for directories and
    /// other non-regular entries, `Read` for any other I/O failure.
    pub async fn read(path: &Path) -> Result<Self> {
        let stat = stat(path).await?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ServerError::read(path, e))?;

        Ok(Self {
            content: String::from_utf8_lossy(&bytes).into_owned(),
            stat,
        })
    }
}

/// Stat the component file without reading its content.
pub async fn stat(path: &Path) -> Result<FileStat> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ServerError::read(path, e))?;

    if !metadata.is_file() {
        return Err(ServerError::NotAFile(path.to_path_buf()));
    }

    let last_modified = metadata
        .modified()
        .map_err(|e| ServerError::read(path, e))?;

    Ok(FileStat {
        size: metadata.len(),
        last_modified,
    })
}

/// Overwrite the component file with `code`.
///
/// The whole file is replaced; concurrent writers are not coordinated and the
/// last write wins.
pub async fn write(path: &Path, code: &str) -> Result<()> {
    tokio::fs::write(path, code.as_bytes())
        .await
        .map_err(|source| ServerError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Check that `path` names an existing regular file.
///
/// Used once at startup so the process can fail before binding a port.
pub fn ensure_component(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(ServerError::NotAFile(path.to_path_buf())),
        Err(e) => Err(ServerError::read(path, e)),
    }
}

fn system_time_to_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Counter.jsx");
        std::fs::write(&path, "const x = 1;").unwrap();

        let snapshot = FileSnapshot::read(&path).await.unwrap();
        assert_eq!(snapshot.content, "const x = 1;");
        assert_eq!(snapshot.stat.size, 12);
        assert!(snapshot.stat.modified_ms() > 0);
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = FileSnapshot::read(&temp.path().join("missing.jsx"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::ComponentNotFound(_)));
    }

    #[tokio::test]
    async fn test_stat_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let err = stat(temp.path()).await.unwrap_err();
        assert!(matches!(err, ServerError::NotAFile(_)));
    }

    #[tokio::test]
    async fn test_write_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("App.jsx");
        std::fs::write(&path, "old content that is longer").unwrap();

        write(&path, "new").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_ensure_component() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("App.jsx");
        assert!(matches!(
            ensure_component(&path),
            Err(ServerError::ComponentNotFound(_))
        ));
        assert!(matches!(
            ensure_component(temp.path()),
            Err(ServerError::NotAFile(_))
        ));

        std::fs::write(&path, "export default 1;").unwrap();
        assert!(ensure_component(&path).is_ok());
    }

    #[test]
    fn test_millis_conversion() {
        let time = UNIX_EPOCH + Duration::from_micros(1_500);
        assert_eq!(system_time_to_millis(time), 1);

        let precise = UNIX_EPOCH + Duration::from_nanos(1_792_368_215_816_086_200);
        assert_eq!(system_time_to_millis(precise), 1_792_368_215_816);

        let before_epoch = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(system_time_to_millis(before_epoch), 0);

        let stat = FileStat {
            size: 0,
            last_modified: UNIX_EPOCH + Duration::from_millis(1_000),
        };
        assert_eq!(stat.modified_rfc3339(), "1970-01-01T00:00:01.000Z");
    }
}
