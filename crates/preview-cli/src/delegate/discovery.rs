use std::path::{Path, PathBuf};

/// Name of the external preview tool.
pub const TOOL_NAME: &str = "reactstream";

#[cfg(windows)]
const LOCAL_BIN_NAMES: &[&str] = &["reactstream.cmd", "reactstream.exe", "reactstream"];
#[cfg(not(windows))]
const LOCAL_BIN_NAMES: &[&str] = &["reactstream"];

/// Locate the reactstream executable.
///
/// Lookup order:
/// 1. `explicit` (from `tool` in the config or `PREVIEW_TOOL`), if it is a file
/// 2. `node_modules/.bin` under `cwd`
/// 3. `PATH`
///
/// An explicit path that does not exist disables the other lookups, so a
/// misconfigured tool never silently resolves to a different binary.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        return path.is_file().then_some(path);
    }

    let local_bin = cwd.join("node_modules").join(".bin");
    if let Some(found) = LOCAL_BIN_NAMES
        .iter()
        .map(|name| local_bin.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found local {}: {}", TOOL_NAME, found.display());
        return Some(found);
    }

    match which::which(TOOL_NAME) {
        Ok(found) => {
            tracing::debug!("Found {} on PATH: {}", TOOL_NAME, found.display());
            Some(found)
        }
        Err(e) => {
            tracing::debug!("{} not available: {}", TOOL_NAME, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_tool_wins() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("my-reactstream");
        fs::write(&tool, "").unwrap();

        assert_eq!(discover(Some(&tool), temp.path()), Some(tool));
    }

    #[test]
    fn test_relative_explicit_tool_resolves_against_cwd() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        fs::write(temp.path().join("bin").join("rs"), "").unwrap();

        assert_eq!(
            discover(Some(Path::new("bin/rs")), temp.path()),
            Some(temp.path().join("bin").join("rs"))
        );
    }

    #[test]
    fn test_missing_explicit_tool_disables_lookup() {
        let temp = TempDir::new().unwrap();
        let local_bin = temp.path().join("node_modules").join(".bin");
        fs::create_dir_all(&local_bin).unwrap();
        fs::write(local_bin.join(LOCAL_BIN_NAMES[0]), "").unwrap();

        let missing = temp.path().join("nope");
        assert_eq!(discover(Some(&missing), temp.path()), None);
    }

    #[test]
    fn test_local_node_modules_bin() {
        let temp = TempDir::new().unwrap();
        let local_bin = temp.path().join("node_modules").join(".bin");
        fs::create_dir_all(&local_bin).unwrap();
        fs::write(local_bin.join(LOCAL_BIN_NAMES[0]), "").unwrap();

        assert_eq!(
            discover(None, temp.path()),
            Some(local_bin.join(LOCAL_BIN_NAMES[0]))
        );
    }
}
