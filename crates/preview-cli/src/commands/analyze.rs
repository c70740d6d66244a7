//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result, ResultExt};
use crate::transform::transform_component;
use crate::ui;

/// Number of transpiled characters printed with `--verbose`.
pub const PREVIEW_CHARS: usize = 500;

/// Execute the analyze command.
///
/// Reads the component, runs it through the JSX and ES2015 transforms and
/// reports success. With `verbose`, the beginning of the transpiled code is
/// written to stdout.
///
/// # Errors
///
/// Returns [`CliError::FileNotFound`] for a missing file and
/// [`CliError::Transform`] when the transform rejects it.
pub async fn execute(args: AnalyzeArgs, verbose: bool) -> Result<()> {
    ui::info("Analyzing component...");

    if !args.file.is_file() {
        return Err(CliError::FileNotFound(args.file));
    }

    let bytes = tokio::fs::read(&args.file).await.with_path(&args.file)?;
    let source = String::from_utf8_lossy(&bytes);

    let code = transform_component(&args.file, &source).map_err(|error| CliError::Transform {
        file: args.file.clone(),
        error,
    })?;

    ui::success("Analysis completed successfully!");
    ui::success("Component validation passed.");

    if verbose {
        println!("Transpiled code: {}...", truncate_chars(&code, PREVIEW_CHARS));
    }

    Ok(())
}

/// First `max` characters of `text`, never splitting a character.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        assert_eq!(truncate_chars("żółw", 2), "żó");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let args = AnalyzeArgs {
            file: PathBuf::from("/definitely/missing/App.jsx"),
        };
        let err = execute(args, false).await.unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_valid_component() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Counter.jsx");
        fs::write(
            &file,
            "export default function Counter() { return <button>0</button>; }",
        )
        .unwrap();

        assert!(execute(AnalyzeArgs { file }, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_transform_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Broken.jsx");
        fs::write(&file, "export default function () { return <div; }").unwrap();

        let err = execute(AnalyzeArgs { file }, false).await.unwrap_err();
        assert!(matches!(err, CliError::Transform { .. }));
        assert!(err.to_string().starts_with("Error analyzing component"));
    }
}
