//! JSX/ES2015 transpilation used by `analyze`.
//!
//! The component is parsed, JSX is lowered to classic `React.createElement`
//! calls and modern syntax is lowered to ES2015. Only the outcome matters to
//! the CLI: either transpiled code or the collected diagnostics.

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::{Parser, ParserReturn};
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{JsxRuntime, TransformOptions, Transformer};
use std::path::Path;

/// Syntax level the component is lowered to.
pub const TARGET: &str = "es2015";

/// Transpile `source` (read from `path`) to ES2015 JavaScript.
///
/// The file extension selects the dialect (`.tsx`, `.ts`, `.jsx`, `.js`);
/// unknown extensions are parsed as JSX.
///
/// # Errors
///
/// Returns the parser or transformer diagnostics, one per line.
pub fn transform_component(path: &Path, source: &str) -> Result<String, String> {
    let source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::jsx());
    let allocator = Allocator::default();

    let ParserReturn {
        mut program,
        errors,
        panicked,
        ..
    } = Parser::new(&allocator, source, source_type).parse();

    if panicked || !errors.is_empty() {
        return Err(join_diagnostics(errors.iter().map(ToString::to_string)));
    }

    let scoping = SemanticBuilder::new().build(&program).semantic.into_scoping();

    let mut options = TransformOptions::from_target(TARGET)?;
    options.jsx.runtime = JsxRuntime::Classic;

    let transformed =
        Transformer::new(&allocator, path, &options).build_with_scoping(scoping, &mut program);
    if !transformed.errors.is_empty() {
        return Err(join_diagnostics(
            transformed.errors.iter().map(ToString::to_string),
        ));
    }

    Ok(Codegen::new().build(&program).code)
}

fn join_diagnostics(messages: impl Iterator<Item = String>) -> String {
    let joined = messages.collect::<Vec<_>>().join("\n");
    if joined.is_empty() {
        "Unrecoverable syntax error".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jsx_becomes_create_element() {
        let code = transform_component(
            Path::new("Hello.jsx"),
            "export default function Hello() { return <div className=\"x\">Hi</div>; }",
        )
        .unwrap();

        assert!(code.contains("createElement"));
        assert!(!code.contains("<div"));
    }

    #[test]
    fn test_newer_syntax_is_lowered() {
        let code = transform_component(
            Path::new("util.js"),
            "export const pick = (a, b) => a ?? b;",
        )
        .unwrap();

        assert!(!code.contains("??"));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = transform_component(Path::new("Broken.jsx"), "const = <div>;").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_unknown_extension_is_parsed_as_jsx() {
        let code = transform_component(Path::new("Widget.component"), "const a = <b />;").unwrap();
        assert!(code.contains("createElement"));
    }
}
