//! OpenAPI client generation service.
//!
//! Thin wrapper around `progenitor`: validate the input, parse the document,
//! generate the client, write exactly one output file. Failures are reported
//! as `false` plus a logged message rather than propagated; the caller is a
//! CLI and only needs an exit code.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info};

/// File name of the generated client module.
const OUTPUT_FILE: &str = "api_client.rs";

#[derive(Debug, Error)]
enum GenerationError {
    #[error("input file '{0}' does not exist")]
    InputMissing(PathBuf),

    #[error("'{0}' is not a valid Rust module name")]
    ModuleName(String),

    #[error("failed to parse OpenAPI document: {0}")]
    Parse(String),

    #[error("client generation failed: {0}")]
    Generate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Generates a Rust client module from an OpenAPI document.
#[derive(Debug, Default)]
pub struct ApiClientGenerator;

impl ApiClientGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a client module from `input` into `output_dir/api_client.rs`.
    ///
    /// Returns true on success. Every failure path (missing input, parse
    /// failure, generation failure, write failure) is logged with context and
    /// reported as false. Running twice with the same inputs overwrites the
    /// same output file with equivalent content.
    pub fn generate(&self, input: &Path, output_dir: &Path, module_name: &str) -> bool {
        match self.try_generate(input, output_dir, module_name) {
            Ok(path) => {
                info!(path = %path.display(), "Client successfully generated");
                true
            }
            Err(e) => {
                error!(error = %e, "Error generating client");
                false
            }
        }
    }

    fn try_generate(
        &self,
        input: &Path,
        output_dir: &Path,
        module_name: &str,
    ) -> Result<PathBuf, GenerationError> {
        info!(path = %input.display(), "Loading OpenAPI document");

        if !input.exists() {
            return Err(GenerationError::InputMissing(input.to_path_buf()));
        }
        if !is_valid_module_name(module_name) {
            return Err(GenerationError::ModuleName(module_name.to_string()));
        }

        let raw = fs::read_to_string(input)?;

        debug!("Parsing OpenAPI document");
        let document: openapiv3::OpenAPI =
            serde_json::from_str(&raw).map_err(|e| GenerationError::Parse(e.to_string()))?;

        info!(module = module_name, "Generating Rust client code");
        let mut generator = progenitor::Generator::default();
        let tokens = generator
            .generate_tokens(&document)
            .map_err(|e| GenerationError::Generate(e.to_string()))?;
        let ast = syn::parse2(tokens).map_err(|e| GenerationError::Generate(e.to_string()))?;
        let body = prettyplease::unparse(&ast);

        fs::create_dir_all(output_dir)?;
        let output_file = output_dir.join(OUTPUT_FILE);
        fs::write(&output_file, render_module(module_name, &body))?;

        Ok(output_file)
    }
}

/// Wrap the generated client in a module declaration named per the CLI flag.
fn render_module(module_name: &str, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 64);
    out.push_str("pub mod ");
    out.push_str(module_name);
    out.push_str(" {\n");

    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str("}\n");
    out
}

fn is_valid_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SPEC: &str = include_str!("../testdata/sample-api.json");

    fn write_sample_spec(dir: &Path) -> PathBuf {
        let input = dir.join("sample-api.json");
        fs::write(&input, SAMPLE_SPEC).expect("write sample spec");
        input
    }

    #[test]
    fn test_generate_with_valid_input_writes_module() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_sample_spec(dir.path());
        let output_dir = dir.path().join("out");

        let ok = ApiClientGenerator::new().generate(&input, &output_dir, "test_namespace");

        assert!(ok);
        let code = fs::read_to_string(output_dir.join(OUTPUT_FILE)).expect("read output");
        assert!(code.contains("pub mod test_namespace {"));
    }

    #[test]
    fn test_generate_with_missing_input_returns_false() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output_dir = dir.path().join("out");

        let ok = ApiClientGenerator::new().generate(
            &dir.path().join("non-existent-file.json"),
            &output_dir,
            "test_namespace",
        );

        assert!(!ok);
        assert!(!output_dir.join(OUTPUT_FILE).exists());
    }

    #[test]
    fn test_generate_with_invalid_document_returns_false() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("broken.json");
        fs::write(&input, "{ not json").expect("write broken spec");
        let output_dir = dir.path().join("out");

        let ok = ApiClientGenerator::new().generate(&input, &output_dir, "test_namespace");

        assert!(!ok);
        assert!(!output_dir.join(OUTPUT_FILE).exists());
    }

    #[test]
    fn test_generate_with_invalid_module_name_returns_false() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_sample_spec(dir.path());

        let ok = ApiClientGenerator::new().generate(&input, &dir.path().join("out"), "not-a-module");

        assert!(!ok);
    }

    #[test]
    fn test_generate_twice_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = write_sample_spec(dir.path());
        let output_dir = dir.path().join("out");
        let generator = ApiClientGenerator::new();

        assert!(generator.generate(&input, &output_dir, "test_namespace"));
        let first = fs::read_to_string(output_dir.join(OUTPUT_FILE)).expect("read first run");

        assert!(generator.generate(&input, &output_dir, "test_namespace"));
        let second = fs::read_to_string(output_dir.join(OUTPUT_FILE)).expect("read second run");

        assert_eq!(first, second);
    }

    #[test]
    fn test_is_valid_module_name() {
        assert!(is_valid_module_name("generated_api_client"));
        assert!(is_valid_module_name("_private"));
        assert!(!is_valid_module_name("1module"));
        assert!(!is_valid_module_name("has-dash"));
        assert!(!is_valid_module_name(""));
    }
}
