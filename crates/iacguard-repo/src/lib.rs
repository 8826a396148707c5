//! Repository adapters: discover Terraform files, read and parse them into resources.
//!
//! This crate is allowed to do filesystem IO. Reads are sequential and read-only.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use camino::Utf8Path;
use iacguard_domain::model::AnalysisModel;
use log::{debug, info};
use std::io;
use thiserror::Error;

pub use discover::{CONFIG_EXTENSION, discover_config_files};
pub use parse::parse_terraform;

/// Why a directory could not be loaded. Any of these aborts the whole load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file {path}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse file {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadError {
    /// The file or directory the error is about.
    pub fn path(&self) -> &str {
        match self {
            LoadError::DirectoryRead { path, .. }
            | LoadError::FileRead { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Build the in-memory model the policy engine runs on.
///
/// Files are the `.tf` entries directly inside `dir` (no recursion), in file
/// name order. Resources keep file order, then block order within each file.
/// A single unreadable or unparseable file fails the load with no partial result.
pub fn load_directory(dir: &Utf8Path) -> Result<AnalysisModel, LoadError> {
    let files = discover_config_files(dir)?;
    debug!("found {} .{} files in {}", files.len(), CONFIG_EXTENSION, dir);

    let mut resources = Vec::new();
    for path in &files {
        debug!("parsing {path}");
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
            path: path.to_string(),
            source,
        })?;
        let parsed = parse_terraform(path.as_str(), &text)?;
        debug!("{path}: {} blocks", parsed.len());
        resources.extend(parsed);
    }

    info!(
        "loaded {} resources from {} files in {}",
        resources.len(),
        files.len(),
        dir
    );
    Ok(AnalysisModel {
        directory: dir.to_string(),
        resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn load_concatenates_files_in_name_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(
            &root.join("b.tf"),
            r#"resource "aws_eip" "second" {}
resource "aws_eip" "third" {}
"#,
        );
        write_file(
            &root.join("a.tf"),
            r#"resource "aws_s3_bucket" "first" {
  acl = "private"
}
"#,
        );
        write_file(&root.join("notes.md"), "resource \"aws_eip\" \"ignored\" {}");
        write_file(
            &root.join("nested/c.tf"),
            "resource \"aws_eip\" \"too_deep\" {}",
        );

        let model = load_directory(&root).expect("load");
        let names: Vec<_> = model.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(model.directory, root.as_str());

        let first = &model.resources[0];
        assert_eq!(first.location.path, root.join("a.tf").as_str());
        assert_eq!(first.location.line, 1);
        assert_eq!(model.resources[2].location.line, 2);
    }

    #[test]
    fn parse_error_aborts_and_names_the_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("a.tf"), "resource \"aws_eip\" \"ok\" {}\n");
        write_file(&root.join("b.tf"), "resource \"aws_eip\" \"broken\" {\n");
        write_file(&root.join("c.tf"), "resource \"aws_eip\" \"ok2\" {}\n");

        let err = load_directory(&root).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "{err:?}");
        assert_eq!(err.path(), root.join("b.tf").as_str());
        assert!(err.to_string().contains("b.tf"));
    }

    #[test]
    fn missing_directory_is_directory_read_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp).join("does-not-exist");

        let err = load_directory(&root).unwrap_err();
        assert!(matches!(err, LoadError::DirectoryRead { .. }), "{err:?}");
    }

    #[test]
    fn empty_directory_yields_no_resources() {
        let tmp = TempDir::new().expect("temp dir");
        let model = load_directory(&utf8_root(&tmp)).expect("load");
        assert!(model.resources.is_empty());
    }
}
