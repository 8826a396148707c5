use crate::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use log::warn;
use std::io;
use walkdir::WalkDir;

pub const CONFIG_EXTENSION: &str = "tf";

/// List `.tf` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not entered. Entries with non-UTF-8 names are skipped.
pub fn discover_config_files(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, LoadError> {
    let dir_error = |source: io::Error| LoadError::DirectoryRead {
        path: dir.to_string(),
        source,
    };

    let meta = std::fs::metadata(dir).map_err(dir_error)?;
    if !meta.is_dir() {
        return Err(dir_error(io::Error::other("not a directory")));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| dir_error(e.into()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXTENSION) {
            continue;
        }
        // Follows symlinks, unlike `entry.file_type()`.
        if !path.is_file() {
            continue;
        }
        match Utf8PathBuf::from_path_buf(path.to_path_buf()) {
            Ok(p) => out.push(p),
            Err(p) => warn!("skipping non UTF-8 path {}", p.display()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn only_tf_files_at_top_level() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        for name in ["z.tf", "a.tf", "vars.tfvars", "main.tf.json", "README.md"] {
            std::fs::write(root.join(name), "").expect("write");
        }
        std::fs::create_dir(root.join("modules.tf")).expect("mkdir");

        let files = discover_config_files(&root).expect("discover");
        let names: Vec<_> = files.iter().filter_map(|p| p.file_name()).collect();
        assert_eq!(names, vec!["a.tf", "z.tf"]);
    }

    #[test]
    fn file_instead_of_directory_is_rejected() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        let file = root.join("main.tf");
        std::fs::write(&file, "").expect("write");

        let err = discover_config_files(&file).unwrap_err();
        assert!(matches!(err, LoadError::DirectoryRead { .. }));
    }
}
