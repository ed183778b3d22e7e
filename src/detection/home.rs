//! Java home path normalization and layout checks.

use std::path::{Path, PathBuf};

/// File name of the Java compiler on this platform.
pub(crate) fn compiler_file_name() -> String {
    format!("javac{}", std::env::consts::EXE_SUFFIX)
}

/// File name of the Java launcher on this platform.
pub(crate) fn launcher_file_name() -> String {
    format!("java{}", std::env::consts::EXE_SUFFIX)
}

/// Expand a leading `~` to the user's home directory.
///
/// Only `~` on its own or followed by a path separator is expanded;
/// `~user` forms are left untouched.
fn expand_home_dir(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
            .or_else(|| raw.strip_prefix("~\\"))
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

/// Turn a raw candidate value into the path that gets validated.
///
/// Expands `~`, then resolves symbolic links to the real target. A path that
/// cannot be canonicalized (missing, or a dangling link) is returned expanded
/// but otherwise unchanged so the existence check reports it.
pub(crate) fn normalize_home(raw: &str) -> PathBuf {
    let expanded = expand_home_dir(raw.trim());
    std::fs::canonicalize(&expanded).unwrap_or(expanded)
}

/// Whether `<home>/bin/javac` exists.
pub(crate) fn has_compiler(home: &Path) -> bool {
    home.join("bin").join(compiler_file_name()).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_expand_bare_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home_dir("~"), home);
        }
    }

    #[test]
    fn test_expand_tilde_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home_dir("~/jdks/17"), home.join("jdks/17"));
        }
    }

    #[test]
    fn test_no_expansion_for_other_users() {
        assert_eq!(expand_home_dir("~alice/jdk"), PathBuf::from("~alice/jdk"));
    }

    #[test]
    fn test_absolute_path_untouched() {
        assert_eq!(expand_home_dir("/opt/jdk"), PathBuf::from("/opt/jdk"));
    }

    #[test]
    fn test_normalize_missing_path_is_kept() {
        let raw = "/definitely/not/a/real/jdk/12345";
        assert_eq!(normalize_home(raw), PathBuf::from(raw));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_follows_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("jdk-17.0.2");
        fs::create_dir_all(&real).unwrap();
        let link = dir.path().join("current");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let normalized = normalize_home(link.to_str().unwrap());
        assert_eq!(normalized, fs::canonicalize(&real).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_dangling_symlink_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("broken");
        std::os::unix::fs::symlink(dir.path().join("gone"), &link).unwrap();

        assert!(!normalize_home(link.to_str().unwrap()).exists());
    }

    #[test]
    fn test_has_compiler() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!has_compiler(dir.path()));

        fs::create_dir_all(dir.path().join("bin")).unwrap();
        fs::write(dir.path().join("bin").join(compiler_file_name()), "").unwrap();
        assert!(has_compiler(dir.path()));
    }
}
