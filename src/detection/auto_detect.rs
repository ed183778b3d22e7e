//! Platform-native Java home detection.

use super::home::compiler_file_name;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find a JDK without any user-provided hint.
///
/// On macOS `/usr/libexec/java_home` is asked first, since `/usr/bin/javac`
/// there is a stub rather than a link into a JDK. Everywhere else (and as the
/// macOS fallback) the compiler is looked up on `PATH` and its real location
/// determines the home.
///
/// Returns `None` if nothing usable is found; errors along the way are logged
/// and treated the same.
pub(crate) async fn detect_java_home() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = macos_java_home().await {
            return Some(home);
        }
    }

    compiler_on_path()
}

/// Derive the home from `javac` on `PATH`, following alternatives links.
fn compiler_on_path() -> Option<PathBuf> {
    match which::which(compiler_file_name()) {
        Ok(javac) => home_from_compiler(&javac),
        Err(e) => {
            debug!("javac not found on PATH: {}", e);
            None
        }
    }
}

/// `<home>/bin/javac` -> `<home>`, after resolving symlinks.
fn home_from_compiler(javac: &Path) -> Option<PathBuf> {
    let real = std::fs::canonicalize(javac).ok()?;
    let bin = real.parent()?;
    if bin.file_name()? != "bin" {
        debug!("javac at {:?} is not inside a bin directory", real);
        return None;
    }
    bin.parent().map(Path::to_path_buf)
}

#[cfg(target_os = "macos")]
async fn macos_java_home() -> Option<PathBuf> {
    use tokio::process::Command;

    let output = match Command::new("/usr/libexec/java_home")
        .kill_on_drop(true)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("Failed to run /usr/libexec/java_home: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        return None;
    }

    let home = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    home.is_dir().then_some(home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_home_from_compiler_layout() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("jdk-17").join("bin");
        fs::create_dir_all(&bin).unwrap();
        let javac = bin.join(compiler_file_name());
        fs::write(&javac, "").unwrap();

        let home = home_from_compiler(&javac).unwrap();
        assert_eq!(home, fs::canonicalize(dir.path().join("jdk-17")).unwrap());
    }

    #[test]
    fn test_home_from_compiler_outside_bin() {
        let dir = tempfile::tempdir().unwrap();
        let javac = dir.path().join(compiler_file_name());
        fs::write(&javac, "").unwrap();

        assert!(home_from_compiler(&javac).is_none());
    }

    #[test]
    fn test_home_from_missing_compiler() {
        assert!(home_from_compiler(Path::new("/nonexistent/bin/javac")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_home_from_compiler_follows_alternatives_link() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("jvm").join("java-21").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("javac"), "").unwrap();

        let alternatives = dir.path().join("usr-bin");
        fs::create_dir_all(&alternatives).unwrap();
        let link = alternatives.join("javac");
        std::os::unix::fs::symlink(bin.join("javac"), &link).unwrap();

        let home = home_from_compiler(&link).unwrap();
        assert_eq!(
            home,
            fs::canonicalize(dir.path().join("jvm").join("java-21")).unwrap()
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_detect_java_home_result_is_a_jdk() {
        // Depends on the host; only check consistency when something is found.
        if let Some(home) = detect_java_home().await {
            assert!(home.exists());
        }
    }
}
