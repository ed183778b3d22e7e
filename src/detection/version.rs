//! Java version banner capture.

use crate::FailureKind;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::warn;

/// Run `java -version` and return what it wrote to stderr.
///
/// The JVM prints its banner to stderr, and some launchers exit nonzero on a
/// version query, so the exit status is ignored. A launcher that cannot be
/// spawned yields an empty banner, which parses as version 0.
///
/// # Errors
///
/// `FailureKind::TimedOut` if `limit` is set and elapses first. The child is
/// killed when its future is dropped.
pub(crate) async fn read_version_banner(
    java: &Path,
    limit: Option<Duration>,
) -> Result<String, FailureKind> {
    let mut cmd = Command::new(java);
    cmd.arg("-version").stdin(Stdio::null()).kill_on_drop(true);

    let output = match limit {
        Some(after) => timeout(after, cmd.output())
            .await
            .map_err(|_| FailureKind::TimedOut { after })?,
        None => cmd.output().await,
    };

    match output {
        Ok(output) => Ok(String::from_utf8_lossy(&output.stderr).into_owned()),
        Err(e) => {
            warn!("Failed to run {:?} -version: {}", java, e);
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test(flavor = "current_thread")]
    async fn test_nonexistent_launcher_gives_empty_banner() {
        let path = PathBuf::from("/nonexistent/path/to/java");
        let banner = read_version_banner(&path, None).await.unwrap();
        assert!(banner.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_captures_stderr_not_stdout() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let java = dir.path().join("java");
        std::fs::write(
            &java,
            "#!/bin/sh\necho 'stdout noise'\necho 'openjdk version \"17.0.2\"' >&2\nexit 1\n",
        )
        .unwrap();
        std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).unwrap();

        let banner = read_version_banner(&java, None).await.unwrap();
        assert!(banner.contains("openjdk version \"17.0.2\""));
        assert!(!banner.contains("stdout noise"));
    }

    #[cfg(unix)]
    #[tokio::test(flavor = "current_thread")]
    async fn test_timeout() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let java = dir.path().join("java");
        std::fs::write(&java, "#!/bin/sh\nsleep 5\n").unwrap();
        std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).unwrap();

        let limit = Duration::from_millis(100);
        let result = read_version_banner(&java, Some(limit)).await;
        assert_eq!(result, Err(FailureKind::TimedOut { after: limit }));
    }
}
