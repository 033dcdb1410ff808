//! Config file patching.
//!
//! Rewrites the two development-URL constants in the mobile client's API
//! config so they point at the resolved LAN address. The file is treated
//! as plain text: only the single-quoted URL literal assigned to each
//! named constant is replaced, everything else is preserved byte-for-byte.
//! The assignment format is a fixed, narrow contract; no Dart parsing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::LanlinkError;
use crate::fs_abstraction::FileSystem;

/// Relative path of the mobile client's API configuration source.
pub const DEFAULT_CONFIG_PATH: &str = "frontend/lib/config/api_config.dart";

/// Port the development server listens on.
pub const DEV_SERVER_PORT: u16 = 4000;

/// Per-pattern rewrite counts from a patch run.
///
/// Zero counts are not an error: a file carrying neither assignment is
/// rewritten to itself and the run still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchReport {
    /// Rewrites of the mobileDevBaseUrl assignment
    pub base_url: usize,
    /// Rewrites of the mobileDevServerUrl assignment
    pub server_url: usize,
}

impl PatchReport {
    pub fn total(&self) -> usize {
        self.base_url + self.server_url
    }
}

/// Rewrite the dev URLs in `path` to point at `ip`:`port`.
///
/// `mobileDevBaseUrl` receives `http://<ip>:<port>/api`,
/// `mobileDevServerUrl` receives `http://<ip>:<port>`. A missing file is
/// a reported failure and nothing is written.
pub fn patch_api_config(
    fs: &dyn FileSystem,
    path: &Path,
    ip: &str,
    port: u16,
) -> Result<PatchReport, LanlinkError> {
    if !fs.exists(path) {
        return Err(LanlinkError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs
        .read_to_string(path)
        .map_err(|e| LanlinkError::FileSystem(format!("read {}: {}", path.display(), e)))?;

    let (content, base_url) = rewrite_quoted_url(
        &content,
        "mobileDevBaseUrl",
        &format!("http://{}:{}/api", ip, port),
    );
    let (content, server_url) = rewrite_quoted_url(
        &content,
        "mobileDevServerUrl",
        &format!("http://{}:{}", ip, port),
    );

    write_atomic(fs, path, content.as_bytes())?;

    Ok(PatchReport {
        base_url,
        server_url,
    })
}

/// Write via a sibling temp file and rename, so a failure mid-write never
/// leaves a truncated config behind.
fn write_atomic(fs: &dyn FileSystem, path: &Path, contents: &[u8]) -> Result<(), LanlinkError> {
    let mut tmp_name = OsString::from(path.as_os_str());
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs.write(&tmp, contents)
        .map_err(|e| LanlinkError::FileSystem(format!("write {}: {}", tmp.display(), e)))?;
    fs.rename(&tmp, path)
        .map_err(|e| LanlinkError::FileSystem(format!("rename {}: {}", tmp.display(), e)))?;

    Ok(())
}

/// Replace the single-quoted `http://` literal assigned to `name`,
/// everywhere it occurs. Returns the rewritten text and the number of
/// replacements made.
///
/// The match is anchored to the exact literal format
/// `<name> = 'http://<non-empty, no quote>'`; an empty or unterminated
/// literal is left untouched.
fn rewrite_quoted_url(content: &str, name: &str, url: &str) -> (String, usize) {
    let needle = format!("{} = 'http://", name);
    // Byte offset of the character right after the opening quote.
    let quote_end = name.len() + " = '".len();

    let mut result = String::with_capacity(content.len());
    let mut rest = content;
    let mut count = 0;

    while let Some(at) = rest.find(&needle) {
        let tail_start = at + needle.len();
        let tail = &rest[tail_start..];
        match tail.find('\'') {
            Some(close) if close > 0 => {
                result.push_str(&rest[..at + quote_end]);
                result.push_str(url);
                count += 1;
                rest = &tail[close..];
            }
            _ => {
                // Empty or unterminated literal: not a match, skip past.
                result.push_str(&rest[..tail_start]);
                rest = tail;
            }
        }
    }

    result.push_str(rest);
    (result, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_abstraction::{MockFileSystem, RealFileSystem};
    use std::io;
    use tempfile::TempDir;

    const FIXTURE: &str = "\
class ApiConfig {
  static const String baseUrl = 'http://localhost:4000/api';
  static const String mobileDevBaseUrl = 'http://1.2.3.4:4000/api';
  static const String mobileDevServerUrl = 'http://1.2.3.4:4000';
  static const int timeoutSeconds = 30;
}
";

    fn write_fixture(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("api_config.dart");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_patch_rewrites_both_assignments() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, FIXTURE);

        let report = patch_api_config(&RealFileSystem, &path, "10.0.0.9", 4000).unwrap();
        assert_eq!(report.base_url, 1);
        assert_eq!(report.server_url, 1);

        let updated = std::fs::read_to_string(&path).unwrap();
        let expected = "\
class ApiConfig {
  static const String baseUrl = 'http://localhost:4000/api';
  static const String mobileDevBaseUrl = 'http://10.0.0.9:4000/api';
  static const String mobileDevServerUrl = 'http://10.0.0.9:4000';
  static const int timeoutSeconds = 30;
}
";
        assert_eq!(updated, expected);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, FIXTURE);

        patch_api_config(&RealFileSystem, &path, "10.0.0.9", 4000).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        patch_api_config(&RealFileSystem, &path, "10.0.0.9", 4000).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_patch_no_match_leaves_file_identical() {
        let dir = TempDir::new().unwrap();
        let content = "class ApiConfig {\n  static const int timeoutSeconds = 30;\n}\n";
        let path = write_fixture(&dir, content);

        let report = patch_api_config(&RealFileSystem, &path, "10.0.0.9", 4000).unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_patch_missing_file_reports_and_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("api_config.dart");

        let err = patch_api_config(&RealFileSystem, &path, "10.0.0.9", 4000).unwrap_err();
        assert!(matches!(err, LanlinkError::ConfigNotFound(_)));
        assert!(!path.exists());
        assert!(dir.path().read_dir().unwrap().next().is_none());
    }

    #[test]
    fn test_patch_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, FIXTURE);

        patch_api_config(&RealFileSystem, &path, "192.168.1.7", 4000).unwrap();

        let entries: Vec<_> = dir
            .path()
            .read_dir()
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("api_config.dart")]);
    }

    #[test]
    fn test_patch_honors_port_override() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, FIXTURE);

        patch_api_config(&RealFileSystem, &path, "10.0.0.9", 8080).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        assert!(updated.contains("mobileDevBaseUrl = 'http://10.0.0.9:8080/api'"));
        assert!(updated.contains("mobileDevServerUrl = 'http://10.0.0.9:8080'"));
    }

    #[test]
    fn test_patch_read_error_surfaces_cause() {
        let mut mock = MockFileSystem::new();
        mock.expect_exists().returning(|_| true);
        mock.expect_read_to_string()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

        let err = patch_api_config(&mock, Path::new("api_config.dart"), "10.0.0.9", 4000)
            .unwrap_err();
        match err {
            LanlinkError::FileSystem(msg) => assert!(msg.contains("denied")),
            other => panic!("expected FileSystem error, got {:?}", other),
        }
    }

    #[test]
    fn test_patch_write_error_surfaces_cause() {
        let mut mock = MockFileSystem::new();
        mock.expect_exists().returning(|_| true);
        mock.expect_read_to_string()
            .returning(|_| Ok(FIXTURE.to_string()));
        mock.expect_write()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::Other, "disk full")));

        let err = patch_api_config(&mock, Path::new("api_config.dart"), "10.0.0.9", 4000)
            .unwrap_err();
        assert!(matches!(err, LanlinkError::FileSystem(_)));
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let content = "mobileDevBaseUrl = 'http://a:1/api'\nmobileDevBaseUrl = 'http://b:2/api'\n";
        let (out, count) = rewrite_quoted_url(content, "mobileDevBaseUrl", "http://c:3/api");
        assert_eq!(count, 2);
        assert_eq!(
            out,
            "mobileDevBaseUrl = 'http://c:3/api'\nmobileDevBaseUrl = 'http://c:3/api'\n"
        );
    }

    #[test]
    fn test_rewrite_requires_nonempty_literal() {
        let content = "mobileDevBaseUrl = 'http://';\n";
        let (out, count) = rewrite_quoted_url(content, "mobileDevBaseUrl", "http://x:1/api");
        assert_eq!(count, 0);
        assert_eq!(out, content);
    }

    #[test]
    fn test_rewrite_ignores_unterminated_literal() {
        let content = "mobileDevBaseUrl = 'http://1.2.3.4:4000/api";
        let (out, count) = rewrite_quoted_url(content, "mobileDevBaseUrl", "http://x:1/api");
        assert_eq!(count, 0);
        assert_eq!(out, content);
    }

    #[test]
    fn test_rewrite_ignores_other_constants() {
        let content = "devBaseUrl = 'http://keep.me:1/api'\n";
        let (out, count) = rewrite_quoted_url(content, "mobileDevBaseUrl", "http://x:1/api");
        assert_eq!(count, 0);
        assert_eq!(out, content);
    }
}
