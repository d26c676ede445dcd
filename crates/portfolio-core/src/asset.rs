//! Asset resolution
//!
//! Image identifiers are raw file names (spaces, `&`, non-ASCII and even a
//! trailing space are all legal). They are turned into relative URLs by
//! percent-encoding every `/`-separated segment on its own, so directory
//! separators survive while everything inside a segment is escaped.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};

/// Path separator inside image identifiers
const SEGMENT_SEPARATOR: char = '/';

/// Encode an image identifier into a relative URL.
///
/// Only `A-Z a-z 0-9 - _ . ~` pass through, so `! ' ( ) *` are escaped as
/// well (stricter than a browser's `encodeURIComponent`, same resolution).
///
/// ```
/// use portfolio_core::asset::encode_file_path;
///
/// assert_eq!(encode_file_path("Scan of roses.png"), "Scan%20of%20roses.png");
/// assert_eq!(encode_file_path("pottery/Bowl & cup.jpeg"), "pottery/Bowl%20%26%20cup.jpeg");
/// ```
pub fn encode_file_path(identifier: &str) -> String {
    identifier
        .split(SEGMENT_SEPARATOR)
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode a URL produced by [`encode_file_path`] back into the identifier.
pub fn decode_file_path(url: &str) -> PortfolioResult<String> {
    url.split(SEGMENT_SEPARATOR)
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|s| s.into_owned())
                .map_err(|_| PortfolioError::InvalidEncoding(url.to_string()))
        })
        .collect::<PortfolioResult<Vec<_>>>()
        .map(|segments| segments.join("/"))
}

/// Record a failed image load.
///
/// The page hides the failing image and carries on; this is the only
/// trace the failure leaves.
pub fn log_load_failure(identifier: &str) {
    tracing::error!(
        identifier = %identifier,
        url = %encode_file_path(identifier),
        "Failed to load image"
    );
}

/// Record a successful image load.
pub fn log_load_success(identifier: &str) {
    tracing::debug!(identifier = %identifier, "Loaded image");
}

/// A catalog identifier with no file behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAsset {
    pub identifier: String,
    pub path: PathBuf,
}

impl From<MissingAsset> for PortfolioError {
    fn from(missing: MissingAsset) -> Self {
        PortfolioError::MissingAsset {
            identifier: missing.identifier,
            path: missing.path,
        }
    }
}

/// Outcome of auditing an asset directory against a list of identifiers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    /// Number of identifiers checked
    pub checked: usize,
    /// Identifiers whose file was not found, in catalog order
    pub missing: Vec<MissingAsset>,
}

impl AuditReport {
    /// True when every identifier resolved to a file
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Convert into a result, failing on the first missing asset
    pub fn into_result(self) -> PortfolioResult<usize> {
        match self.missing.into_iter().next() {
            Some(missing) => Err(missing.into()),
            None => Ok(self.checked),
        }
    }
}

/// Directory the page's relative image URLs resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    dir: PathBuf,
}

impl AssetRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Local path of an identifier, joined segment by segment.
    pub fn resolve(&self, identifier: &str) -> PathBuf {
        identifier
            .split(SEGMENT_SEPARATOR)
            .fold(self.dir.clone(), |path, segment| path.join(segment))
    }

    /// Check that every identifier exists as a file under this root.
    ///
    /// Missing files are logged and collected; the audit never stops early.
    pub fn audit<'a, I>(&self, identifiers: I) -> AuditReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = AuditReport::default();

        for identifier in identifiers {
            report.checked += 1;
            let path = self.resolve(identifier);
            if !path.is_file() {
                tracing::warn!(identifier = %identifier, path = %path.display(), "Asset missing");
                report.missing.push(MissingAsset {
                    identifier: identifier.to_string(),
                    path,
                });
            }
        }

        tracing::info!(
            checked = report.checked,
            missing = report.missing.len(),
            "Asset audit finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_encode_spaces() {
        assert_eq!(
            encode_file_path("Scan of birthday candles.png"),
            "Scan%20of%20birthday%20candles.png"
        );
    }

    #[test]
    fn test_encode_keeps_trailing_space() {
        assert_eq!(encode_file_path("Scan of poppies .png"), "Scan%20of%20poppies%20.png");
    }

    #[test]
    fn test_encode_segments_independently() {
        assert_eq!(encode_file_path("a b/c#d/e?f"), "a%20b/c%23d/e%3Ff");
    }

    #[test]
    fn test_encode_plain_name_unchanged() {
        assert_eq!(encode_file_path("Bowl_ocean_1.jpeg"), "Bowl_ocean_1.jpeg");
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(encode_file_path("café.png"), "caf%C3%A9.png");
    }

    #[test]
    fn test_decode_round_trip() {
        let name = "pottery/Bowl - Green & White (1).jpeg";
        assert_eq!(decode_file_path(&encode_file_path(name)).unwrap(), name);
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode_file_path("bad%FF.png").unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidEncoding(_)));
    }

    /// Writer handing out clones of one shared buffer
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// Run `f` under a plain-text fmt subscriber and return what it logged
    fn capture_logs(max_level: tracing::Level, f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        logs.contents()
    }

    #[test]
    fn test_load_failure_logs_identifier_and_url() {
        let output = capture_logs(tracing::Level::TRACE, || {
            log_load_failure("Scan of poppies .png");
        });

        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("ERROR"));
        assert!(output.contains("Failed to load image"));
        assert!(output.contains("identifier=Scan of poppies .png"));
        assert!(output.contains("url=Scan%20of%20poppies%20.png"));
    }

    #[test]
    fn test_load_success_logs_at_debug_only() {
        let output = capture_logs(tracing::Level::TRACE, || {
            log_load_success("Bowl_sand_1.jpeg");
        });
        assert!(output.contains("DEBUG"));
        assert!(!output.contains("ERROR"));
        assert!(output.contains("Bowl_sand_1.jpeg"));

        let quiet = capture_logs(tracing::Level::INFO, || {
            log_load_success("Bowl_sand_1.jpeg");
        });
        assert!(quiet.is_empty());
    }

    #[test]
    fn test_encode_escapes_sub_delims() {
        assert_eq!(encode_file_path("Bowl (1)!.jpeg"), "Bowl%20%281%29%21.jpeg");
    }

    #[test]
    fn test_resolve_joins_segments() {
        let root = AssetRoot::new("/srv/site");
        assert_eq!(
            root.resolve("pottery/Bowl_sand_1.jpeg"),
            PathBuf::from("/srv/site/pottery/Bowl_sand_1.jpeg")
        );
    }

    #[test]
    fn test_audit_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"png").unwrap();

        let root = AssetRoot::new(dir.path());
        let report = root.audit(["a.png", "b.png"]);

        assert_eq!(report.checked, 2);
        assert!(!report.is_complete());
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].identifier, "b.png");
        assert!(matches!(
            report.into_result(),
            Err(PortfolioError::MissingAsset { .. })
        ));
    }

    #[test]
    fn test_audit_complete() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Scan of poppies .png"), b"png").unwrap();

        let report = AssetRoot::new(dir.path()).audit(["Scan of poppies .png"]);
        assert!(report.is_complete());
        assert_eq!(report.into_result().unwrap(), 1);
    }
}
