//! Filename screening against a blocklist snapshot.
//!
//! Screening never mutates anything and never fails: every filename ends
//! up accepted or rejected, and a name the parser finds no extension in
//! is simply accepted.

use crate::models::BlocklistSnapshot;
use crate::utils::validation::candidate_extensions;

/// One rejected filename together with the extension segment that
/// matched the blocklist. The segment never leaves the server; it feeds
/// the rejection log line.
#[derive(Debug, Clone)]
pub struct RejectedFile {
    pub filename: String,
    pub extension: String,
}

/// Outcome of screening one upload batch against a single snapshot.
#[derive(Debug, Default)]
pub struct ScreeningOutcome {
    pub accepted: Vec<String>,
    pub rejected: Vec<RejectedFile>,
}

/// Partitions a batch of filenames into accepted and rejected. A file is
/// rejected as soon as any of its extension segments is blocked; the
/// first matching segment is the one reported.
pub fn screen_filenames<I, S>(filenames: I, snapshot: &BlocklistSnapshot) -> ScreeningOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ScreeningOutcome::default();

    for filename in filenames {
        let filename = filename.as_ref();
        match blocked_extension(filename, snapshot) {
            Some(extension) => outcome.rejected.push(RejectedFile {
                filename: filename.to_string(),
                extension,
            }),
            None => outcome.accepted.push(filename.to_string()),
        }
    }

    outcome
}

/// First extension segment of `filename` the snapshot blocks, if any.
pub fn blocked_extension(filename: &str, snapshot: &BlocklistSnapshot) -> Option<String> {
    candidate_extensions(filename).find(|segment| snapshot.is_blocked(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(blocked: &[&str]) -> BlocklistSnapshot {
        blocked.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_files_with_harmless_extensions() {
        let outcome = screen_filenames(["report.pdf", "notes.txt"], &snapshot(&["exe"]));
        assert_eq!(outcome.accepted, ["report.pdf", "notes.txt"]);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn rejects_on_the_final_extension() {
        let outcome = screen_filenames(["tool.exe"], &snapshot(&["exe"]));
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected[0].filename, "tool.exe");
        assert_eq!(outcome.rejected[0].extension, "exe");
    }

    #[test]
    fn rejects_disguised_extensions_in_the_middle() {
        let outcome = screen_filenames(["report.exe.txt"], &snapshot(&["exe"]));
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].extension, "exe");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let outcome = screen_filenames(["VIRUS.EXE"], &snapshot(&["exe"]));
        assert_eq!(outcome.rejected.len(), 1);
    }

    #[test]
    fn accepts_names_without_any_extension() {
        let outcome = screen_filenames(["archive", ".", "..", "README."], &snapshot(&["exe"]));
        assert_eq!(outcome.accepted.len(), 4);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn leading_dot_names_still_have_their_segments_checked() {
        let blocklist = snapshot(&["exe"]);
        assert_eq!(blocked_extension(".exe", &blocklist), Some("exe".into()));
        assert_eq!(blocked_extension(".bashrc", &blocklist), None);
    }

    #[test]
    fn a_trailing_dot_does_not_hide_a_blocked_extension() {
        assert_eq!(
            blocked_extension("tool.exe.", &snapshot(&["exe"])),
            Some("exe".into())
        );
    }

    #[test]
    fn an_empty_snapshot_accepts_everything() {
        let outcome = screen_filenames(["virus.exe", "run.bat"], &snapshot(&[]));
        assert_eq!(outcome.accepted.len(), 2);
    }

    #[test]
    fn partitions_a_mixed_batch_in_order() {
        let outcome = screen_filenames(
            ["a.txt", "b.exe", "c.pdf", "d.py"],
            &snapshot(&["exe", "py"]),
        );
        assert_eq!(outcome.accepted, ["a.txt", "c.pdf"]);
        assert_eq!(outcome.rejected.len(), 2);
        assert_eq!(outcome.rejected[0].filename, "b.exe");
        assert_eq!(outcome.rejected[1].filename, "d.py");
    }
}
