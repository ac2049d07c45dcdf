//! Results-directory enumeration and rename application.
//!
//! The only code in the workspace that touches storage. Renames are applied
//! exactly once each and never re-entered concurrently on the same path;
//! callers decide when (and whether) a plan is applied.

use std::io;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::rewrite::RenamePlan;

/// Collect the leaf names of experiment directories under `dir`.
///
/// Only entries whose name starts with `json` qualify; everything else in a
/// results folder (plots, logs, scratch files) is ignored. Unreadable or
/// non-UTF-8 entries are logged and skipped. Names are returned sorted for
/// deterministic batch processing.
pub fn scan_results_dir(dir: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if name.starts_with("json") => names.push(name),
            Ok(_) => {}
            Err(raw) => warn!("skipping non-UTF-8 directory name: {:?}", raw),
        }
    }
    names.sort();
    Ok(names)
}

/// Apply rename plans under `dir`, returning how many were performed.
///
/// No-op plans are skipped. A plan whose target already exists aborts the
/// batch before touching it; renames that were already applied stay
/// applied. This cannot be undone.
pub fn apply_renames(dir: impl AsRef<Path>, plans: &[RenamePlan]) -> io::Result<usize> {
    let dir = dir.as_ref();
    let mut applied = 0;
    for plan in plans {
        if plan.is_noop() {
            debug!("unchanged: {}", plan.before);
            continue;
        }
        let target = dir.join(&plan.after);
        if target.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("rename target already exists: {}", target.display()),
            ));
        }
        std::fs::rename(dir.join(&plan.before), &target)?;
        info!("renamed: {} -> {}", plan.before, plan.after);
        applied += 1;
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(before: &str, after: &str) -> RenamePlan {
        RenamePlan {
            before: before.to_string(),
            after: after.to_string(),
        }
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("json_n8_btl2.0_b")).unwrap();
        std::fs::create_dir(dir.path().join("json_n4_btl1.0_a")).unwrap();
        std::fs::create_dir(dir.path().join("plots")).unwrap();
        std::fs::write(dir.path().join("json_notes.txt"), "x").unwrap();

        let names = scan_results_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["json_n4_btl1.0_a", "json_n8_btl2.0_b"]);
    }

    #[test]
    fn test_scan_missing_dir_fails() {
        assert!(scan_results_dir("/nonexistent/results").is_err());
    }

    #[test]
    fn test_apply_renames_moves_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("json_old")).unwrap();

        let applied = apply_renames(
            dir.path(),
            &[plan("json_old", "json_new"), plan("json_same", "json_same")],
        )
        .unwrap();

        assert_eq!(applied, 1);
        assert!(dir.path().join("json_new").is_dir());
        assert!(!dir.path().join("json_old").exists());
    }

    #[test]
    fn test_apply_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("json_a")).unwrap();
        std::fs::create_dir(dir.path().join("json_b")).unwrap();

        let err = apply_renames(dir.path(), &[plan("json_a", "json_b")]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(dir.path().join("json_a").is_dir());
    }
}
