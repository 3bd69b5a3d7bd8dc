use std::path::{Path, PathBuf};
use waf_core::paths::DATA_SOURCE_DIR;

/// Resolve the source data directory.
///
/// Priority:
/// 1. `--data-dir` flag / `WAF_DATA_DIR` env var (passed in as `explicit`)
/// 2. Walk upward from the executable's directory looking for `data/source/`
/// 3. Fall back to `./data/source`
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(found) = exe_dir.as_deref().and_then(find_data_dir) {
        return found;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    cwd.join(DATA_SOURCE_DIR)
}

/// Walk upward from `start` looking for a `data/source` directory.
pub fn find_data_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DATA_SOURCE_DIR))
        .find(|candidate| candidate.is_dir())
}

/// Resolve the generator's output directory: `explicit` when given, else the
/// parent of the data directory (`data/source` → `data`).
pub fn resolve_out_dir(explicit: Option<&Path>, data_dir: &Path) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    data_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| data_dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_data_dir_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_data_dir(Some(dir.path())), dir.path());
    }

    #[test]
    fn finds_data_dir_above_start() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data/source")).unwrap();
        let deep = dir.path().join("scripts/bin");
        std::fs::create_dir_all(&deep).unwrap();

        assert_eq!(find_data_dir(&deep), Some(dir.path().join("data/source")));
    }

    #[test]
    fn out_dir_defaults_to_data_parent() {
        let data = Path::new("/srv/waf/data/source");
        assert_eq!(resolve_out_dir(None, data), PathBuf::from("/srv/waf/data"));
        assert_eq!(
            resolve_out_dir(Some(Path::new("/tmp/out")), data),
            PathBuf::from("/tmp/out")
        );
    }
}
