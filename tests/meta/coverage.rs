//! Keeps `tests/unit` a mirror of `src`: every library file has a test file
//! of the same relative path, and every test file holds at least one test

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TESTS_ROOT: &str = "tests";

    // Module wiring and binaries carry no logic of their own
    fn needs_mirror(relative: &Path) -> bool {
        !(relative.starts_with("bin")
            || relative == Path::new("lib.rs")
            || relative.file_name().is_some_and(|name| name == "mod.rs"))
    }

    fn rust_files(root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.push(path);
                }
            }
        }

        found.sort();
        Ok(found)
    }

    fn mirrored_paths(root: &str) -> BTreeSet<PathBuf> {
        let root = Path::new(root);
        let files = rust_files(root);
        assert!(files.is_ok(), "cannot walk {}: {files:?}", root.display());

        files
            .unwrap_or_default()
            .into_iter()
            .filter_map(|path| path.strip_prefix(root).ok().map(Path::to_path_buf))
            .filter(|relative| needs_mirror(relative))
            .collect()
    }

    fn report(paths: &[&PathBuf], from: &str, to: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {from}/{0} -> {to}/{0}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = mirrored_paths(SOURCE_ROOT);
        let units = mirrored_paths(UNIT_ROOT);

        let missing: Vec<_> = sources.difference(&units).collect();
        assert!(
            missing.is_empty(),
            "Source files without a unit test file:\n{}",
            report(&missing, SOURCE_ROOT, UNIT_ROOT)
        );
    }

    #[test]
    fn test_every_unit_test_file_has_a_source() {
        let sources = mirrored_paths(SOURCE_ROOT);
        let units = mirrored_paths(UNIT_ROOT);

        let orphaned: Vec<_> = units.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            report(&orphaned, UNIT_ROOT, SOURCE_ROOT)
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let files = rust_files(Path::new(TESTS_ROOT)).unwrap_or_default();

        let empty: Vec<String> = files
            .iter()
            .filter(|path| path.file_name().is_some_and(|name| name != "mod.rs"))
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
