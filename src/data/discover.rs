use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

// ---------------------------------------------------------------------------
// Mutated-ARF discovery
// ---------------------------------------------------------------------------

/// Find the mutated variants of `reference` in `dir`.
///
/// A variant's file name is `<stem>_<digit>…` with an extension, where
/// `<stem>` is the reference's file name without its extension (the pattern
/// `<stem>_[0-9]*.*`). Matches are sorted lexicographically by file name —
/// string order, so `_10` sorts before `_2` — and truncated to `limit` when
/// one is given. An empty result is not an error.
pub fn find_variants(
    reference: &Path,
    dir: &Path,
    limit: Option<usize>,
) -> Result<Vec<PathBuf>> {
    let stem = reference
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("reference path {} has no file stem", reference.display()))?;
    let prefix = format!("{stem}_");

    let entries = fs::read_dir(dir)
        .with_context(|| format!("listing directory {}", dir.display()))?;

    let mut variants: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing directory {}", dir.display()))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if is_variant_name(name, &prefix) {
            variants.push(path);
        }
    }

    variants.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if let Some(n) = limit {
        variants.truncate(n);
    }

    Ok(variants)
}

/// Match `<prefix><digit>…` where the tail after the digit contains a `.`
/// (i.e. the name carries an extension).
fn is_variant_name(name: &str, prefix: &str) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => chars.as_str().contains('.'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "arfplot_discover_{tag}_{}",
                std::process::id()
            ));
            fs::create_dir_all(&dir).unwrap();
            TempDir(dir)
        }

        fn touch(&self, name: &str) {
            File::create(self.0.join(name)).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn matches_stem_prefixed_files_only() {
        let dir = TempDir::new("stem");
        dir.touch("myarf_1.fits");
        dir.touch("myarf_2.fits");
        dir.touch("other.fits");
        dir.touch("myarf.fits");
        dir.touch("myarf_x.fits");

        let found = find_variants(Path::new("myarf.fits"), &dir.0, None).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["myarf_1.fits", "myarf_2.fits"]);
    }

    #[test]
    fn truncates_to_limit() {
        let dir = TempDir::new("limit");
        dir.touch("myarf_1.fits");
        dir.touch("myarf_2.fits");

        let found = find_variants(Path::new("myarf.fits"), &dir.0, Some(1)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file_name().unwrap(), "myarf_1.fits");
    }

    #[test]
    fn sorts_lexicographically_not_numerically() {
        let dir = TempDir::new("sort");
        dir.touch("myarf_2.fits");
        dir.touch("myarf_10.fits");

        let found = find_variants(Path::new("myarf.fits"), &dir.0, None).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        // String order: "10" before "2".
        assert_eq!(names, ["myarf_10.fits", "myarf_2.fits"]);
    }

    #[test]
    fn empty_directory_yields_no_variants() {
        let dir = TempDir::new("empty");
        let found = find_variants(Path::new("myarf.fits"), &dir.0, None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn requires_an_extension() {
        assert!(is_variant_name("myarf_1.fits", "myarf_"));
        assert!(is_variant_name("myarf_12a.arf", "myarf_"));
        assert!(!is_variant_name("myarf_1", "myarf_"));
        assert!(!is_variant_name("myarf_.fits", "myarf_"));
    }
}
