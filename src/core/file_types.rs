//! Extension histogram over tracked files.

use std::collections::BTreeMap;

/// Group label for paths that carry no extension.
pub const NO_EXTENSION: &str = "sans extension";

/// Number of groups shown in project insights.
pub const TOP_FILE_TYPES: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTypeHistogram {
    counts: BTreeMap<String, usize>,
}

impl FileTypeHistogram {
    pub fn count(&self, extension: &str) -> usize {
        self.counts.get(extension).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Groups ordered by descending count; equal counts keep extension order.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut groups: Vec<_> = self
            .counts
            .iter()
            .map(|(ext, count)| (ext.as_str(), *count))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups
    }

    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut groups = self.sorted();
        groups.truncate(limit);
        groups
    }
}

/// Suffix from the last `.` of the final path component, dot included.
/// Dotfiles such as `.gitignore` are their own group.
fn extension_label(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) => name[dot..].to_string(),
        None => NO_EXTENSION.to_string(),
    }
}

/// Count tracked paths per extension, ignoring blank entries.
pub fn analyze_file_types<I, S>(paths: I) -> FileTypeHistogram
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut histogram = FileTypeHistogram::default();
    for path in paths {
        let path = path.as_ref().trim();
        if path.is_empty() {
            continue;
        }
        *histogram.counts.entry(extension_label(path)).or_insert(0) += 1;
    }
    histogram
}
