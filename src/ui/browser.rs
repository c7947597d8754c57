use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Single-selection file chooser limited to a set of extensions.
///
/// Directories are listed first, then matching files, both sorted
/// case-insensitively. A `..` entry leads to the parent directory.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    dir: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    extensions: Vec<String>,
    show_hidden: bool,
    error: Option<String>,
}

impl FileBrowser {
    pub fn open(dir: impl Into<PathBuf>, extensions: &[String]) -> Self {
        let mut browser = Self {
            dir: dir.into(),
            entries: Vec::new(),
            selected: 0,
            extensions: extensions.to_vec(),
            show_hidden: false,
            error: None,
        };
        browser.refresh();
        browser
    }

    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected = 0;
        self.error = None;

        if let Some(parent) = self.dir.parent() {
            self.entries.push(Entry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            });
        }

        let listing = match fs::read_dir(&self.dir) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "browser_read_dir_failed");
                self.error = Some(e.to_string());
                return;
            }
        };

        let mut found: Vec<Entry> = listing
            .flatten()
            .filter_map(|item| {
                let path = item.path();
                let name = item.file_name().to_string_lossy().into_owned();
                if !self.show_hidden && name.starts_with('.') {
                    return None;
                }
                if path.is_dir() {
                    Some(Entry {
                        name,
                        path,
                        kind: EntryKind::Directory,
                    })
                } else if self.matches(&path) {
                    Some(Entry {
                        name,
                        path,
                        kind: EntryKind::File,
                    })
                } else {
                    None
                }
            })
            .collect();

        found.sort_by(compare_entries);
        self.entries.extend(found);
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    /// Enters the highlighted directory, or returns the highlighted file.
    pub fn activate(&mut self) -> Option<PathBuf> {
        let entry = self.entries.get(self.selected)?.clone();
        match entry.kind {
            EntryKind::File => Some(entry.path),
            EntryKind::Parent => {
                self.go_up();
                None
            }
            EntryKind::Directory => {
                self.dir = entry.path;
                self.refresh();
                None
            }
        }
    }

    /// Moves to the parent directory, keeping the one we came from highlighted.
    pub fn go_up(&mut self) {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return;
        };
        let previous = std::mem::replace(&mut self.dir, parent);
        self.refresh();
        if let Some(index) = self.entries.iter().position(|e| e.path == previous) {
            self.selected = index;
        }
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.refresh();
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    let rank = |entry: &Entry| match entry.kind {
        EntryKind::Parent => 0,
        EntryKind::Directory => 1,
        EntryKind::File => 2,
    };
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn exts() -> Vec<String> {
        vec!["wav".to_string(), "aif".to_string(), "aiff".to_string()]
    }

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("Zeta")).unwrap();
        fs::create_dir(root.join("alpha")).unwrap();
        fs::create_dir(root.join(".cache")).unwrap();
        for name in ["b.WAV", "a.aiff", "notes.txt", ".hidden.wav", "song.mp3"] {
            File::create(root.join(name)).unwrap();
        }
        File::create(root.join("alpha").join("inner.aif")).unwrap();
        dir
    }

    fn names(browser: &FileBrowser) -> Vec<&str> {
        browser.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn lists_directories_first_then_matching_files() {
        let dir = tree();
        let browser = FileBrowser::open(dir.path(), &exts());
        assert_eq!(names(&browser), vec!["..", "alpha", "Zeta", "a.aiff", "b.WAV"]);
    }

    #[test]
    fn hidden_entries_can_be_shown() {
        let dir = tree();
        let mut browser = FileBrowser::open(dir.path(), &exts());
        browser.toggle_hidden();
        assert_eq!(
            names(&browser),
            vec!["..", ".cache", "alpha", "Zeta", ".hidden.wav", "a.aiff", "b.WAV"]
        );
    }

    #[test]
    fn descends_and_picks_a_file() {
        let dir = tree();
        let mut browser = FileBrowser::open(dir.path(), &exts());

        browser.select_next();
        assert_eq!(browser.activate(), None);
        assert_eq!(browser.dir(), dir.path().join("alpha"));
        assert_eq!(names(&browser), vec!["..", "inner.aif"]);

        browser.select_last();
        assert_eq!(
            browser.activate(),
            Some(dir.path().join("alpha").join("inner.aif"))
        );
    }

    #[test]
    fn going_up_highlights_the_directory_we_left() {
        let dir = tree();
        let mut browser = FileBrowser::open(dir.path().join("Zeta"), &exts());
        browser.go_up();
        assert_eq!(browser.dir(), dir.path());
        assert_eq!(browser.entries()[browser.selected()].name, "Zeta");
    }

    #[test]
    fn selection_stays_in_bounds() {
        let dir = tree();
        let mut browser = FileBrowser::open(dir.path(), &exts());
        browser.select_previous();
        assert_eq!(browser.selected(), 0);
        for _ in 0..20 {
            browser.select_next();
        }
        assert_eq!(browser.selected(), browser.entries().len() - 1);
    }

    #[test]
    fn unreadable_directory_reports_an_error() {
        let dir = tree();
        let browser = FileBrowser::open(dir.path().join("missing"), &exts());
        assert!(browser.error().is_some());
        assert_eq!(names(&browser), vec![".."]);
    }
}
