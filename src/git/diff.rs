/// How a file changed between two tree snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Copied => "copied",
            ChangeKind::TypeChanged => "typechanged",
        }
    }

    /// Whether this kind participates in class-level attribution.
    /// Renamed/Copied/TypeChanged entries are ignored by policy; the diff
    /// is computed without rename detection, so renames arrive as
    /// independent Added + Deleted entries and are attributed that way.
    pub fn is_attributable(&self) -> bool {
        matches!(
            self,
            ChangeKind::Added | ChangeKind::Modified | ChangeKind::Deleted
        )
    }
}

impl From<git2::Delta> for ChangeKind {
    fn from(delta: git2::Delta) -> Self {
        match delta {
            git2::Delta::Added => ChangeKind::Added,
            git2::Delta::Deleted => ChangeKind::Deleted,
            git2::Delta::Renamed => ChangeKind::Renamed,
            git2::Delta::Copied => ChangeKind::Copied,
            git2::Delta::Typechange => ChangeKind::TypeChanged,
            _ => ChangeKind::Modified,
        }
    }
}

/// One file-level change between two commits
#[derive(Debug, Clone)]
pub struct FileDiffEntry {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub kind: ChangeKind,
}

impl FileDiffEntry {
    /// The path on the new side, falling back to the old side for deletions
    pub fn display_path(&self) -> &str {
        self.new_path
            .as_deref()
            .or(self.old_path.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributable_kinds() {
        assert!(ChangeKind::Added.is_attributable());
        assert!(ChangeKind::Modified.is_attributable());
        assert!(ChangeKind::Deleted.is_attributable());
        assert!(!ChangeKind::Renamed.is_attributable());
        assert!(!ChangeKind::Copied.is_attributable());
        assert!(!ChangeKind::TypeChanged.is_attributable());
    }

    #[test]
    fn test_display_path_prefers_new_side() {
        let entry = FileDiffEntry {
            old_path: Some("old/A.java".to_string()),
            new_path: Some("new/A.java".to_string()),
            kind: ChangeKind::Modified,
        };
        assert_eq!(entry.display_path(), "new/A.java");

        let deleted = FileDiffEntry {
            old_path: Some("gone/B.java".to_string()),
            new_path: None,
            kind: ChangeKind::Deleted,
        };
        assert_eq!(deleted.display_path(), "gone/B.java");
    }
}
