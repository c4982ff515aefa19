use crate::error::Result;
use crate::git::{ChangeKind, FileDiffEntry};
use crate::parser::{ClassUnit, SourceParser};
use std::collections::HashMap;
use tracing::warn;

/// Class-level change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
}

impl ChangeType {
    /// Single-letter code used in the output table
    pub fn code(&self) -> &'static str {
        match self {
            ChangeType::Added => "A",
            ChangeType::Modified => "M",
            ChangeType::Deleted => "D",
        }
    }
}

/// One class-level change within a single commit pair. The commit id is
/// attached at write time; this module never sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassChange {
    pub qualified_name: String,
    pub change: ChangeType,
}

/// Classify one file-level diff entry into class-level changes.
///
/// Content accessors are lazy so the backend is only asked for the blob
/// sides a change kind actually needs; accessor failures are backend
/// inconsistencies and propagate. Extraction failures are local: that
/// file version contributes zero units and processing continues.
///
/// Renamed/Copied/TypeChanged entries are a no-op by policy (see
/// `ChangeKind::is_attributable`).
pub fn classify_entry<P, FOld, FNew>(
    parser: &P,
    entry: &FileDiffEntry,
    source_extension: &str,
    old_content: FOld,
    new_content: FNew,
) -> Result<Vec<ClassChange>>
where
    P: SourceParser,
    FOld: FnOnce() -> Result<String>,
    FNew: FnOnce() -> Result<String>,
{
    match entry.kind {
        ChangeKind::Added => {
            if !tracked(entry.new_path.as_deref(), source_extension) {
                return Ok(Vec::new());
            }
            let units = units_or_empty(parser, &new_content()?, entry.display_path());
            Ok(all_as(units, ChangeType::Added))
        }
        ChangeKind::Deleted => {
            if !tracked(entry.old_path.as_deref(), source_extension) {
                return Ok(Vec::new());
            }
            let units = units_or_empty(parser, &old_content()?, entry.display_path());
            Ok(all_as(units, ChangeType::Deleted))
        }
        ChangeKind::Modified => {
            if !tracked(entry.new_path.as_deref(), source_extension) {
                return Ok(Vec::new());
            }
            let old_units = units_or_empty(parser, &old_content()?, entry.display_path());
            let new_units = units_or_empty(parser, &new_content()?, entry.display_path());
            Ok(reconcile(old_units, new_units))
        }
        _ => Ok(Vec::new()),
    }
}

fn tracked(path: Option<&str>, source_extension: &str) -> bool {
    path.is_some_and(|p| p.ends_with(source_extension))
}

fn units_or_empty<P: SourceParser>(parser: &P, source: &str, path: &str) -> Vec<ClassUnit> {
    match parser.extract_units(source) {
        Ok(units) => units,
        Err(err) => {
            warn!(path, %err, "file version contributes no units");
            Vec::new()
        }
    }
}

fn all_as(units: Vec<ClassUnit>, change: ChangeType) -> Vec<ClassChange> {
    units
        .into_iter()
        .map(|unit| ClassChange {
            qualified_name: unit.qualified_name,
            change,
        })
        .collect()
}

/// Three-way reconciliation for an in-place file edit. A single edit may
/// add one class, delete another, and leave a third untouched; the
/// file-level Modify status must not be propagated to every class in it.
///
/// Names present on both sides resolve first (body inequality is
/// Modified, equality is silence) and are consumed; what remains on the
/// new side only is Added, on the old side only is Deleted. Emission
/// order follows the new file's declaration order, then the old file's
/// for deletions.
fn reconcile(old_units: Vec<ClassUnit>, new_units: Vec<ClassUnit>) -> Vec<ClassChange> {
    let mut old_bodies: HashMap<&str, &str> = old_units
        .iter()
        .map(|u| (u.qualified_name.as_str(), u.body.as_str()))
        .collect();

    let mut changes = Vec::new();
    for unit in &new_units {
        match old_bodies.remove(unit.qualified_name.as_str()) {
            Some(old_body) => {
                if old_body != unit.body {
                    changes.push(ClassChange {
                        qualified_name: unit.qualified_name.clone(),
                        change: ChangeType::Modified,
                    });
                }
            }
            None => changes.push(ClassChange {
                qualified_name: unit.qualified_name.clone(),
                change: ChangeType::Added,
            }),
        }
    }

    for unit in &old_units {
        if old_bodies.remove(unit.qualified_name.as_str()).is_some() {
            changes.push(ClassChange {
                qualified_name: unit.qualified_name.clone(),
                change: ChangeType::Deleted,
            });
        }
    }

    changes
}
