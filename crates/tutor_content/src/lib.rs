//! Static lesson/content database.
//!
//! Read-only lookups keyed by problem type (theory, pedagogical notes,
//! alternative methods) or by type plus step label (common mistakes).
//! Built once on first access and shared by reference; nothing here is
//! ever mutated after construction.

pub mod labels;
mod tables;

use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use tutor_catalog::ProblemType;

/// Per-type lesson material.
pub struct Theory {
    pub overview: &'static str,
    /// Label/formula pairs rendered into the lesson section.
    pub formulas: &'static [(&'static str, &'static str)],
}

/// The content database. Obtain the process-wide instance with
/// [`ContentDb::global`].
pub struct ContentDb {
    theory: FxHashMap<ProblemType, Theory>,
    mistakes: FxHashMap<(ProblemType, &'static str), &'static [&'static str]>,
    notes: FxHashMap<ProblemType, &'static [&'static str]>,
    alternatives: FxHashMap<ProblemType, &'static [&'static str]>,
    troubleshooting: FxHashMap<ProblemType, &'static [&'static str]>,
}

impl ContentDb {
    pub fn global() -> &'static ContentDb {
        static DB: OnceLock<ContentDb> = OnceLock::new();
        DB.get_or_init(tables::build)
    }

    pub fn theory(&self, ty: ProblemType) -> Option<&Theory> {
        self.theory.get(&ty)
    }

    /// Common mistakes for a step, keyed by problem type then step label.
    /// An unmatched label yields an empty (not missing) list.
    pub fn mistakes_for(&self, ty: ProblemType, label: &str) -> &'static [&'static str] {
        self.mistakes.get(&(ty, label)).copied().unwrap_or(&[])
    }

    pub fn notes_for(&self, ty: ProblemType) -> &'static [&'static str] {
        self.notes.get(&ty).copied().unwrap_or(&[])
    }

    pub fn alternatives_for(&self, ty: ProblemType) -> &'static [&'static str] {
        self.alternatives.get(&ty).copied().unwrap_or(&[])
    }

    pub fn troubleshooting_for(&self, ty: ProblemType) -> &'static [&'static str] {
        self.troubleshooting.get(&ty).copied().unwrap_or(&[])
    }
}
