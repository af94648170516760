//! Exhibit selection: the bounded, ordered set of files chosen for upload.
//!
//! Both intake paths (file picker and drag-and-drop) are just sources of
//! [`CandidateFile`]s; the filtering and limiting logic lives here once.

/// Only PDF exhibits are accepted.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Hard cap on selected exhibits. Candidates past the cap are silently
/// dropped, oldest-first priority.
pub const MAX_EXHIBITS: usize = 50;

/// A file offered by the user, not yet accepted into the selection.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// An accepted exhibit. `id` is a synthetic selection identifier (insertion
/// order), stable for the lifetime of one draft.
#[derive(Debug, Clone)]
pub struct Exhibit {
    pub id: u64,
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The current exhibit selection for one draft. In-memory only; discarded
/// with the draft.
#[derive(Debug, Default)]
pub struct ExhibitSelection {
    next_id: u64,
    exhibits: Vec<Exhibit>,
}

impl ExhibitSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept candidate files: keep only PDFs, append in offer order, and
    /// truncate the combined selection to the first [`MAX_EXHIBITS`].
    /// Returns how many candidates were accepted.
    pub fn add(&mut self, candidates: impl IntoIterator<Item = CandidateFile>) -> usize {
        let before = self.exhibits.len();
        for candidate in candidates {
            if candidate.media_type != PDF_MEDIA_TYPE {
                continue;
            }
            if self.exhibits.len() >= MAX_EXHIBITS {
                break;
            }
            let id = self.next_id;
            self.next_id += 1;
            self.exhibits.push(Exhibit {
                id,
                name: candidate.name,
                bytes: candidate.bytes,
            });
        }
        self.exhibits.len() - before
    }

    /// Remove an exhibit by its selection id. Returns true if one was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.exhibits.len();
        self.exhibits.retain(|e| e.id != id);
        self.exhibits.len() < before
    }

    /// Remove the first exhibit whose name matches.
    ///
    /// Two selected files with the same name are indistinguishable here; the
    /// first match is removed regardless of which one the user meant. The
    /// form has always behaved this way — callers who need precision use
    /// [`ExhibitSelection::remove`] with the selection id.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        if let Some(pos) = self.exhibits.iter().position(|e| e.name == name) {
            self.exhibits.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exhibit> {
        self.exhibits.iter()
    }

    /// Original filenames, in selection order.
    pub fn names(&self) -> Vec<String> {
        self.exhibits.iter().map(|e| e.name.clone()).collect()
    }
}
