//! File selection session
//!
//! The ordered list of PDF files the user is working on. Order matters for
//! merge (it is the concatenation order), so the session supports explicit
//! reordering. The list lives for one session and is never persisted.
//!
//! Operations take the session as an explicit argument instead of reading
//! shared state, which keeps them testable without a live interface.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Ordered selection of PDF files for the current session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    files: Vec<PathBuf>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with the given files, preserving their order.
    pub fn select<I, P>(&mut self, files: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = files.into_iter().map(Into::into).collect();
    }

    /// Append one file to the end of the selection.
    pub fn add(&mut self, file: impl Into<PathBuf>) {
        self.files.push(file.into());
    }

    /// Remove the file at `index`.
    pub fn remove(&mut self, index: usize) -> Result<PathBuf> {
        if index >= self.files.len() {
            return Err(Error::SelectionOutOfRange {
                index,
                selected: self.files.len(),
            });
        }
        Ok(self.files.remove(index))
    }

    /// Move the file at `index` one position towards the front.
    /// Moving the first file is a no-op.
    pub fn move_up(&mut self, index: usize) -> Result<()> {
        if index >= self.files.len() {
            return Err(Error::SelectionOutOfRange {
                index,
                selected: self.files.len(),
            });
        }
        if index > 0 {
            self.files.swap(index - 1, index);
        }
        Ok(())
    }

    /// Move the file at `index` one position towards the back.
    /// Moving the last file is a no-op.
    pub fn move_down(&mut self, index: usize) -> Result<()> {
        if index >= self.files.len() {
            return Err(Error::SelectionOutOfRange {
                index,
                selected: self.files.len(),
            });
        }
        if index + 1 < self.files.len() {
            self.files.swap(index, index + 1);
        }
        Ok(())
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// The selected files, in order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Precondition for merge: at least two selected files.
    pub fn require_merge_inputs(&self) -> Result<&[PathBuf]> {
        if self.files.len() < 2 {
            return Err(Error::NotEnoughFiles {
                selected: self.files.len(),
            });
        }
        Ok(&self.files)
    }

    /// Precondition for single-file operations: exactly one selected file.
    pub fn require_single(&self) -> Result<&Path> {
        match self.files.as_slice() {
            [file] => Ok(file),
            _ => Err(Error::SingleFileRequired {
                selected: self.files.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn session_with(files: &[&str]) -> Session {
        let mut session = Session::new();
        session.select(files.iter().copied());
        session
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut session = session_with(&["a.pdf", "b.pdf"]);
        session.select(["c.pdf"]);
        assert_eq!(session.files(), &[PathBuf::from("c.pdf")]);
    }

    #[test]
    fn test_add_and_remove() {
        let mut session = session_with(&["a.pdf"]);
        session.add("b.pdf");
        assert_eq!(session.len(), 2);

        let removed = session.remove(0).unwrap();
        assert_eq!(removed, PathBuf::from("a.pdf"));
        assert_eq!(session.files(), &[PathBuf::from("b.pdf")]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut session = session_with(&["a.pdf"]);
        assert!(matches!(
            session.remove(3),
            Err(Error::SelectionOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn test_move_up_and_down() {
        let mut session = session_with(&["a.pdf", "b.pdf", "c.pdf"]);

        session.move_up(2).unwrap();
        assert_eq!(
            session.files(),
            &[
                PathBuf::from("a.pdf"),
                PathBuf::from("c.pdf"),
                PathBuf::from("b.pdf")
            ]
        );

        session.move_down(0).unwrap();
        assert_eq!(
            session.files(),
            &[
                PathBuf::from("c.pdf"),
                PathBuf::from("a.pdf"),
                PathBuf::from("b.pdf")
            ]
        );
    }

    #[test]
    fn test_move_at_boundaries_is_noop() {
        let mut session = session_with(&["a.pdf", "b.pdf"]);
        session.move_up(0).unwrap();
        session.move_down(1).unwrap();
        assert_eq!(
            session.files(),
            &[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]
        );
    }

    #[test]
    fn test_require_merge_inputs() {
        assert!(matches!(
            session_with(&[]).require_merge_inputs(),
            Err(Error::NotEnoughFiles { selected: 0 })
        ));
        assert!(matches!(
            session_with(&["a.pdf"]).require_merge_inputs(),
            Err(Error::NotEnoughFiles { selected: 1 })
        ));
        assert!(session_with(&["a.pdf", "b.pdf"])
            .require_merge_inputs()
            .is_ok());
    }

    #[test]
    fn test_require_single() {
        assert!(matches!(
            session_with(&[]).require_single(),
            Err(Error::SingleFileRequired { selected: 0 })
        ));
        assert!(matches!(
            session_with(&["a.pdf", "b.pdf"]).require_single(),
            Err(Error::SingleFileRequired { selected: 2 })
        ));
        assert_eq!(
            session_with(&["a.pdf"]).require_single().unwrap(),
            Path::new("a.pdf")
        );
    }
}
