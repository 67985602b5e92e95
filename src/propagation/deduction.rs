use crate::board::Candidate;

/// The sequence of cells a solve resolved, in the order they were
/// committed, together with the number of full scans it took.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deductions {
    pub(crate) entries: Vec<Candidate>,
    pub(crate) passes: u32,
}

impl Deductions {
    /// Returns the number of resolved cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether any cell was resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the `index`th deduction, if it exists.
    pub fn get(&self, index: usize) -> Option<Candidate> {
        self.entries.get(index).copied()
    }

    /// Return an iterator over the deductions, in commit order.
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the number of grid passes the solve ran, including the
    /// final pass that detected a stall.
    pub fn passes(&self) -> u32 {
        self.passes
    }
}
