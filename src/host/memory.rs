//! In-memory score store.

use std::cell::RefCell;
use std::rc::Rc;

use super::{HostResult, ScoreStore};

/// In-memory best-score store.
///
/// Clones share the same record, so a host can keep a handle and inspect
/// writes after handing a clone to the engine.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    inner: Rc<RefCell<Record>>,
}

#[derive(Debug, Default)]
struct Record {
    best: u32,
    writes: Vec<u32>,
}

impl MemoryScoreStore {
    /// A store that starts with `best` as the recorded best score.
    #[must_use]
    pub fn with_best(best: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Record {
                best,
                writes: Vec::new(),
            })),
        }
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.inner.borrow().best
    }

    /// Every value written, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<u32> {
        self.inner.borrow().writes.clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read_best_score(&mut self) -> HostResult<u32> {
        Ok(self.best())
    }

    fn write_best_score(&mut self, score: u32) -> HostResult<()> {
        let mut record = self.inner.borrow_mut();
        record.best = score;
        record.writes.push(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_record() {
        let store = MemoryScoreStore::with_best(3);
        let mut handle = store.clone();

        assert_eq!(handle.read_best_score().unwrap(), 3);
        handle.write_best_score(5).unwrap();

        assert_eq!(store.best(), 5);
        assert_eq!(store.writes(), vec![5]);
    }
}
