//! An instrumented payload for tests.

use core::{
    cell::Cell,
    hash::{Hash, Hasher},
};
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    clones: Cell<usize>,
    clone_froms: Cell<usize>,
    comparisons: Cell<usize>,
    drops: Cell<usize>,
}

/// Shared counters for every [`Probe`] created from them.
#[derive(Clone, Default)]
pub struct Counters(Rc<Counts>);

impl Counters {
    pub fn clones(&self) -> usize {
        self.0.clones.get()
    }

    pub fn clone_froms(&self) -> usize {
        self.0.clone_froms.get()
    }

    pub fn comparisons(&self) -> usize {
        self.0.comparisons.get()
    }

    pub fn drops(&self) -> usize {
        self.0.drops.get()
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// Counts its clones, in-place clones, comparisons and drops.
#[derive(Debug)]
pub struct Probe {
    pub value: i32,
    counters: Counters,
}

impl Probe {
    pub fn new(counters: &Counters, value: i32) -> Self {
        Probe {
            value,
            counters: counters.clone(),
        }
    }
}

impl core::fmt::Debug for Counters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Counters")
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        bump(&self.counters.0.clones);
        Probe {
            value: self.value,
            counters: self.counters.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        bump(&self.counters.0.clone_froms);
        self.value = source.value;
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        bump(&self.counters.0.comparisons);
        self.value == other.value
    }
}

impl Eq for Probe {}

impl Hash for Probe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        bump(&self.counters.0.drops);
    }
}
