use std::sync::{Arc, Mutex, MutexGuard};

/// Default number of tool slots an engine exposes.
pub const DEFAULT_SLOT_COUNT: usize = 8;

struct Inner {
    slots: Mutex<Vec<bool>>,
}

impl Inner {
    fn slots(&self) -> MutexGuard<'_, Vec<bool>> {
        match self.slots.lock() {
            Ok(slots) => slots,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// A fixed pool of engine tool slots.
///
/// On-device runtimes register tools against a fixed number of
/// prebuilt bridge points, so the number of concurrently bound tools
/// is capped. The pool tracks which slots are taken; a slot is held
/// for as long as its [`ToolSlot`] guard lives and returns to the pool
/// when the guard drops.
///
/// Cloning a `ToolSlotPool` is cheap and every clone shares the same
/// slots.
#[derive(Clone)]
pub struct ToolSlotPool {
    inner: Arc<Inner>,
}

impl ToolSlotPool {
    /// Creates a pool with the given number of slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                slots: Mutex::new(vec![false; capacity]),
            }),
        }
    }

    /// Takes the first free slot, if any.
    pub fn acquire(&self) -> Option<ToolSlot> {
        let mut slots = self.inner.slots();
        let index = slots.iter().position(|taken| !taken)?;
        slots[index] = true;
        drop(slots);
        Some(ToolSlot {
            pool: self.clone(),
            index,
        })
    }

    /// Returns the number of slots currently free.
    pub fn free_slots(&self) -> usize {
        self.inner.slots().iter().filter(|taken| !**taken).count()
    }
}

impl Default for ToolSlotPool {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}

/// An owned engine tool slot.
///
/// Dropping the guard frees the slot for other sessions.
pub struct ToolSlot {
    pool: ToolSlotPool,
    index: usize,
}

impl ToolSlot {
    /// Returns the slot index within the pool.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Drop for ToolSlot {
    fn drop(&mut self) {
        self.pool.inner.slots()[self.index] = false;
    }
}
