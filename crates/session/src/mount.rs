//! Liveness of a mounted view.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that is live while the owning view is mounted.
///
/// Async work captures a clone and hands its result through
/// [`Mount::deliver`], which drops it once the view has gone away.
#[derive(Debug, Clone)]
pub struct Mount {
    live: Rc<Cell<bool>>,
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}

impl Mount {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Mark the view as unmounted. Affects every clone.
    pub fn release(&self) {
        self.live.set(false);
    }

    /// Run `apply` with `value` if still mounted. Returns whether it ran.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_while_live() {
        let mount = Mount::new();
        let seen = Cell::new(0);

        assert!(mount.deliver(7, |v| seen.set(v)));
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_release_is_shared_between_clones() {
        let mount = Mount::new();
        let task_handle = mount.clone();
        let seen = Cell::new(0);

        mount.release();

        assert!(!task_handle.is_live());
        assert!(!task_handle.deliver(7, |v| seen.set(v)));
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_rerun_drops_only_the_stale_result() {
        // A view that refetches when its id changes gets a fresh mount per run.
        let first = Mount::new();
        let first_task = first.clone();
        first.release();
        let second = Mount::new();
        let shown = Cell::new("");

        assert!(!first_task.deliver("old playlist", |v| shown.set(v)));
        assert!(second.deliver("new playlist", |v| shown.set(v)));
        assert_eq!(shown.get(), "new playlist");
    }
}
