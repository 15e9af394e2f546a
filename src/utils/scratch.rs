//! Stack-disciplined scratch storage.
//!
//! A [`ScratchStack`] hands out reusable instances of `T` inside LIFO frames. Every
//! instance checked out with [`ScratchStack::get`] is recycled by the matching
//! [`ScratchStack::pop`], so hot queries can reuse their temporary buffers instead of
//! allocating new ones on each call.
//!
//! Misuse is a checked fault: popping without a frame, checking out an instance outside
//! of any frame, or touching a [`ScratchSlot`] after its frame was popped all panic.
//! The [`ScratchFrame`] guard and [`ScratchStack::scope`] make the balanced usage
//! structural: the frame is popped when the guard drops, including during unwinding.

use core::cell::RefCell;

/// A handle to an instance checked out of a [`ScratchStack`].
///
/// A slot stays valid until the frame it was obtained in is popped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScratchSlot {
    index: usize,
    checkout: u64,
}

impl ScratchSlot {
    /// The unique identifier of the checkout that produced this slot.
    ///
    /// No two checkouts of the same stack ever share an identifier.
    #[inline]
    pub fn checkout_id(&self) -> u64 {
        self.checkout
    }
}

/// A LIFO pool of reusable scratch instances organized in frames.
#[derive(Debug, Default)]
pub struct ScratchStack<T> {
    instances: Vec<T>,
    // `checkouts[i]` is the checkout id of `instances[i]`, for the instances in use.
    checkouts: Vec<u64>,
    frames: Vec<usize>,
    next_checkout: u64,
}

impl<T> ScratchStack<T> {
    /// Creates an empty scratch stack.
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            checkouts: Vec::new(),
            frames: Vec::new(),
            next_checkout: 0,
        }
    }

    /// The number of frames currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The number of instances currently checked out, across all open frames.
    #[inline]
    pub fn in_use(&self) -> usize {
        self.checkouts.len()
    }

    /// The number of instances ever allocated by this stack.
    ///
    /// Recycled instances are reused, so this only grows with the peak usage.
    #[inline]
    pub fn allocated(&self) -> usize {
        self.instances.len()
    }

    /// The total number of checkouts performed so far.
    #[inline]
    pub fn total_checkouts(&self) -> u64 {
        self.next_checkout
    }

    /// Opens a new frame.
    pub fn push(&mut self) {
        self.frames.push(self.checkouts.len());
    }

    /// Closes the innermost frame, recycling every instance checked out since the matching
    /// [`Self::push`].
    ///
    /// # Panics
    ///
    /// Panics if no frame is open.
    pub fn pop(&mut self) {
        let Some(start) = self.frames.pop() else {
            panic!("ScratchStack::pop called without a matching push.");
        };
        self.checkouts.truncate(start);
    }

    /// Checks out `value` in the current frame.
    ///
    /// The storage of a recycled instance is overwritten with `value`.
    ///
    /// # Panics
    ///
    /// Panics if no frame is open.
    pub fn get_with(&mut self, value: T) -> ScratchSlot {
        let slot = self.checkout();

        if slot.index < self.instances.len() {
            self.instances[slot.index] = value;
        } else {
            self.instances.push(value);
        }

        slot
    }

    /// Checks the given slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot's frame has been popped.
    #[inline]
    fn validate(&self, slot: ScratchSlot) {
        assert!(
            self.checkouts.get(slot.index) == Some(&slot.checkout),
            "scratch slot {:?} used after its frame was popped.",
            slot
        );
    }

    /// A reference to the instance behind `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the slot's frame has been popped.
    pub fn get_ref(&self, slot: ScratchSlot) -> &T {
        self.validate(slot);
        &self.instances[slot.index]
    }

    /// A mutable reference to the instance behind `slot`.
    ///
    /// # Panics
    ///
    /// Panics if the slot's frame has been popped.
    pub fn get_mut(&mut self, slot: ScratchSlot) -> &mut T {
        self.validate(slot);
        &mut self.instances[slot.index]
    }

    /// Opens a frame that is closed when the returned guard is dropped.
    pub fn frame(&mut self) -> ScratchFrame<'_, T> {
        self.push();
        let depth = self.depth();
        ScratchFrame { stack: self, depth }
    }

    /// Runs `f` inside a fresh frame.
    ///
    /// The frame is popped once `f` returns or unwinds. Values that must outlive the frame
    /// have to be moved out of it, e.g., with [`ScratchFrame::take`].
    pub fn scope<R>(&mut self, f: impl FnOnce(&mut ScratchFrame<'_, T>) -> R) -> R {
        let mut frame = self.frame();
        f(&mut frame)
    }

    fn checkout(&mut self) -> ScratchSlot {
        assert!(
            !self.frames.is_empty(),
            "ScratchStack::get called outside of any push/pop frame."
        );

        let slot = ScratchSlot {
            index: self.checkouts.len(),
            checkout: self.next_checkout,
        };
        self.next_checkout += 1;
        self.checkouts.push(slot.checkout);
        slot
    }
}

impl<T: Default> ScratchStack<T> {
    /// Checks out an instance in the current frame.
    ///
    /// A recycled instance is handed out as-is, without being reset: buffers keep their
    /// previous content and capacity.
    ///
    /// # Panics
    ///
    /// Panics if no frame is open.
    pub fn get(&mut self) -> ScratchSlot {
        let slot = self.checkout();

        if slot.index == self.instances.len() {
            self.instances.push(T::default());
        }

        slot
    }

    /// Moves the value behind `slot` out of the stack, then closes the innermost frame.
    ///
    /// This is how a value computed inside a frame survives that frame's [`Self::pop`].
    ///
    /// # Panics
    ///
    /// Panics if the slot's frame has been popped, or if `slot` does not belong to the
    /// innermost frame.
    pub fn pop_returning(&mut self, slot: ScratchSlot) -> T {
        self.validate(slot);
        let start = self.frames.last().copied().unwrap_or(0);
        assert!(
            slot.index >= start,
            "ScratchStack::pop_returning: {:?} belongs to an outer frame.",
            slot
        );
        let value = core::mem::take(&mut self.instances[slot.index]);
        self.pop();
        value
    }
}

/// An open frame of a [`ScratchStack`], popped on drop.
pub struct ScratchFrame<'a, T> {
    stack: &'a mut ScratchStack<T>,
    depth: usize,
}

impl<T> ScratchFrame<'_, T> {
    /// Checks out `value` in this frame.
    pub fn get_with(&mut self, value: T) -> ScratchSlot {
        self.stack.get_with(value)
    }

    /// A reference to the instance behind `slot`.
    pub fn get_ref(&self, slot: ScratchSlot) -> &T {
        self.stack.get_ref(slot)
    }

    /// A mutable reference to the instance behind `slot`.
    pub fn get_mut(&mut self, slot: ScratchSlot) -> &mut T {
        self.stack.get_mut(slot)
    }

    /// Opens a frame nested inside this one.
    pub fn frame(&mut self) -> ScratchFrame<'_, T> {
        self.stack.frame()
    }

    /// The number of instances currently checked out, across all open frames.
    pub fn in_use(&self) -> usize {
        self.stack.in_use()
    }
}

impl<T: Default> ScratchFrame<'_, T> {
    /// Checks out an instance in this frame.
    pub fn get(&mut self) -> ScratchSlot {
        self.stack.get()
    }

    /// Moves the value behind `slot` out of this frame, leaving a default instance behind.
    pub fn take(&mut self, slot: ScratchSlot) -> T {
        core::mem::take(self.stack.get_mut(slot))
    }
}

impl<T> Drop for ScratchFrame<'_, T> {
    fn drop(&mut self) {
        debug_assert_eq!(self.stack.depth(), self.depth);
        self.stack.pop();
    }
}

thread_local! {
    static TRAVERSAL_STACKS: RefCell<ScratchStack<Vec<u32>>> = RefCell::new(ScratchStack::new());
}

struct TraversalStackLease {
    slot: ScratchSlot,
    stack: Vec<u32>,
}

impl Drop for TraversalStackLease {
    fn drop(&mut self) {
        let stack = core::mem::take(&mut self.stack);
        let slot = self.slot;
        // The thread-local may already be gone during thread teardown.
        let _ = TRAVERSAL_STACKS.try_with(|stacks| {
            let mut stacks = stacks.borrow_mut();
            *stacks.get_mut(slot) = stack;
            stacks.pop();
        });
    }
}

/// Runs `f` with an empty, thread-local scratch buffer for tree traversals.
///
/// Calls may nest (e.g., a traversal callback starting another traversal): each level
/// gets its own buffer, and buffers are recycled across calls.
pub fn with_traversal_stack<R>(f: impl FnOnce(&mut Vec<u32>) -> R) -> R {
    let mut lease = TRAVERSAL_STACKS.with(|stacks| {
        let mut stacks = stacks.borrow_mut();
        stacks.push();
        let slot = stacks.get();
        let stack = core::mem::take(stacks.get_mut(slot));
        TraversalStackLease { slot, stack }
    });

    lease.stack.clear();
    f(&mut lease.stack)
}
