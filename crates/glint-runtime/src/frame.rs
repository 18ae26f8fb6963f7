//! Request-next-frame scheduling

/// Handle for one requested frame. Needed to cancel it, and used to tell a
/// live frame callback from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Holds at most one pending frame request.
///
/// A new request supersedes the previous one; cancelling only clears the
/// request if the handle matches.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: Option<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next frame, returning its handle
    pub fn request(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        handle
    }

    /// Cancel `handle` if it is still pending. Returns true if cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Take the pending request, if any, so its frame can run
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
