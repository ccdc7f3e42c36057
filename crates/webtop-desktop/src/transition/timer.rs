//! Cancellable deferred-callback queue
//!
//! Time is injected by the caller (`now_ms`), so the queue never blocks and
//! tests drive it deterministically.

#[derive(Clone, Debug)]
struct Timer<T> {
    /// Scheduling sequence number, breaks ties between equal due times
    id: u64,
    due_ms: f64,
    task: T,
}

/// Queue of tasks due at given timestamps
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    pending: Vec<Timer<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// Schedule `task` to fire at `due_ms`
    pub fn schedule(&mut self, due_ms: f64, task: T) {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Timer { id, due_ms, task });
    }

    /// Cancel every pending timer whose task matches `pred`
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| !pred(&t.task));
        before - self.pending.len()
    }

    /// Remove and return all tasks due at or before `now_ms`
    ///
    /// Tasks come out ordered by due time, ties broken by scheduling order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<T> {
        let (mut due, rest): (Vec<Timer<T>>, Vec<Timer<T>>) =
            self.pending.drain(..).partition(|t| t.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)));
        due.into_iter().map(|t| t.task).collect()
    }

    /// Earliest pending due time
    pub fn next_due(&self) -> Option<f64> {
        self.pending.iter().map(|t| t.due_ms).min_by(|a, b| a.total_cmp(b))
    }

    /// Whether any task matches `pred`
    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.pending.iter().any(|t| pred(&t.task))
    }

    /// Number of pending timers
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
