use std::time::Duration;

/// Handle to a pending timer, released with [`TimerQueue::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What the controller does when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    Autoplay,       // Periodic advance
    DelayedRestart, // Conditional restart after navigation
    InitialStart,   // First arm after attach
}

#[derive(Debug)]
struct Entry {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    task: TimerTask,
}

/// Virtual-time stand-in for `setTimeout` / `setInterval`.
///
/// The host drives the clock; nothing here sleeps or spawns. Timers fire in
/// due order, ties broken by creation order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_timeout(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        self.push(delay, None, task)
    }

    pub fn set_interval(&mut self, period: Duration, task: TimerTask) -> TimerId {
        // A zero period would fire forever without moving the clock
        let period = period.max(Duration::from_millis(1));
        self.push(period, Some(period), task)
    }

    /// Removes a pending timer. Returns false if it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to its due time.
    /// Intervals are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, TimerTask)> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;

        let entry = &mut self.entries[position];
        let fired = (entry.id, entry.task);
        self.now = self.now.max(entry.due);

        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.entries.swap_remove(position);
            }
        }

        Some(fired)
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn due_of(&self, id: TimerId) -> Option<Duration> {
        self.entries.iter().find(|entry| entry.id == id).map(|entry| entry.due)
    }

    /// Number of pending timers for `task`.
    pub fn armed(&self, task: TimerTask) -> usize {
        self.entries.iter().filter(|entry| entry.task == task).count()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now + delay,
            period,
            task,
        });
        id
    }
}
