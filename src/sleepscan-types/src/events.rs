use chrono::{NaiveDateTime, TimeDelta};

/// Timestamps of an activity log, always kept in ascending order.
///
/// Gap detection over unsorted input produces meaningless periods, so the
/// only way to build a log is through [`EventLog::from_unsorted`], which sorts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<NaiveDateTime>,
}

impl EventLog {
    pub fn from_unsorted(mut events: Vec<NaiveDateTime>) -> Self {
        events.sort_unstable();
        Self { events }
    }

    pub fn as_slice(&self) -> &[NaiveDateTime] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDateTime> {
        self.events.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDateTime> {
        self.events.last().copied()
    }

    /// Time between the first and the last event.
    pub fn span(&self) -> Option<TimeDelta> {
        Some(self.last()? - self.first()?)
    }
}

impl From<Vec<NaiveDateTime>> for EventLog {
    fn from(events: Vec<NaiveDateTime>) -> Self {
        Self::from_unsorted(events)
    }
}

impl FromIterator<NaiveDateTime> for EventLog {
    fn from_iter<T: IntoIterator<Item = NaiveDateTime>>(iter: T) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl AsRef<[NaiveDateTime]> for EventLog {
    fn as_ref(&self) -> &[NaiveDateTime] {
        self.as_slice()
    }
}
