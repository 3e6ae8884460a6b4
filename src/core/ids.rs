//! Injectable identifier generation and wall clock

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Produces fresh identifiers for record batches and namespaces.
#[derive(Clone)]
pub struct IdGenerator(Arc<dyn Fn() -> String + Send + Sync>);

impl IdGenerator {
    pub fn new<F>(generate: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self(Arc::new(generate))
    }

    /// Random v4 UUIDs in hyphenated form.
    pub fn uuid() -> Self {
        Self::new(|| Uuid::new_v4().to_string())
    }

    pub fn next_id(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdGenerator")
    }
}

#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>);

impl Clock {
    pub fn new<F>(now: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self(Arc::new(now))
    }

    pub fn system() -> Self {
        Self::new(Utc::now)
    }

    /// A clock frozen at `instant`.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::new(move || instant)
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.0)()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Clock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_uuid_generator_yields_distinct_ids() {
        let ids = IdGenerator::uuid();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_custom_generator_is_shared_across_clones() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        let ids = IdGenerator::new(move || format!("id-{}", c.fetch_add(1, Ordering::SeqCst)));
        let cloned = ids.clone();

        assert_eq!(ids.next_id(), "id-0");
        assert_eq!(cloned.next_id(), "id-1");
    }

    #[test]
    fn test_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(Clock::fixed(instant).now(), instant);
    }
}
