//! Stored Object Module
//!
//! Defines the record kept for each object in the in-memory backend.

use std::time::{Duration, SystemTime};

// == Stored Object ==
/// A stored payload together with its last-written timestamp.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// The stored bytes
    pub body: Vec<u8>,
    /// When the object was last written
    pub stored_at: SystemTime,
}

impl StoredObject {
    // == Constructor ==
    /// Creates an object written now.
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            stored_at: SystemTime::now(),
        }
    }

    // == Is Fresh ==
    /// Checks whether the object was written within `window` of now.
    ///
    /// Boundary condition: an object is fresh while its age is strictly
    /// less than the window. A zero window therefore makes every object
    /// stale, which turns the cache into a pass-through to the origin.
    ///
    /// If the clock moved backwards since the write, the object cannot be
    /// older than the window and counts as fresh.
    pub fn is_fresh(&self, window: Duration) -> bool {
        match self.stored_at.elapsed() {
            Ok(age) => age < window,
            Err(_) => true,
        }
    }

    // == Age ==
    /// Age of the object, saturating to zero if the clock moved backwards.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed().unwrap_or(Duration::ZERO)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_is_fresh() {
        let obj = StoredObject::new(b"payload".to_vec());

        assert!(obj.is_fresh(Duration::from_secs(60)));
        assert_eq!(obj.body, b"payload");
    }

    #[test]
    fn test_zero_window_is_always_stale() {
        let obj = StoredObject::new(b"payload".to_vec());

        assert!(!obj.is_fresh(Duration::ZERO));
    }

    #[test]
    fn test_old_object_is_stale() {
        let obj = StoredObject {
            body: b"payload".to_vec(),
            stored_at: SystemTime::now() - Duration::from_secs(120),
        };

        assert!(!obj.is_fresh(Duration::from_secs(60)));
        assert!(obj.is_fresh(Duration::from_secs(300)));
    }

    #[test]
    fn test_age_is_monotonic_enough() {
        let obj = StoredObject {
            body: Vec::new(),
            stored_at: SystemTime::now() - Duration::from_secs(10),
        };

        let age = obj.age();
        assert!(age >= Duration::from_secs(10));
        assert!(age < Duration::from_secs(11));
    }

    #[test]
    fn test_future_timestamp_counts_as_fresh() {
        // Clock skew: a write stamped slightly in the future.
        let obj = StoredObject {
            body: Vec::new(),
            stored_at: SystemTime::now() + Duration::from_secs(5),
        };

        assert!(obj.is_fresh(Duration::from_secs(1)));
    }
}
