//! Storage Statistics Module
//!
//! Tracks backend activity: reads, misses, writes, and removals.

// == Storage Stats ==
/// Tracks storage access counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    /// Number of reads that found a value
    pub reads: u64,
    /// Number of reads for an absent key
    pub misses: u64,
    /// Number of successful writes
    pub writes: u64,
    /// Number of keys removed
    pub removals: u64,
    /// Current number of stored keys
    pub total_entries: usize,
}

impl StorageStats {
    // == Constructor ==
    /// Creates a new StorageStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Read ==
    /// Increments the read counter.
    pub fn record_read(&mut self) {
        self.reads += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Write ==
    /// Increments the write counter.
    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    // == Record Removal ==
    /// Increments the removal counter.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
