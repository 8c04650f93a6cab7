//! Construction-time tunables, kept as a small plain-data struct rather
//! than an external config-file format — this crate has no persistence
//! surface to configure, so there is nothing for a file format to name.

/// Tunables for an [`crate::IndexedSeq`] / [`crate::deltani::DeltaNiEngine`].
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Maximum keys per B+ tree node before it splits. Target range is
    /// 8-64; the default sits in the middle of that range.
    pub fanout: usize,
}

impl Config {
    pub fn new(fanout: usize) -> Config {
        Config { fanout }
    }
}

/// Default fanout, in the middle of the 8-64 range the design calls for.
pub const DEFAULT_FANOUT: usize = 32;

impl Default for Config {
    fn default() -> Config {
        Config {
            fanout: DEFAULT_FANOUT,
        }
    }
}
