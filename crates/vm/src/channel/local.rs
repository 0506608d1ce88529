//! Single-instance endpoint: `snd` plays a value, `rcv` recovers it.

use super::{Channel, ReceivePolicy, Received};

/// Remembers the most recently played value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalChannel {
    last_played: Option<i64>,
}

impl LocalChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last value sent, if any was.
    pub fn last_played(&self) -> Option<i64> {
        self.last_played
    }
}

impl Channel for LocalChannel {
    fn send(&mut self, value: i64) {
        self.last_played = Some(value);
    }

    // Nothing played yet reads as 0, like an unset register.
    fn receive(&mut self) -> Received {
        Received::Value(self.last_played.unwrap_or(0))
    }

    fn policy(&self) -> ReceivePolicy {
        ReceivePolicy::Recover
    }
}
