//! Channel endpoints: where `snd` values go and `rcv` values come from.
//!
//! The interpreter only sees the [`Channel`] trait. Which implementation it
//! gets is decided by whoever builds the machine:
//!
//! - [`LocalChannel`] for a single instance, remembering the last value played
//! - [`LinkedChannel`] for one side of a two-instance run

pub mod linked;
pub mod local;

pub use linked::{Link, LinkedChannel};
pub use local::LocalChannel;

/// Result of a `receive` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Received {
    /// A value is available.
    Value(i64),
    /// The run must stop; no value will ever arrive.
    Terminated,
}

/// What `rcv X` does with a received value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceivePolicy {
    /// Write the value to X and continue.
    Store,
    /// If X is non-zero, stop the run and expose the value as recovered.
    /// Otherwise do nothing.
    Recover,
}

/// One endpoint of a message channel.
pub trait Channel {
    /// Hand a value to the channel. Never blocks.
    fn send(&mut self, value: i64);

    /// Take the next value, or learn that none will come. May block.
    fn receive(&mut self) -> Received;

    /// How the interpreter treats values from [`Channel::receive`].
    fn policy(&self) -> ReceivePolicy {
        ReceivePolicy::Store
    }

    /// Called once when the owning run ends, however it ends.
    fn close(&mut self) {}
}
