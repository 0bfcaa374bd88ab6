//! Bounded event bus shared between producer and consumer tasks.
//!
//! A multi-producer, single-consumer channel built on `critical-section`
//! and `heapless::Deque`. Sends never block: when the queue is full the
//! value is rejected and a drop counter is bumped, so a stalled consumer
//! degrades to losing events instead of wedging a producer task.
//! Thread/interrupt safe via critical sections.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when trying to send to a full channel.
///
/// Carries the rejected value back to the caller. Producers that treat the
/// bus as best-effort simply discard it; the loss stays visible through
/// [`Channel::dropped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

struct Shared<T, const SIZE: usize> {
    queue: Deque<T, SIZE>,
    dropped: u32,
}

/// A bounded, thread-safe channel.
///
/// This channel uses critical sections for synchronization, making it
/// suitable for embedded environments. The channel is backed by a
/// fixed-size `heapless::Deque`; senders observe a full queue as a
/// rejected send, never as backpressure.
pub struct Channel<T, const SIZE: usize> {
    inner: Mutex<RefCell<Shared<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Shared {
                queue: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    /// Get a receiver handle for this channel.
    ///
    /// Exactly one task should drain the queue; the snapshot returned by
    /// [`Receiver::len`] is only meaningful to a single consumer.
    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Try to send a value into the channel.
    ///
    /// Never blocks. Returns `Err(TrySendError(value))` if the channel is
    /// full; the rejection is also recorded in the drop counter.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        critical_section::with(|cs| {
            let mut shared = self.inner.borrow(cs).borrow_mut();
            match shared.queue.push_back(value) {
                Ok(()) => Ok(()),
                Err(value) => {
                    shared.dropped = shared.dropped.wrapping_add(1);
                    Err(TrySendError(value))
                }
            }
        })
    }

    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        critical_section::with(|cs| {
            let mut shared = self.inner.borrow(cs).borrow_mut();
            shared.queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of values currently queued.
    ///
    /// The count is a snapshot: producers may enqueue more right after it
    /// is taken. The consumer uses it to bound one drain pass to the work
    /// that was pending on entry.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().queue.len())
    }

    /// Whether the channel was empty at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of values rejected because the channel was full.
    ///
    /// Wraps on overflow. Non-zero means the consumer fell behind far
    /// enough to lose events.
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().dropped)
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Channel`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    /// Try to send a value into the channel.
    ///
    /// Never blocks. Returns `Err(TrySendError(value))` if the channel is
    /// full.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// A receiver handle for a [`Channel`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    /// Try to receive a value from the channel.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Snapshot of the number of values currently queued.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    /// Whether the channel was empty at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    /// Number of values rejected so far because the channel was full.
    pub fn dropped(&self) -> u32 {
        self.channel.dropped()
    }
}
