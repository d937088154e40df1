use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local};
use itertools::Itertools;
use lazy_static::lazy_static;
use ringbuffer::RingBufferWrite;
use ringbuffer::{AllocRingBuffer, RingBuffer, RingBufferExt};

pub const TRACE_CAPACITY: usize = 128;

/// One pipeline event, stamped when it was recorded.
#[derive(Clone, Debug)]
pub struct TraceEntry {
    pub time: DateTime<Local>,
    pub message: String,
}

impl Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.time.format("%d.%m %H:%M:%S"), self.message)
    }
}

lazy_static! {
    static ref TRACE: Mutex<AllocRingBuffer<TraceEntry>> =
        Mutex::new(AllocRingBuffer::with_capacity(TRACE_CAPACITY));
}

pub fn record(message: String) {
    let entry = TraceEntry {
        time: Local::now(),
        message,
    };

    TRACE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(entry);
}

/// Records a formatted message in the trace buffer.
macro_rules! log{
    ($($e:expr),+ $(,)?) => {
        crate::log::record(format!($($e),+))
    }
}

pub(crate) use log;

/// Newest `n` entries rendered as lines, oldest first.
pub fn pull_messages(n: usize) -> Vec<String> {
    let trace = TRACE.lock().unwrap_or_else(PoisonError::into_inner);
    let skip = trace.len().saturating_sub(n);

    trace.iter().skip(skip).map(ToString::to_string).collect_vec()
}
