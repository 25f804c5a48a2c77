use alloc::collections::VecDeque;
use core::fmt;
use core::mem;

use header_collapse::{HeaderHost, ReadTask, Scheduler, WriteTask};

/// Counts of tasks run by one [`FrameQueue::flush`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlushStats {
    pub reads: usize,
    pub writes: usize,
}

impl FlushStats {
    pub fn is_empty(&self) -> bool {
        self.reads == 0 && self.writes == 0
    }
}

/// A frame-aligned read/write scheduler.
///
/// Tasks are only queued on submission. The adapter calls [`FrameQueue::flush`] once per frame
/// (e.g. right before rendering): every pending read runs first, then every write, so reads and
/// writes never interleave within a frame.
pub struct FrameQueue<H> {
    reads: VecDeque<ReadTask<H>>,
    writes: VecDeque<WriteTask<H>>,
}

impl<H> Default for FrameQueue<H> {
    fn default() -> Self {
        Self {
            reads: VecDeque::new(),
            writes: VecDeque::new(),
        }
    }
}

impl<H> fmt::Debug for FrameQueue<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("reads", &self.reads.len())
            .field("writes", &self.writes.len())
            .finish()
    }
}

impl<H: HeaderHost> FrameQueue<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_reads(&self) -> usize {
        self.reads.len()
    }

    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    pub fn is_idle(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }

    /// Drops every pending task without running it.
    pub fn clear(&mut self) {
        self.reads.clear();
        self.writes.clear();
    }

    /// Runs one frame: all pending reads (in submission order), then all writes.
    ///
    /// Writes returned by reads are appended after the writes that were already queued.
    pub fn flush(&mut self, host: &mut H) -> FlushStats {
        let reads = mem::take(&mut self.reads);
        let mut writes = mem::take(&mut self.writes);

        let mut stats = FlushStats {
            reads: reads.len(),
            writes: 0,
        };
        for read in reads {
            if let Some(write) = read(&*host) {
                writes.push_back(write);
            }
        }

        stats.writes = writes.len();
        for write in writes {
            write(&mut *host);
        }

        actrace!(reads = stats.reads, writes = stats.writes, "FrameQueue::flush");
        stats
    }
}

impl<H: HeaderHost> Scheduler for FrameQueue<H> {
    type Host = H;

    fn read_task(&mut self, task: ReadTask<H>) {
        self.reads.push_back(task);
    }

    fn write_task(&mut self, task: WriteTask<H>) {
        self.writes.push_back(task);
    }
}
