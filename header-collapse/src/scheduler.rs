use alloc::boxed::Box;

use crate::HeaderHost;

/// A deferred style-write callback.
pub type WriteTask<H> = Box<dyn FnOnce(&mut H)>;

/// A deferred geometry-read callback.
///
/// A read task cannot write: it may only return the write that should follow it. Anything the
/// write needs from the read has to be captured as a plain value, which keeps every read of an
/// invocation ahead of its writes.
pub type ReadTask<H> = Box<dyn FnOnce(&H) -> Option<WriteTask<H>>>;

/// Read/write scheduling injected into the engine.
///
/// Implementations must run a read task before the write it returns. Batching reads into one
/// frame-aligned callback and writes into the next is the typical host strategy (see the
/// `header-collapse-adapter` crate's `FrameQueue`).
pub trait Scheduler {
    type Host: HeaderHost;

    fn read_task(&mut self, task: ReadTask<Self::Host>);
    fn write_task(&mut self, task: WriteTask<Self::Host>);
}

/// Element handle type of a scheduler's host.
pub type ElementOf<S> = <<S as Scheduler>::Host as HeaderHost>::Element;

/// A scheduler that runs tasks as soon as they are submitted.
///
/// Useful when the caller is already in a phase-separated callback, and for tests.
pub struct Immediate<'a, H> {
    host: &'a mut H,
}

impl<'a, H: HeaderHost> Immediate<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &*self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: HeaderHost> Scheduler for Immediate<'_, H> {
    type Host = H;

    fn read_task(&mut self, task: ReadTask<H>) {
        if let Some(write) = task(&*self.host) {
            write(&mut *self.host);
        }
    }

    fn write_task(&mut self, task: WriteTask<H>) {
        task(&mut *self.host);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    type Host = S::Host;

    fn read_task(&mut self, task: ReadTask<S::Host>) {
        (**self).read_task(task);
    }

    fn write_task(&mut self, task: WriteTask<S::Host>) {
        (**self).write_task(task);
    }
}
