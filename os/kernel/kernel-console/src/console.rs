use core::fmt::{self, Write};
use kernel_sync::SpinLock;
use kernel_uart::{BytePoll, ByteSink, SinkWriter};

/// A registry slot for at most one output device.
///
/// The slot starts empty and is filled exactly once by [`init_with`](Self::init_with)
/// or [`install`](Self::install). Until then every print call is a silent
/// no-op: nothing is buffered and nothing is reported.
///
/// Each [`print`](Self::print) / [`println`](Self::println) holds the lock
/// for the whole rendered message, so concurrent callers never interleave
/// their output.
pub struct Console<S> {
    slot: SpinLock<Option<S>>,
}

impl<S> Default for Console<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Console<S> {
    /// An empty console.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: SpinLock::new(None),
        }
    }

    /// Whether a device has been installed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Constructs the device with `make` while holding the lock and installs it.
    ///
    /// Must be called at most once per console; the slot never reverts or
    /// changes owners. A second call trips a debug assertion and otherwise
    /// replaces the device.
    pub fn init_with(&self, make: impl FnOnce() -> S) {
        let mut slot = self.slot.lock();
        debug_assert!(slot.is_none(), "console initialized twice");
        *slot = Some(make());
    }

    /// Installs an already constructed device. See [`init_with`](Self::init_with).
    pub fn install(&self, device: S) {
        self.init_with(|| device);
    }

    /// Runs `f` with exclusive access to the installed device.
    ///
    /// Returns `None` without calling `f` if the console is empty.
    pub fn with_device<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.slot.lock().as_mut().map(f)
    }
}

impl<S: ByteSink> Console<S> {
    /// Renders `args` to the device, or drops them if there is none.
    pub fn print(&self, args: fmt::Arguments<'_>) {
        self.emit(args, false);
    }

    /// Like [`print`](Self::print), followed by exactly one `\n`.
    pub fn println(&self, args: fmt::Arguments<'_>) {
        self.emit(args, true);
    }

    fn emit(&self, args: fmt::Arguments<'_>, newline: bool) {
        let mut slot = self.slot.lock();
        let Some(device) = slot.as_mut() else {
            return;
        };
        // Writing to a ByteSink cannot fail; only a faulty Display impl could.
        let _ = SinkWriter(&mut *device).write_fmt(args);
        if newline {
            device.put(b'\n');
        }
    }
}

impl<S: BytePoll> Console<S> {
    /// Polls the installed device for one input byte.
    ///
    /// `None` if nothing has arrived or the console is still empty.
    pub fn get(&self) -> Option<u8> {
        self.slot.lock().as_mut().and_then(BytePoll::poll)
    }
}
