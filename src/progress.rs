/// Observer for fractional progress of a scan or clean.
///
/// Called synchronously on the thread driving the run, so implementations
/// must return quickly.
pub trait ProgressSink {
    fn on_progress(&self, label: &str, percent: u8);
}

impl<F> ProgressSink for F
where
    F: Fn(&str, u8),
{
    fn on_progress(&self, label: &str, percent: u8) {
        self(label, percent)
    }
}

/// Sink used when nobody is listening.
pub(crate) struct Silent;

impl ProgressSink for Silent {
    fn on_progress(&self, _label: &str, _percent: u8) {}
}

/// Rescales a nested run's 0..=100 range into `[start, start + width]` of the
/// outer sink.
///
/// Only events falling strictly inside the band are forwarded; the band
/// boundaries themselves belong to whoever owns the band.
pub(crate) struct Banded<'a> {
    inner: &'a dyn ProgressSink,
    start: u8,
    width: u8,
}

impl<'a> Banded<'a> {
    pub(crate) fn new(inner: &'a dyn ProgressSink, start: u8, width: u8) -> Self {
        debug_assert!(u16::from(start) + u16::from(width) <= 100);
        Self {
            inner,
            start,
            width,
        }
    }

    fn scale(&self, percent: u8) -> u8 {
        let offset = u16::from(percent.min(100)) * u16::from(self.width) / 100;
        self.start + offset as u8
    }
}

impl ProgressSink for Banded<'_> {
    fn on_progress(&self, label: &str, percent: u8) {
        let scaled = self.scale(percent);
        if scaled > self.start && scaled < self.start + self.width {
            self.inner.on_progress(label, scaled);
        }
    }
}

/// Completion percentage after `done` of `total` steps, rounded down.
pub(crate) fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}
