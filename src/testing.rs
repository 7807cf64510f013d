use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use crate::device::Device;
use crate::error::LightError;

#[derive(Default)]
struct Recorder {
    opens: usize,
    writes: Vec<Vec<u8>>,
    write_limit: Option<usize>,
    fail_open: bool,
    fail_write: bool,
}

/// In-memory strip that records every frame written to it.
#[derive(Clone, Default)]
pub(crate) struct FakeDevice {
    inner: Arc<Mutex<Recorder>>,
}

pub(crate) struct FakeHandle {
    inner: Arc<Mutex<Recorder>>,
}

impl FakeDevice {
    pub(crate) fn opens(&self) -> usize {
        self.inner.lock().unwrap().opens
    }

    pub(crate) fn writes(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().writes.clone()
    }

    pub(crate) fn last_write(&self) -> Option<Vec<u8>> {
        self.inner.lock().unwrap().writes.last().cloned()
    }

    /// Accept at most `limit` bytes per write call.
    pub(crate) fn set_write_limit(&self, limit: Option<usize>) {
        self.inner.lock().unwrap().write_limit = limit;
    }

    pub(crate) fn set_fail_open(&self, fail: bool) {
        self.inner.lock().unwrap().fail_open = fail;
    }

    pub(crate) fn set_fail_write(&self, fail: bool) {
        self.inner.lock().unwrap().fail_write = fail;
    }
}

impl Device for FakeDevice {
    type Handle = FakeHandle;

    fn open(&self) -> Result<FakeHandle, LightError> {
        let mut recorder = self.inner.lock().unwrap();
        if recorder.fail_open {
            return Err(LightError::Open {
                path: "/dev/fake".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such device"),
            });
        }
        recorder.opens += 1;
        return Ok(FakeHandle {
            inner: self.inner.clone(),
        });
    }
}

impl Write for FakeHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut recorder = self.inner.lock().unwrap();
        if recorder.fail_write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device gone"));
        }
        let n = recorder.write_limit.unwrap_or(buf.len()).min(buf.len());
        recorder.writes.push(buf[..n].to_vec());
        return Ok(n);
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
