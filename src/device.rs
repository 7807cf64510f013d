use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::error::LightError;
use crate::frame::Frame;
use crate::frame::FRAME_LEN;

/// Path of the light strip device node.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/rgb_light";

/// Something that can produce a writable handle to the strip.
///
/// The controller only opens the handle once, right before the first frame
/// is written.
pub trait Device {
    type Handle: Write;

    fn open(&self) -> Result<Self::Handle, LightError>;
}

/// The strip as a file on disk, usually a character device.
#[derive(Clone, Debug)]
pub struct DevicePath {
    path: PathBuf,
}

impl DevicePath {
    pub fn new<P: Into<PathBuf>>(path: P) -> DevicePath {
        return DevicePath { path: path.into() };
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DevicePath {
    fn default() -> DevicePath {
        DevicePath::new(DEFAULT_DEVICE_PATH)
    }
}

impl Device for DevicePath {
    type Handle = File;

    fn open(&self) -> Result<File, LightError> {
        // Never create or truncate, the node is provided by the driver.
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|source| LightError::Open {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), "opened light device");
        return Ok(file);
    }
}

enum HandleState<H> {
    Unopened,
    Open(H),
    Closed,
}

/// Lazily opened handle: Unopened -> Open -> Closed, never back.
pub(crate) struct DeviceHandle<D: Device> {
    device: D,
    state: HandleState<D::Handle>,
}

impl<D: Device> DeviceHandle<D> {
    pub(crate) fn new(device: D) -> DeviceHandle<D> {
        return DeviceHandle {
            device,
            state: HandleState::Unopened,
        };
    }

    pub(crate) fn device(&self) -> &D {
        &self.device
    }

    pub(crate) fn is_open(&self) -> bool {
        matches!(self.state, HandleState::Open(_))
    }

    pub(crate) fn is_closed(&self) -> bool {
        matches!(self.state, HandleState::Closed)
    }

    pub(crate) fn ensure_open(&mut self) -> Result<&mut D::Handle, LightError> {
        if let HandleState::Unopened = self.state {
            self.state = HandleState::Open(self.device.open()?);
        }
        match &mut self.state {
            HandleState::Open(handle) => Ok(handle),
            _ => Err(LightError::Released),
        }
    }

    /// Sends the whole frame in a single write call.
    pub(crate) fn write_frame(&mut self, frame: &Frame) -> Result<(), LightError> {
        let handle = self.ensure_open()?;
        let written = handle.write(frame.as_bytes())?;
        if written != FRAME_LEN {
            return Err(LightError::ShortWrite { written });
        }
        handle.flush()?;
        debug!(frame = ?frame.as_bytes(), "wrote frame");
        return Ok(());
    }

    /// Drops the handle if one is open. Later writes fail with `Released`.
    pub(crate) fn close(&mut self) -> Result<(), LightError> {
        let previous = std::mem::replace(&mut self.state, HandleState::Closed);
        if let HandleState::Open(mut handle) = previous {
            handle.flush()?;
        }
        return Ok(());
    }
}
