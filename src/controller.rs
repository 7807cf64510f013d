use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::device::Device;
use crate::device::DeviceHandle;
use crate::device::DevicePath;
use crate::error::LightError;
use crate::frame::Frame;
use crate::frame::ZoneIndex;
use crate::frame::ZONE_COUNT;

struct Lights<D: Device> {
    // What the strip should currently show.
    buffer: Frame,
    // The last frame written that was not all dark.
    cache: Frame,
    handle: DeviceHandle<D>,
}

impl<D: Device> Lights<D> {
    /// Writes the buffer and remembers it, unless it switches everything off.
    fn write_data(&mut self) -> Result<(), LightError> {
        self.handle.write_frame(&self.buffer)?;
        if !self.buffer.is_dark() {
            self.cache = self.buffer;
        }
        return Ok(());
    }
}

/// Controls an 8-zone RGB strip through its device file.
///
/// Every operation runs under one lock, so concurrent callers never see
/// (or send) a half-updated frame. The plain operations are fire-and-forget:
/// failures are logged and dropped. The `try_` variants report them instead.
pub struct LightController<D: Device = DevicePath> {
    lights: Mutex<Lights<D>>,
}

impl<D: Device> LightController<D> {
    /// Starts with every zone at `DEFAULT_COLOR`. The device is not opened
    /// until the first frame is written.
    pub fn new(device: D) -> LightController<D> {
        let buffer = Frame::default();
        return LightController {
            lights: Mutex::new(Lights {
                buffer,
                cache: buffer,
                handle: DeviceHandle::new(device),
            }),
        };
    }

    fn lock(&self) -> MutexGuard<'_, Lights<D>> {
        // Every mutation leaves a whole frame behind, so a panic elsewhere
        // cannot leave the state torn.
        self.lights.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn try_ctrl_all(&self, colors: [u32; ZONE_COUNT]) -> Result<(), LightError> {
        let mut lights = self.lock();
        for zone in ZoneIndex::all() {
            lights.buffer.set_zone(zone, colors[zone.get()]);
        }
        return lights.write_data();
    }

    pub fn try_ctrl_uniform(&self, rgb: u32) -> Result<(), LightError> {
        self.try_ctrl_all([rgb; ZONE_COUNT])
    }

    /// Only touches `index`, the other zones keep whatever they had.
    pub fn try_ctrl_zone(&self, index: usize, rgb: u32) -> Result<(), LightError> {
        let zone = ZoneIndex::new(index)?;
        let mut lights = self.lock();
        lights.buffer.set_zone(zone, rgb);
        return lights.write_data();
    }

    pub fn try_turn_on(&self) -> Result<(), LightError> {
        let mut lights = self.lock();
        lights.buffer = lights.cache;
        return lights.write_data();
    }

    pub fn try_turn_off(&self) -> Result<(), LightError> {
        let mut lights = self.lock();
        turn_off_locked(&mut lights)
    }

    /// Sets all eight zones at once.
    pub fn ctrl_all(&self, colors: [u32; ZONE_COUNT]) {
        log_failure("ctrl_all", self.try_ctrl_all(colors));
    }

    /// Sets every zone to the same color.
    pub fn ctrl_uniform(&self, rgb: u32) {
        log_failure("ctrl_uniform", self.try_ctrl_uniform(rgb));
    }

    /// Sets a single zone. An index outside `0..8` changes nothing and
    /// writes nothing.
    pub fn ctrl_zone(&self, index: usize, rgb: u32) {
        log_failure("ctrl_zone", self.try_ctrl_zone(index, rgb));
    }

    /// Restores the last lit configuration.
    pub fn turn_on(&self) {
        log_failure("turn_on", self.try_turn_on());
    }

    /// Switches every zone off without forgetting the cached colors.
    pub fn turn_off(&self) {
        log_failure("turn_off", self.try_turn_off());
    }

    /// The colors `turn_on` would restore, one packed 0x00RRGGBB per zone.
    pub fn current_rgb_caches(&self) -> [u32; ZONE_COUNT] {
        let packed = self.lock().cache.to_packed();
        debug!(cache = ?packed, "read color cache");
        return packed;
    }

    /// Switches the strip off and closes the device.
    ///
    /// Safe to call more than once. Afterwards every write fails with
    /// `LightError::Released`; build a new controller to use the strip again.
    pub fn release(&self) {
        let mut lights = self.lock();
        if lights.handle.is_closed() {
            return;
        }
        log_failure("release", turn_off_locked(&mut lights));
        debug!(open = lights.handle.is_open(), "closing light device");
        log_failure("release", lights.handle.close());
        info!("released light controller");
    }

    /// Borrow the device this controller writes to.
    pub fn with_device<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(self.lock().handle.device())
    }
}

fn turn_off_locked<D: Device>(lights: &mut Lights<D>) -> Result<(), LightError> {
    lights.handle.ensure_open()?;
    lights.buffer = Frame::dark();
    // A dark frame never reaches the cache.
    return lights.handle.write_frame(&lights.buffer);
}

fn log_failure(operation: &str, result: Result<(), LightError>) {
    if let Err(e) = result {
        warn!(operation, error = %e, "light operation failed");
    }
}
