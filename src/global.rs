//! A process-wide controller for callers that cannot pass one around.
//!
//! The first call to [`instance`] builds a controller with default colors;
//! [`release`] switches the strip off and forgets it, so the next call to
//! [`instance`] starts over from the defaults.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use tracing::debug;

use crate::controller::LightController;
use crate::device::DevicePath;

struct Slot {
    path: Option<PathBuf>,
    controller: Option<Arc<LightController>>,
}

static SLOT: Mutex<Slot> = Mutex::new(Slot {
    path: None,
    controller: None,
});

fn lock() -> MutexGuard<'static, Slot> {
    SLOT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Use `path` instead of `/dev/rgb_light` for controllers created from now
/// on. A live instance keeps its device until it is released.
pub fn set_device_path<P: Into<PathBuf>>(path: P) {
    lock().path = Some(path.into());
}

/// The shared controller, created on first use.
pub fn instance() -> Arc<LightController> {
    let mut slot = lock();
    if let Some(controller) = &slot.controller {
        return controller.clone();
    }
    let device = match &slot.path {
        Some(path) => DevicePath::new(path.clone()),
        None => DevicePath::default(),
    };
    debug!(path = %device.path().display(), "creating light controller");
    let controller = Arc::new(LightController::new(device));
    slot.controller = Some(controller.clone());
    return controller;
}

/// Turns the strip off and drops the shared controller. Does nothing if
/// there is none.
pub fn release() {
    let mut slot = lock();
    if let Some(controller) = slot.controller.take() {
        controller.release();
    }
}
