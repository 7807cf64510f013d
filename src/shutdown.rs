use std::sync::Arc;

use tracing::info;

use crate::controller::LightController;
use crate::device::Device;

/// What runs on Ctrl-C: switch the strip off and close the device.
pub fn release_handler<D>(lights: Arc<LightController<D>>) -> impl FnMut() + Send + 'static
where
    D: Device + Send + 'static,
    D::Handle: Send,
{
    move || {
        info!("interrupted, releasing light controller");
        lights.release();
    }
}

/// Releases `lights` and exits once the process receives Ctrl-C.
pub fn release_on_interrupt<D>(lights: Arc<LightController<D>>) -> Result<(), ctrlc::Error>
where
    D: Device + Send + 'static,
    D::Handle: Send,
{
    let mut handler = release_handler(lights);
    return ctrlc::set_handler(move || {
        handler();
        std::process::exit(0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LightError;
    use crate::frame::Frame;
    use crate::testing::FakeDevice;

    #[test]
    fn handler_leaves_the_strip_dark_and_closed() {
        let fake = FakeDevice::default();
        let lights = Arc::new(LightController::new(fake.clone()));
        lights.ctrl_uniform(0x204060);

        let mut handler = release_handler(lights.clone());
        handler();
        handler();

        assert_eq!(fake.writes().len(), 2);
        assert_eq!(fake.last_write().unwrap(), Frame::dark().as_bytes());
        assert!(matches!(lights.try_turn_on(), Err(LightError::Released)));
    }
}
