// High-level overview:
//
// Protocol:                    24 byte GRB frames              LightController
// Library Concept:      hardware <---------------> device file <-------------> controller <-------> client <-------> user
//
// Implementing Binary:                                          rgb-lights (lib)    rgb-lights-rest     homeassistant
//                                                                                   rgb-lights-shell    actual human

pub mod args;
pub mod color;
pub mod controller;
pub mod device;
pub mod error;
pub mod frame;
pub mod global;
pub mod shutdown;

#[cfg(test)]
mod testing;

pub use controller::LightController;
pub use device::{Device, DevicePath, DEFAULT_DEVICE_PATH};
pub use error::LightError;
pub use frame::{Frame, ZoneIndex, DEFAULT_COLOR, FRAME_LEN, ZONE_COUNT};
