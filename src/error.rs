use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::frame::FRAME_LEN;

#[derive(Debug, Error)]
pub enum LightError {
    #[error("invalid zone index: {index}")]
    InvalidZone { index: usize },

    #[error("failed to open device {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write frame: {0}")]
    Write(#[from] io::Error),

    #[error("short write: {written} of {} bytes", FRAME_LEN)]
    ShortWrite { written: usize },

    #[error("device handle was released")]
    Released,
}
