use clap::Parser;

use crate::device::DEFAULT_DEVICE_PATH;

/// Interactive shell to drive an 8-zone RGB light strip by hand.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ShellArgs {
    /// Path to the light strip device.
    #[clap(short, long, default_value = DEFAULT_DEVICE_PATH)]
    pub device: String,
}

/// Starts a REST Api to control the light strip
/// via homeassistant or a browser.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// Path to the light strip device.
    #[clap(short, long, default_value = DEFAULT_DEVICE_PATH)]
    pub device: String,

    /// The listen address to bind to.
    #[clap(short, long, default_value = "localhost:1414")]
    pub bind: String,

    /// A unique identifier for this server instance.
    #[clap(short, long, default_value = "rgb-lights")]
    pub instance_name: String,
}

/// Installs the log subscriber used by the binaries. The filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_defaults() {
        let args = ServerArgs::parse_from(["rgb-lights-rest"]);
        assert_eq!(args.device, "/dev/rgb_light");
        assert_eq!(args.bind, "localhost:1414");
        assert_eq!(args.instance_name, "rgb-lights");
    }

    #[test]
    fn shell_device_override() {
        let args = ShellArgs::parse_from(["rgb-lights-shell", "--device", "/tmp/strip"]);
        assert_eq!(args.device, "/tmp/strip");
    }
}
