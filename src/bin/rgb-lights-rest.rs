#![allow(unreachable_code)]
#[macro_use]
extern crate rouille;
extern crate serde;

use clap::Parser;
use std::io;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use tracing::warn;

use rgb_lights::args::ServerArgs;
use rgb_lights::color;
use rgb_lights::{DevicePath, LightController, ZONE_COUNT};

#[derive(Serialize, Debug)]
struct AboutResponse {
    version: String,
    instance_name: String,
    device: String,
}

fn bad_request(e: anyhow::Error) -> rouille::Response {
    warn!(error = %e, "rejected request");
    return rouille::Response::text(e.to_string()).with_status_code(400);
}

fn main() -> anyhow::Result<()> {
    rgb_lights::args::init_logging();
    let version: &str = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    let args = ServerArgs::parse();
    let lights = Arc::new(LightController::new(DevicePath::new(&args.device)));
    rgb_lights::shutdown::release_on_interrupt(lights.clone())?;
    info!(bind = %args.bind, device = %args.device, "starting server");

    rouille::start_server(args.bind, move |request| {
        rouille::log(&request, io::stdout(), || {
            router!(request,
                (GET) (/) => {
                    return rouille::Response::redirect_302("/status");
                },

                (GET) (/status) => {
                    let status = color::status_json(&lights.current_rgb_caches());
                    return rouille::Response::json(&status);
                },

                (GET) (/about) => {
                    let about = AboutResponse {
                        version: version.to_string(),
                        instance_name: args.instance_name.clone(),
                        device: lights.with_device(|d| d.path().display().to_string()),
                    };
                    return rouille::Response::json(&about);
                },

                (POST) (/zones) => {
                    let input = try_or_400!(post_input!(request, { colors: String }));
                    let colors = match color::parse_zone_list(&input.colors) {
                        Ok(colors) => colors,
                        Err(e) => return bad_request(e),
                    };
                    lights.ctrl_all(colors);
                    return rouille::Response::text("success");
                },

                (POST) (/color) => {
                    let input = try_or_400!(post_input!(request, { color: String }));
                    let rgb = match color::parse_packed(&input.color) {
                        Ok(rgb) => rgb,
                        Err(e) => return bad_request(e),
                    };
                    lights.ctrl_uniform(rgb);
                    return rouille::Response::text("success");
                },

                (POST) (/zone) => {
                    let input = try_or_400!(post_input!(request, {
                        index: usize,
                        color: String,
                    }));
                    if input.index >= ZONE_COUNT {
                        return rouille::Response::text("invalid value for 'index'").with_status_code(400);
                    }
                    let rgb = match color::parse_packed(&input.color) {
                        Ok(rgb) => rgb,
                        Err(e) => return bad_request(e),
                    };
                    lights.ctrl_zone(input.index, rgb);
                    return rouille::Response::text("success");
                },

                (POST) (/on) => {
                    lights.turn_on();
                    return rouille::Response::text("success");
                },

                (POST) (/off) => {
                    lights.turn_off();
                    return rouille::Response::text("success");
                },

                _ => rouille::Response::empty_404()
            )
        })
    });
    return Ok(());
}
