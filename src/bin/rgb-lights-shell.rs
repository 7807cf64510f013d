use std::io::Write;
use std::sync::Arc;

use clap::Parser;

use rgb_lights::args::ShellArgs;
use rgb_lights::color;
use rgb_lights::{DevicePath, LightController};

macro_rules! skip_fail {
    ($res:expr) => {
        match $res {
            Ok(val) => val,
            Err(e) => {
                println!("Invalid value: {}", e);
                continue;
            }
        }
    };
}

const HELP: &str = "Valid commands are: all=C,C,C,C,C,C,C,C, color=C, zone=INDEX:C, \
on=BOOL, cache=, quit=. Colors are #RRGGBB, 0xRRGGBB or decimal.";

/// A shell for interactive debugging.
fn main() -> anyhow::Result<()> {
    rgb_lights::args::init_logging();
    let args = ShellArgs::parse();
    let lights = Arc::new(LightController::new(DevicePath::new(args.device)));
    rgb_lights::shutdown::release_on_interrupt(lights.clone())?;
    let mut input = String::new();
    loop {
        print!("rgb-lights> ");
        std::io::stdout().flush()?;
        input.clear();
        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches('\n');
        let (key, value) = match line.split_once('=') {
            Some(kv) => kv,
            None => {
                println!("expected input in the form of key=value");
                continue;
            }
        };
        match key {
            "help" => println!("{}", HELP),
            "all" => lights.ctrl_all(skip_fail!(color::parse_zone_list(value))),
            "color" => lights.ctrl_uniform(skip_fail!(color::parse_packed(value))),
            "zone" => {
                let (index, rgb) = skip_fail!(value
                    .split_once(':')
                    .ok_or_else(|| anyhow::anyhow!("expected INDEX:COLOR")));
                let index = skip_fail!(index.trim().parse::<usize>());
                lights.ctrl_zone(index, skip_fail!(color::parse_packed(rgb)));
            }
            "on" => {
                if skip_fail!(value.parse::<bool>()) {
                    lights.turn_on();
                } else {
                    lights.turn_off();
                }
            }
            "cache" => {
                let cache = lights.current_rgb_caches();
                let formatted: Vec<String> = cache.iter().map(|c| color::format_packed(*c)).collect();
                println!("{}", formatted.join(" "));
            }
            "quit" => break,
            _ => {
                println!("unknown key {}", key);
                continue;
            }
        }
    }
    lights.release();
    return Ok(());
}
