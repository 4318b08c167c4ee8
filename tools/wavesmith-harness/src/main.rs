//! wavesmith-harness: headless runner for the WAVESMITH simulation.
//!
//! Usage:
//!   wavesmith-harness run --seed 7 --ticks 3600 --skip-grace --melee
//!   wavesmith-harness run --config sim.json --load <code> --keys wd
//!   wavesmith-harness inspect <code>

use std::path::Path;
use std::process;

use wavesmith_core::commands::PlayerCommand;
use wavesmith_core::constants::TICK_RATE;
use wavesmith_core::input::InputState;
use wavesmith_core::state::GameStateSnapshot;
use wavesmith_sim::persistence;
use wavesmith_sim::{SimConfig, SimulationEngine};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let verbose = has_flag(&args, "--verbose");
    if let Err(e) = setup_logging(verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "inspect" => cmd_inspect(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "wavesmith-harness: WAVESMITH headless runner\n\
         \n\
         Commands:\n\
         \n\
         run       Simulate a session and print the HUD and a save code\n\
         \n\
           --seed <N>         RNG seed (overrides the config file)\n\
           --ticks <N>        Ticks to simulate (default: 600)\n\
           --config <path>    JSON SimConfig file\n\
           --load <code>      Start from a save code\n\
           --keys <keys>      Held keys for the whole run, e.g. \"wd \"\n\
           --skip-grace       Start the wave immediately\n\
           --melee            Hold the sword swing\n\
           --verbose          Debug-level logging\n\
         \n\
         inspect   Decode a save code and print its JSON\n\
         \n\
         Examples:\n\
         \n\
           wavesmith-harness run --seed 7 --ticks 3600 --skip-grace --melee\n\
           wavesmith-harness inspect eyJwbGF5ZXIiOnsieCI6MzAwLC4uLn19\n"
    );
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = flag_value(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Error: {flag} expects a number, got {raw:?}");
            process::exit(1);
        }
    }
}

fn load_config(path: &Path) -> Result<SimConfig, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn cmd_run(args: &[String]) {
    let mut config = match flag_value(args, "--config") {
        Some(path) => load_config(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_number(args, "--seed") {
        config.seed = seed;
    }
    let ticks: u64 = parse_number(args, "--ticks").unwrap_or(600);

    let mut engine = SimulationEngine::new(config);
    if let Some(code) = flag_value(args, "--load") {
        if let Err(e) = engine.import_save(code) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
    if has_flag(args, "--skip-grace") {
        engine.queue_command(PlayerCommand::SkipGrace);
    }

    let keys: Vec<&str> = match flag_value(args, "--keys") {
        Some(raw) => raw
            .char_indices()
            .map(|(i, c)| &raw[i..i + c.len_utf8()])
            .collect(),
        None => Vec::new(),
    };
    let mut input = InputState::from_held_keys(keys);
    input.melee |= has_flag(args, "--melee");
    engine.set_input(input);

    log::info!(
        "running {ticks} ticks, seed {}, field {}x{}",
        engine.config().seed,
        engine.config().field_width,
        engine.config().field_height
    );

    let mut last = engine.snapshot();
    for _ in 0..ticks {
        last = engine.tick();
        for event in &last.events {
            log::debug!("tick {}: {event:?}", last.tick);
        }
        if last.tick % u64::from(TICK_RATE) == 0 {
            log::debug!("{}", last.hud.info);
        }
        if last.dead {
            break;
        }
    }

    print_hud(&last);
    match engine.export_save() {
        Ok(code) => println!("save: {code}"),
        Err(e) => {
            eprintln!("Error: failed to export save: {e}");
            process::exit(1);
        }
    }
}

fn print_hud(snap: &GameStateSnapshot) {
    println!("{}", snap.hud.info);
    println!(
        "health: {:.1}/{:.0} ({:.0}%)",
        snap.player.health,
        snap.player.max_health,
        snap.hud.health_fraction * 100.0
    );
    println!("metal: {}", snap.hud.metal);
    println!("class: {}", snap.hud.class_label);
    println!("{}", snap.hud.weapon_stats);
    println!("monsters: {}", snap.monsters.len());
    if snap.dead {
        println!("YOU DIED");
    }
}

fn cmd_inspect(args: &[String]) {
    let Some(code) = args.first() else {
        eprintln!("Error: inspect needs a save code");
        process::exit(1);
    };
    let data = persistence::decode(code).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
