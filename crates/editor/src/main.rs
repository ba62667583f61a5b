mod settings;

use crate::settings::Settings;
use clap::{Parser, Subcommand};
use config::Config;
use cz_library::{CcSend, Registry, Session};
use midir::{MidiOutput, MidiOutputConnection};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[clap(
    name = "CZ-1 Mini CC editor",
    version = env!("CARGO_PKG_VERSION"),
)]
struct Args {
    #[clap(short, long, help = "Config file (see example_config.toml)")]
    config: Option<String>,

    #[clap(
        short,
        long,
        help = "Prefer the first output port whose name contains this string"
    )]
    port: Option<String>,

    #[clap(subcommand)]
    command: Option<EditorCommand>,
}

#[derive(Subcommand, Debug)]
enum EditorCommand {
    /// List available MIDI output ports
    Ports,
    /// List every control with its CC address and default value
    Controls,
    /// Send the default value of every control
    Init,
    /// Send one uniform random value per control
    Random {
        #[clap(long, help = "Seed for a reproducible patch")]
        seed: Option<u64>,
    },
    /// Send a single control value and print its status label
    Set {
        id: String,
        #[clap(value_parser = clap::value_parser!(u8).range(0..=127))]
        value: u8,
    },
    /// Print the label a value decodes to, without sending
    Decode { id: String, value: u8 },
}

/// midir output connection behind the session's transport trait.
/// Send failures are dropped; a broken port behaves like no port.
struct MidiPort(MidiOutputConnection);

impl CcSend for MidiPort {
    fn send(&mut self, message: [u8; 3]) {
        let _ = self.0.send(&message);
    }
}

fn main() {
    let args = Args::parse();

    let mut cfg = Config::builder();
    if let Some(config_fn) = args.config {
        cfg = cfg.add_source(config::File::with_name(config_fn.as_str()));
    }
    let cfg = cfg.build().expect("Can't create settings");
    let mut settings: Settings = cfg.try_deserialize().expect("Can't parse settings");
    if let Some(port) = args.port {
        settings.preferred_ports = vec![port];
    }
    settings.validate().expect("Invalid settings");

    let registry = Registry::cz1_mini();

    // Commands that never touch a MIDI port.
    match &args.command {
        Some(EditorCommand::Ports) => {
            list_ports(&settings);
            return;
        }
        Some(EditorCommand::Controls) => {
            list_controls(&registry);
            return;
        }
        Some(EditorCommand::Decode { id, value }) => {
            let session: Session<MidiPort> = Session::new(&registry, settings.channel);
            match session.decode(id, *value) {
                Ok(status) => println!("{status}"),
                Err(e) => eprintln!("{e}"),
            }
            return;
        }
        _ => {}
    }

    let mut session: Session<MidiPort> = Session::new(&registry, settings.channel);
    match open_output(&settings) {
        Some((name, port)) => {
            println!("Sending to \"{name}\" on channel {}", settings.channel + 1);
            session.set_output(port);
        }
        None => eprintln!("No MIDI output selected; control changes will be dropped"),
    }

    match args.command {
        None => interactive_loop(&mut session, &settings),
        Some(EditorCommand::Init) => {
            session.init_patch();
            println!("Sent defaults for {} controls", session.registry().len());
        }
        Some(EditorCommand::Random { seed }) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            session.random_patch(&mut rng);
            println!("Sent random values for {} controls", session.registry().len());
        }
        Some(EditorCommand::Set { id, value }) => match session.control_changed(&id, value) {
            Ok(status) => println!("{status}"),
            Err(e) => eprintln!("{e}"),
        },
        // Handled above.
        Some(_) => unreachable!(),
    }
}

/// Connects to the preferred output port, falling back to the first one.
/// `None` when no output port exists or the connection fails.
fn open_output(settings: &Settings) -> Option<(String, MidiPort)> {
    let output = MidiOutput::new(&settings.client_name).expect("Couldn't open MIDI output");
    let ports = output.ports();
    if ports.is_empty() {
        return None;
    }

    let preferred = ports.iter().find(|port| {
        output
            .port_name(port)
            .map(|name| {
                settings
                    .preferred_ports
                    .iter()
                    .any(|pref| name.contains(pref.as_str()))
            })
            .unwrap_or(false)
    });
    let port = preferred.unwrap_or(&ports[0]);
    let name = output
        .port_name(port)
        .unwrap_or_else(|_| "Unknown".to_string());

    match output.connect(port, &settings.port_name) {
        Ok(connection) => Some((name, MidiPort(connection))),
        Err(e) => {
            eprintln!("Couldn't connect to \"{name}\": {e}");
            None
        }
    }
}

fn list_ports(settings: &Settings) {
    let output = MidiOutput::new(&settings.client_name).expect("Couldn't open MIDI output");
    let ports = output.ports();
    if ports.is_empty() {
        println!("No MIDI output ports");
        return;
    }
    for port in &ports {
        let name = output
            .port_name(port)
            .unwrap_or_else(|_| "Unknown".to_string());
        let preferred = settings
            .preferred_ports
            .iter()
            .any(|pref| name.contains(pref.as_str()));
        if preferred {
            println!("  {name} (preferred)");
        } else {
            println!("  {name}");
        }
    }
}

fn list_controls(registry: &Registry) {
    for control in registry.iter() {
        let kind = match (control.decode, control.secondary) {
            (_, Some(secondary)) => format!("  [+ CC {}]", secondary.address),
            (Some(table), None) => format!("  [{}]", table.name),
            (None, None) => String::new(),
        };
        println!(
            "  {:<38} CC {:>3}  default {:>3}{kind}",
            control.id, control.address, control.default_value
        );
    }
}

/// One parsed prompt line.
#[derive(Debug, PartialEq, Eq)]
enum LoopCommand {
    Nothing,
    Quit,
    Controls,
    Ports,
    Init,
    Random { seed: Option<u64> },
    Set { id: String, value: u8 },
}

/// Parses a prompt line; the error is the usage message to print.
/// Values above 127 are rejected here so nothing ever reaches the session
/// outside the controller domain.
fn parse_line(line: &str) -> Result<LoopCommand, String> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => Ok(LoopCommand::Nothing),
        Some("quit") | Some("exit") => Ok(LoopCommand::Quit),
        Some("controls") => Ok(LoopCommand::Controls),
        Some("ports") => Ok(LoopCommand::Ports),
        Some("init") => Ok(LoopCommand::Init),
        Some("random") => match words.next().map(str::parse::<u64>) {
            Some(Ok(seed)) => Ok(LoopCommand::Random { seed: Some(seed) }),
            Some(Err(_)) => Err("usage: random [seed]".to_string()),
            None => Ok(LoopCommand::Random { seed: None }),
        },
        Some("set") => {
            let (Some(id), Some(value)) = (words.next(), words.next()) else {
                return Err("usage: set <id> <value>".to_string());
            };
            match value.parse::<u8>() {
                Ok(value) if value <= 127 => Ok(LoopCommand::Set {
                    id: id.to_string(),
                    value,
                }),
                _ => Err(format!("value should be 0 to 127 (found {value:?})")),
            }
        }
        Some(other) => Err(format!("unknown command {other:?}")),
    }
}

/// Single-threaded command loop; every line is one input event.
fn interactive_loop(session: &mut Session<MidiPort>, settings: &Settings) {
    println!("Commands: set <id> <value>, init, random [seed], controls, ports, quit");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        match parse_line(&line) {
            Err(message) => eprintln!("{message}"),
            Ok(LoopCommand::Nothing) => {}
            Ok(LoopCommand::Quit) => break,
            Ok(LoopCommand::Controls) => list_controls(session.registry()),
            Ok(LoopCommand::Ports) => list_ports(settings),
            Ok(LoopCommand::Init) => {
                session.init_patch();
                println!("Sent defaults for {} controls", session.registry().len());
            }
            Ok(LoopCommand::Random { seed }) => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                session.random_patch(&mut rng);
                println!("Sent random values for {} controls", session.registry().len());
            }
            Ok(LoopCommand::Set { id, value }) => match session.control_changed(&id, value) {
                Ok(status) => println!("{status}"),
                Err(e) => eprintln!("{e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_command_parses() {
        assert_eq!(parse_line(""), Ok(LoopCommand::Nothing));
        assert_eq!(parse_line("quit"), Ok(LoopCommand::Quit));
        assert_eq!(parse_line("exit"), Ok(LoopCommand::Quit));
        assert_eq!(parse_line("controls"), Ok(LoopCommand::Controls));
        assert_eq!(parse_line("ports"), Ok(LoopCommand::Ports));
        assert_eq!(parse_line("init"), Ok(LoopCommand::Init));
        assert_eq!(parse_line("random"), Ok(LoopCommand::Random { seed: None }));
        assert_eq!(
            parse_line("random 42"),
            Ok(LoopCommand::Random { seed: Some(42) })
        );
        assert_eq!(
            parse_line("set dco1-wf1 19"),
            Ok(LoopCommand::Set {
                id: "dco1-wf1".to_string(),
                value: 19
            })
        );
    }

    #[test]
    fn set_rejects_values_above_the_controller_domain() {
        // 170 parses as u8 but would be masked on the wire while the label
        // falls back; it must never reach the session.
        let err = parse_line("set line-select 170").unwrap_err();
        assert!(err.contains("0 to 127"), "{err}");
        assert!(parse_line("set line-select 128").is_err());
        assert!(parse_line("set line-select 300").is_err());
        assert_eq!(
            parse_line("set line-select 127"),
            Ok(LoopCommand::Set {
                id: "line-select".to_string(),
                value: 127
            })
        );
    }

    #[test]
    fn malformed_lines_report_usage() {
        assert!(parse_line("set").is_err());
        assert!(parse_line("set dco1-wf1").is_err());
        assert!(parse_line("random x").is_err());
        assert!(parse_line("bogus").is_err());
    }
}
