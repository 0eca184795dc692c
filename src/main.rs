//! Command-line front end for the enigma machine simulator.
//!
//! Two subcommands: `machine` generates a fresh machine definition and
//! writes its 156-byte file; `encode` loads and validates a definition,
//! mounts three rotors per the selection string, and enciphers a message
//! from a file or from one interactive stdin line.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use enigma::generate::random_definition;
use enigma::{Encoder, MachineDefinition, RotorSelection};

#[derive(Parser)]
#[command(
    name = "enigma",
    about = "A program that accurately mimics the first version of the Enigma Machine.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new machine definition file
    Machine {
        /// The file that will hold the machine's configuration
        #[arg(short, long)]
        output: PathBuf,
        /// An integer to use as the rng's seed
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Encode a message
    Encode {
        /// The file that holds the machine config
        #[arg(short, long)]
        config: PathBuf,
        /// The file that holds text to be encrypted
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// The file that will hold the encrypted text
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Rotor configuration, e.g. 1:12:3,4:16:12,5:1:4
        #[arg(short, long)]
        rotor_config: String,
        /// Plugboard configuration (accepted for compatibility, not applied)
        #[arg(short, long)]
        plugboard_config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match Cli::parse().command {
        Command::Machine { output, seed } => machine(&output, seed),
        Command::Encode {
            config,
            input,
            output,
            rotor_config,
            plugboard_config,
        } => encode(&config, input, output, &rotor_config, plugboard_config),
    }
}

/// Generates a definition and writes it in one pass.
fn machine(output: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let definition = random_definition(&mut rng);
    fs::write(output, definition.to_bytes())
        .with_context(|| format!("writing machine definition to {}", output.display()))?;

    info!("machine definition written to {}", output.display());
    Ok(())
}

/// Loads, validates, and runs one encode session.
fn encode(
    config: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    rotor_config: &str,
    plugboard_config: Option<String>,
) -> anyhow::Result<()> {
    if plugboard_config.is_some() {
        warn!("plugboard configuration is accepted but not applied; the cipher path ignores it");
    }

    let selection: RotorSelection = rotor_config.parse()?;

    let bytes = fs::read(config)
        .with_context(|| format!("reading machine definition from {}", config.display()))?;
    let definition = MachineDefinition::from_bytes(&bytes)?;

    let message = match &input {
        Some(path) => {
            fs::read(path).with_context(|| format!("reading message from {}", path.display()))?
        }
        None => prompt_for_message()?,
    };

    let mut encoder = Encoder::new(&definition, &selection);
    let cipher = encoder.encode(&message);

    match &output {
        Some(path) => fs::write(path, &cipher)
            .with_context(|| format!("writing ciphertext to {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&cipher)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Prompts on stdout and reads one message line from stdin.
fn prompt_for_message() -> anyhow::Result<Vec<u8>> {
    print!("Message: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading message from stdin")?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line.into_bytes())
}
