mod ui;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use entropass::{ChaChaSource, DEFAULT_WORDLIST, PasswordAssembler, WordFile};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const DEFAULT_BITS: f64 = 72.0;

#[derive(Parser)]
#[command(
    name = "entropass",
    version,
    author,
    about = "Generates passwords from random parts until a target entropy is reached"
)]
struct Cli {
    /// Generation scheme (see --list)
    #[arg(short, long, default_value = "words")]
    scheme: String,

    /// Minimum entropy of each password, in bits (at most 4096)
    #[arg(short, long, default_value_t = DEFAULT_BITS, allow_negative_numbers = true)]
    bits: f64,

    /// Word list used by the word schemes, one word per line
    #[arg(short, long, default_value = DEFAULT_WORDLIST)]
    wordlist: PathBuf,

    /// Number of passwords to generate
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    count: u32,

    /// Print passwords only
    #[arg(short, long)]
    quiet: bool,

    /// List available schemes and exit
    #[arg(short, long)]
    list: bool,

    /// Log more detail to stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ui::DisplayOptions::detect(cli.quiet);

    if cli.list {
        ui::display_schemes(&options);
        return Ok(());
    }

    let definition = entropass::lookup(&cli.scheme)?;
    let words = WordFile::new(&cli.wordlist);
    let scheme = definition
        .build(&words)
        .with_context(|| format!("Failed to build scheme \"{}\"", definition.name))?;

    let assembler = PasswordAssembler::new(scheme, cli.bits)?;
    let mut rng = ChaChaSource::from_os().context("Cannot generate passwords safely")?;

    let passwords: Vec<_> = (0..cli.count).map(|_| assembler.run(&mut rng)).collect();

    ui::display_output(
        &passwords,
        assembler.scheme(),
        assembler.target_bits(),
        &options,
    );

    Ok(())
}
