use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use qrdrop::download::{DirectoryTarget, DOWNLOAD_FILENAME};
use qrdrop::encoder::QrcodeEncoder;
use qrdrop::logging::setup_logging;
use qrdrop::{Generator, GeneratorState};

const SAVE_COMMAND: &str = ":save";
const QUIT_COMMAND: &str = ":quit";

/// Turn text into a QR code PNG.
#[derive(Parser, Debug)]
#[command(name = "qrdrop", version, about)]
struct Args {
    /// Text to encode. Without it, qrdrop starts an interactive session.
    text: Option<String>,

    /// Directory qr_code.png is saved into.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Also print the PNG data URI.
    #[arg(long)]
    print_uri: bool,

    /// Log pipeline steps to stderr.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    setup_logging(args.debug);

    let mut generator = Generator::new(QrcodeEncoder::new());
    let mut target = DirectoryTarget::new(&args.out_dir);

    match args.text.as_deref() {
        Some(text) => run_once(&mut generator, &mut target, text, args.print_uri),
        None => {
            run_interactive(&mut generator, &mut target, args.print_uri)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_once(
    generator: &mut Generator<QrcodeEncoder>,
    target: &mut DirectoryTarget,
    text: &str,
    print_uri: bool,
) -> Result<ExitCode> {
    generator.set_text(text);
    generator.generate();
    match generator.state() {
        GeneratorState::Success(image) => {
            if print_uri {
                println!("{}", image);
            }
            generator
                .download(target)
                .with_context(|| format!("Failed to save {}", DOWNLOAD_FILENAME))?;
            println!("Saved {}", target.dir().join(DOWNLOAD_FILENAME).display());
            Ok(ExitCode::SUCCESS)
        }
        GeneratorState::Error(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
        GeneratorState::Idle => Ok(ExitCode::FAILURE),
    }
}

fn run_interactive(
    generator: &mut Generator<QrcodeEncoder>,
    target: &mut DirectoryTarget,
    print_uri: bool,
) -> Result<()> {
    println!(
        "Type text and press Enter to generate. {} writes {} to {}, {} exits.",
        SAVE_COMMAND,
        DOWNLOAD_FILENAME,
        target.dir().display(),
        QUIT_COMMAND
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read from stdin")?;

        match line.as_str() {
            QUIT_COMMAND => break,
            SAVE_COMMAND => {
                if generator.image().is_none() {
                    println!("Nothing to save yet.");
                    continue;
                }
                match generator.download(target) {
                    Ok(()) => println!("Saved {}", target.dir().join(DOWNLOAD_FILENAME).display()),
                    Err(e) => eprintln!("{}", e),
                }
            }
            text => {
                generator.set_text(text);
                match generator.generate() {
                    GeneratorState::Success(image) => {
                        println!("Generated a QR code ({} bytes as a data URI).", image.as_str().len());
                        if print_uri {
                            println!("{}", image);
                        }
                    }
                    GeneratorState::Error(message) => eprintln!("{}", message),
                    GeneratorState::Idle => {}
                }
            }
        }
    }
    Ok(())
}
