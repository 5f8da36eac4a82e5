use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use mccolor::{
    display_timezone, ColorChoice, ColorScheme, ErrorStrategy, LineFormatter, StreamColorizer,
    StreamConfig,
};

#[derive(Parser)]
#[command(name = "mccolor")]
#[command(about = "Colorize Minecraft-style server log lines for terminal viewing")]
#[command(version)]
struct Args {
    /// Input file (default: stdin)
    #[arg(short = 'i', long = "input")]
    input_file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    /// Report malformed lines on stderr and continue instead of stopping
    /// at the first error
    #[arg(long)]
    skip_errors: bool,

    /// When to emit color escapes
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Buffer size for I/O
    #[arg(long, default_value = "65536")] // 64KB
    buffer_size: usize,

    /// Debug mode - show processing details
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(errors) if errors > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("mccolor: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<usize> {
    let use_colors = args.color.resolve(args.output_file.is_some());
    let formatter = LineFormatter::new(ColorScheme::new(use_colors), display_timezone());

    let config = StreamConfig {
        error_strategy: if args.skip_errors {
            ErrorStrategy::Skip
        } else {
            ErrorStrategy::FailFast
        },
        debug: args.debug || args.skip_errors,
    };

    let input: Box<dyn BufRead> = if let Some(input_path) = &args.input_file {
        let file = File::open(input_path)
            .with_context(|| format!("failed to open input file '{}'", input_path.display()))?;
        Box::new(BufReader::with_capacity(args.buffer_size, file))
    } else {
        Box::new(BufReader::with_capacity(args.buffer_size, io::stdin()))
    };

    let mut output: Box<dyn Write> = if let Some(output_path) = &args.output_file {
        let file = File::create(output_path)
            .with_context(|| format!("failed to create output file '{}'", output_path.display()))?;
        Box::new(io::BufWriter::with_capacity(args.buffer_size, file))
    } else {
        Box::new(io::BufWriter::with_capacity(args.buffer_size, io::stdout()))
    };

    let colorizer = StreamColorizer::new(formatter, config);
    let stats = colorizer.process_stream(input, &mut output)?;

    output.flush()?;

    if args.debug {
        eprintln!("Final statistics:");
        eprintln!("  Lines processed: {}", stats.lines_processed);
        eprintln!("  Lines output: {}", stats.lines_output);
        eprintln!("  Errors: {}", stats.errors);
        eprintln!("  Processing time: {:?}", stats.processing_time);
    }

    Ok(stats.errors)
}
