use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tour_vector::demo::{self, DemoOptions};

/// Store a number in a fixed-size buffer and print it back with the buffer size.
#[derive(Parser, Debug)]
struct Args {
    /// Number of slots in the buffer.
    #[arg(short, long, default_value_t = 3)]
    len: usize,

    /// Slot that receives the value.
    #[arg(short, long, default_value_t = 2)]
    index: usize,

    /// Value to store. Read from stdin when omitted.
    #[arg(short, long, allow_hyphen_values = true)]
    value: Option<f64>,

    /// Report an out of range index as an error instead of panicking.
    #[arg(long)]
    checked: bool,

    /// Go through the container abstraction instead of the buffer itself.
    #[arg(long)]
    container: bool,

    /// Also print every slot.
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tour_vector=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let opts = DemoOptions {
        len: args.len,
        index: args.index,
        value: args.value,
        checked: args.checked,
        container: args.container,
        dump: args.dump,
    };

    demo::run(&opts, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
