use clap::Parser;
use letterbox::imaging::TargetSize;
use letterbox::{output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "letterbox")]
#[command(about = "Resize all images in a folder to a common size")]
#[command(long_about = "\
Resize all images in a folder to a common size

Every .jpg/.jpeg file in SRC_DIR is resized to exactly the target size:
images smaller than the target are enlarged uniformly, the result is fitted
inside the target without cropping or distortion, and the remaining space is
padded with centered black bars. Outputs keep their filename and encoding.

Typical use is preparing a training set for a fixed-input network:

  letterbox raw/ prepared/ --size 299")]
#[command(version)]
struct Cli {
    /// Resize all images in SRC_DIR
    #[arg(value_name = "SRC_DIR")]
    source: PathBuf,

    /// Save resized images in OUT_DIR (created if missing)
    #[arg(value_name = "OUT_DIR")]
    output: PathBuf,

    /// Target size: a single integer N (meaning N,N) or two comma-separated
    /// integers W,H
    #[arg(short, long, default_value = "299,299", value_name = "SIZE")]
    size: TargetSize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_resize_event(&event);
        }
    });

    let summary = process::process(&cli.source, &cli.output, cli.size, Some(tx))?;
    printer.join().unwrap();
    output::print_summary(&summary);

    Ok(())
}
