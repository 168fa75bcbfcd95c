//! Image crop-and-convert binary.
//!
//! ```text
//! image-crop input.png -o output.jpg --aspect 16:9
//! image-crop input.png --aspect 4:5    # writes input-4x5.jpg
//! ```

use std::process::ExitCode;

use clap::Parser;
use presskit::cli::{init_logging, CropArgs};
use presskit::{crop_image, default_output_path, AspectRatio, PressError, PrettyPrint};

fn main() -> ExitCode {
    let args = CropArgs::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CropArgs) -> presskit::Result<()> {
    if !args.input.exists() {
        return Err(PressError::FileNotFound(args.input));
    }

    let aspect: AspectRatio = args.aspect.parse()?;
    let quality = args.jpeg_quality();
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, aspect));

    let report = crop_image(&args.input, &output, aspect, quality)?;
    println!("{}", report.pretty_print());
    Ok(())
}
