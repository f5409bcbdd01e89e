use clap::Parser;
use imgresize::{
    open_with_default_app, supported_formats, Cli, ImageProcessor, ProcessConfig, Prompter,
};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let formats = supported_formats();
    if formats.is_empty() {
        println!("Error: this build has no image codecs enabled.");
        println!("Rebuild with an image format feature enabled (e.g. png, jpeg).");
        std::process::exit(1);
    }
    log::debug!("Codecs available: {:?}", formats);

    let mut prompter = Prompter::stdio();
    let request = prompter.collect_request()?;

    let config = ProcessConfig {
        algorithm: cli.filter.into(),
        ..Default::default()
    };
    let success = ImageProcessor::new(config).run(&request);

    if success {
        prompter.say("\n✅ Image resized successfully!")?;

        if prompter.confirm_once("\nWould you like to open the resized image? (y/n): ")? {
            open_with_default_app(request.output_path());
        }
    } else {
        prompter.say("\n❌ Failed to resize image.")?;
    }

    Ok(())
}
