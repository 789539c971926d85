use anyhow::Result;
use clap::Parser;

use version_determiner::cli::{self, DetermineArgs};
use version_determiner::config;
use version_determiner::source::{CommandSource, FixedSource, VersionSource};
use version_determiner::ui;

/// Exit status for bad command-line arguments, matching clap's own usage errors.
const USAGE_EXIT_CODE: i32 = 2;

#[derive(clap::Parser)]
#[command(
    name = "version-determiner",
    version,
    about = "Compute the next release, tag or snapshot version from the current project version"
)]
struct Args {
    #[arg(help = "Output mode: release-version, version-tag or snapshot-version")]
    mode: String,

    #[arg(help = "Release type: MAJOR, MINOR or PATCH")]
    release_type: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        value_name = "VERSION",
        conflicts_with = "project_dir",
        help = "Use this current version instead of asking the build tool"
    )]
    current: Option<String>,

    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        help = "Directory to run the build tool in"
    )]
    project_dir: Option<String>,

    #[arg(long, help = "Print status messages to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let source: Box<dyn VersionSource> = match (&args.current, &args.project_dir) {
        (Some(current), _) => Box::new(FixedSource::new(current.as_str())),
        (None, Some(dir)) => {
            Box::new(CommandSource::from_config(&config.source).with_working_dir(dir))
        }
        (None, None) => Box::new(CommandSource::from_config(&config.source)),
    };

    let determine_args = DetermineArgs {
        mode: args.mode,
        release_type: args.release_type,
        tag_prefix: config.format.tag_prefix,
        verbose: args.verbose,
    };

    match cli::determine(&determine_args, source.as_ref()) {
        Ok(determination) => {
            println!("{}", determination.output);
            Ok(())
        }
        Err(e) if e.is_usage_error() => {
            ui::display_usage(&e.to_string());
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
