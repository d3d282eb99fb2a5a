use clap::Parser;
use log::LevelFilter;

use taskload::app::App;
use taskload::assessment::FileAssessmentStore;
use taskload::cli::Cli;
use taskload::config::Settings;
use taskload::prompt::StdinPrompter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        LevelFilter::Error
    } else {
        match cli.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_target(false)
        .format_timestamp(None)
        .init();

    // Settings from environment, then CLI overrides
    let settings = Settings::from_env().with_overrides(
        cli.model.clone(),
        cli.store_dir.clone(),
        cli.features.as_deref(),
    );

    let store = FileAssessmentStore::new(settings.store_dir.clone());
    let mut app = App::new(store, StdinPrompter::stdin(), settings);

    if let Err(err) = app.run(cli.command) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
