use age_gate::core::ConfigProvider;
use age_gate::domain::data;
use age_gate::utils::logger;
use age_gate::{CheckEngine, CliConfig, EligibilityChecker, JsonReporter, OutputFormat, TextReporter};
use clap::Parser;
use std::io::{self, BufWriter};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let checker = EligibilityChecker::new(data::people_ages(), settings.eligible_range());
    let engine = CheckEngine::new(checker);
    let roster = data::test_names();
    let stdout = BufWriter::new(io::stdout().lock());

    let result = match settings.output_format() {
        OutputFormat::Text => engine.run(&roster, &mut TextReporter::new(stdout)),
        OutputFormat::Json => engine.run(&roster, &mut JsonReporter::new(stdout)),
    };

    if let Err(e) = result {
        tracing::error!("Run failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
