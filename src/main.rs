use hostfacts::app;
use hostfacts::config::AppConfig;
use hostfacts::logging::{self, CRITICAL_TARGET};
use hostfacts::sysinfo_repo::SysinfoRepo;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Cannot open log file: {:#}", e);
        return ExitCode::FAILURE;
    }

    // Panics get the same treatment as other unexpected failures: logged, no trace on the console.
    let failure = app::failure_message(&config);
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(target: CRITICAL_TARGET, "Critical error: {}", info);
        println!("{}", failure);
    }));

    let source = SysinfoRepo::new();
    let mut stdout = std::io::stdout().lock();
    app::execute(&source, &config, &mut stdout).into()
}
