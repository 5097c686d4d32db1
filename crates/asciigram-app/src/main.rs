//! Asciigram entry point.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use asciigram_app::{App, AppConfig, AppResult, CONFIG_ENV, ShortcutRegistry, demo};

/// Log file used when the config names none.
const LOG_ENV: &str = "ASCIIGRAM_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <path>]\n  {program} --demo [--config <path>]\n  {program} --help\n\n\
         --config reads a JSON config file (default: ${CONFIG_ENV}, then built-in defaults).\n\
         --demo prints a sample diagram and exits.\n\
         Logs go to the config's log_file, then ${LOG_ENV}, then stderr; filter with RUST_LOG."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config: Option<PathBuf>,
    demo: bool,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config = Some(PathBuf::from(path));
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--help" | "-h" => options.help = true,
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn init_logging(config: &AppConfig) {
    let mut builder = env_logger::Builder::from_default_env();
    let path = config
        .log_file
        .clone()
        .or_else(|| env::var_os(LOG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from));
    if let Some(path) = path {
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {e}; logging to stderr", path.display()),
        }
    }
    builder.init();
}

fn run(options: CliOptions) -> AppResult<()> {
    let config = AppConfig::resolve(options.config.as_deref(), env::var_os(CONFIG_ENV))?;
    init_logging(&config);
    log::info!("Starting Asciigram");

    if options.demo {
        print!("{}", demo::render_demo(&config));
        return Ok(());
    }

    App::new(&config).run()
}

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "asciigram".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            return ExitCode::from(2);
        }
    };
    if options.help {
        print_usage(&program);
        ShortcutRegistry::print_all();
        return ExitCode::SUCCESS;
    }

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{program}: {e}");
            ExitCode::FAILURE
        }
    }
}
