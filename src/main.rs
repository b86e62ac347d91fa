// std imports
use std::{
    io::{stderr, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser, error::ErrorKind};
use env_logger::{self as logger};

// local imports
use wsub::{
    App, Options,
    cli::{self, parse_non_zero_size},
    config,
    error::*,
};

const WSUB_DEBUG_LOG: &str = "WSUB_DEBUG_LOG";
const WSUB_DEBUG_LOG_STYLE: &str = "WSUB_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WSUB_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WSUB_DEBUG_LOG).write_style(WSUB_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let args: Vec<_> = wild::args_os().collect();
    cli::check_args(&args)?;

    let opt = match cli::Opt::try_parse_from(&args) {
        Ok(opt) => opt,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return err.print().map_err(Error::Io);
        }
        Err(err) => return Err(cli::usage_error(err)),
    };

    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(());
    }

    let (offset, no_default_configs) = opt
        .config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    let configs = opt.config[offset..].to_vec();
    let buffer_size = opt.buffer_size;

    let request = opt.validate()?;
    log::debug!("search: {:?}, wildcard: {}, range: {}", request.search, request.wildcard, request.range);

    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("settings: {:?}", settings);
    config::global::initialize(settings.clone());

    let buffer_size = match buffer_size {
        Some(value) => value,
        None => parse_non_zero_size(&settings.buffer_size)?,
    };

    let app = App::new(Options {
        search: request.search,
        wildcard: request.wildcard,
        replacement: request.replacement,
        range: request.range,
        buffer_size,
    });

    let stats = app.run(&request.input.into(), &request.output.into())?;
    log::debug!(
        "done: {} line(s) read, {} selected, {} changed, {} replacement(s)",
        stats.lines,
        stats.selected,
        stats.changed,
        stats.replacements
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log(config::get().color.resolve(&stderr()));
        process::exit(err.kind().code());
    }
}
