mod parser;

use std::io::{self, Write};
use std::process::ExitCode;

use log::error;

use pretty_ms::config;
use pretty_ms::core::EmptyResult;

use self::parser::{GlobalOptions, Parser};

fn main() -> ExitCode {
    let parser = Parser::new();

    let global = match parser.parse_global() {
        Ok(global) => global,
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err}.");
            return ExitCode::FAILURE;
        },
    };

    if let Err(err) = easy_logging::init(module_path!(), global.log_level) {
        let _ = writeln!(io::stderr(), "Failed to initialize the logging: {err}.");
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(global, &parser) {
        error!("{err}.");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(global: GlobalOptions, parser: &Parser) -> EmptyResult {
    let options = config::load_options(global.config_path.as_deref())?;
    let (options, values) = parser.parse(options)?;

    let mut stdout = io::stdout().lock();
    for value in values {
        writeln!(stdout, "{}", pretty_ms::format(value, &options)?)?;
    }

    Ok(())
}
