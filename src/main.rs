use std::process;
use std::time::Instant;

use clap::Parser;
use serde_derive::Serialize;

use crate::cli::Cli;
use crate::configuration::{load_config, ConfigReadError, GeneratorConfig};
use crate::grammar::{CompiledGrammar, GrammarError};
use crate::log::log;

mod cli;
mod configuration;
mod grammar;
mod input;
mod log;

/// Everything a code generation backend consumes.
#[derive(Serialize)]
struct GrammarBundle<'a> {
    config: &'a GeneratorConfig,
    #[serde(flatten)]
    grammar: &'a CompiledGrammar,
}

fn print_trace(enabled: bool) {
    if !enabled {
        return;
    }

    for message in log::pull_messages(log::TRACE_CAPACITY) {
        eprintln!("{message}");
    }
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, ConfigReadError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    config.apply_cli(cli);
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(ConfigReadError::ReadError(e)) => {
            eprintln!("failed to read configuration file: {e}");
            process::exit(exitcode::IOERR)
        }

        Err(ConfigReadError::ParseError(e)) => {
            eprintln!("{e}");
            process::exit(exitcode::CONFIG)
        }
    };

    let grammar_content = match input::read_grammar(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error reading grammar: {e:#}");
            process::exit(exitcode::IOERR);
        }
    };

    let started = Instant::now();

    let compiled = match grammar::compile_grammar(&grammar_content) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("errors while compiling grammar");
            match &e {
                GrammarError::Syntax(_) => eprintln!("{}: {e}", cli.input),
                GrammarError::UnknownIdentifier(_) => eprintln!("{e}"),
            }
            print_trace(cli.trace);
            process::exit(exitcode::DATAERR)
        }
    };

    log!(
        "grammar verified in {}",
        humantime::format_duration(started.elapsed())
    );
    log!(
        "backend `{}` would write {} into {}",
        config.generator,
        config.cfg.fname,
        config.output.display()
    );

    if cli.dump {
        let bundle = GrammarBundle {
            config: &config,
            grammar: &compiled,
        };

        match serde_json::to_string_pretty(&bundle) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize grammar: {e}");
                print_trace(cli.trace);
                process::exit(exitcode::SOFTWARE)
            }
        }
    }

    print_trace(cli.trace);
}
