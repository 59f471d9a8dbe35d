use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use envgen::{
    Cli, EnvGen, EnvgenError, GenResult, Service, TerminalAnswers, logging, parse_assignments,
};

fn path_setting(path: Option<&Path>) -> Option<String> {
    path.map(|p| p.to_string_lossy().into_owned())
}

fn run(cli: Cli) -> Result<(), EnvgenError> {
    let values = parse_assignments(&cli.set)?;
    let action = cli.into_action();

    let builder = EnvGen::builder()
        .setting("config_dir", path_setting(cli.config_dir.as_deref()))
        .setting("templates_dir", path_setting(cli.templates_dir.as_deref()))
        .setting("input", path_setting(cli.input.as_deref()))
        .setting("output", path_setting(cli.output.as_deref()))
        .setting("profile", cli.profile.map(|p| p.as_str()))
        .values(values);

    let mut answers = TerminalAnswers::new();
    builder.handle_and_print(&action, &mut answers)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.lists_services() {
                eprint!("{}", GenResult::Services(Service::ALL.to_vec()));
            }
            ExitCode::FAILURE
        }
    }
}
