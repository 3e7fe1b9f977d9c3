use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "line-kinds",
    "ast-treeviz",
    "ast-debug",
    "ast-diagnostics",
    "adf-json",
];

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("adf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lightweight markup to and from Atlassian Document Format")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .arg(input_arg("input"))
                .arg(Arg::new("from").long("from").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("extract").arg(input_arg("input")))
        .subcommand(Command::new("check").arg(input_arg("input")))
        .subcommand(
            Command::new("inspect").arg(input_arg("path")).arg(
                Arg::new("transform")
                    .index(2)
                    .value_parser(clap::builder::PossibleValuesParser::new(
                        AVAILABLE_TRANSFORMS,
                    ))
                    .value_hint(ValueHint::Other),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "adf", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "adf", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "adf", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
