// Command-line interface for adf
//
// This binary converts the line-oriented markup used in ticket descriptions and comments to and
// from Atlassian Document Format, extracts plain text from ADF, and reports markup problems.
// The conversions themselves live in the adf-babel crate; this is the shell around it.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Reading stdin ("-") assumes markup.
// Usage:
//  adf <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  adf convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  adf extract <input>                - Plain text of an ADF JSON document
//  adf check <input>                  - Report unterminated fences and unbalanced bold markers
//  adf inspect <path> [<transform>]   - Execute a transform (defaults to "ast-treeviz")
//  adf --list-formats                 - List available formats and transforms
//
// Extra Parameters:
//
// Configuration values can be overridden with --extra-<parameter-name> <value>.
// Known keys (pretty, table-layout, number-column, strict, language) update the loaded
// configuration; anything else is passed to the target format, which rejects what it does not know.
// Example:
//  adf notes.md --to adf --extra-pretty false --extra-table-layout wide

use adf_cli::transforms;

use adf_babel::formats::adf::AdfOptions;
use adf_babel::formats::markdown::parser::parse_with_diagnostics;
use adf_babel::formats::markdown::ParseOptions;
use adf_babel::{adf_to_text, FormatRegistry};
use adf_config::{AdfConfig, Loader, LOCAL_CONFIG_FILE};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io;

const STDIN_PATH: &str = "-";
const SUBCOMMANDS: &[&str] = &["convert", "extract", "check", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Input file path, or '-' for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("adf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lightweight markup to and from Atlassian Document Format")
        .long_about(
            "adf converts the markup used in ticket descriptions and comments into ADF,\n\
            the JSON document tree the ticketing service stores, and back.\n\n\
            Commands:\n  \
            - convert: Transform between formats (markdown, adf, text, treeviz)\n  \
            - extract: Flatten an ADF JSON document into plain text\n  \
            - check:   Report unterminated code fences and unbalanced bold markers\n  \
            - inspect: View how the markup is classified and parsed\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration values.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            adf notes.md --to adf                       # Convert to ADF (outputs to stdout)\n  \
            adf notes.md --to adf --extra-pretty false  # Compact JSON\n  \
            adf extract issue.json                      # Plain text of an ADF document\n  \
            cat notes.md | adf - --to text              # Read markup from stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an adf.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Line-oriented markup (.md, .markdown, .txt)\n  \
                    - adf:      Atlassian Document Format JSON (.json, .adf)\n  \
                    - text:     Flattened plain text (output only)\n  \
                    - treeviz:  Tree visualization (output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    adf convert notes.md --to adf                # Markup to ADF (stdout)\n  \
                    adf convert issue.json --to markdown         # ADF back to markup\n  \
                    adf convert notes.md --to adf -o issue.json  # Write a file\n  \
                    adf notes.md --to adf                        # 'convert' is optional",
                )
                .arg(input_arg("input"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Print the plain text of an ADF JSON document")
                .long_about(
                    "Flatten an ADF JSON document into one line of plain text.\n\n\
                    Every text node contributes its text, joined by single spaces.\n\
                    Node types the converter does not model (lists, panels, mentions)\n\
                    are walked as well, so any ADF document is accepted.",
                )
                .arg(input_arg("input")),
        )
        .subcommand(
            Command::new("check")
                .about("Report problems in a markup file")
                .long_about(
                    "Parse markup and list the irregularities the parser works around:\n  \
                    - code fences that are never closed\n  \
                    - lines with an odd number of '**' bold markers\n\n\
                    Exits with status 1 when anything is reported.",
                )
                .arg(input_arg("input")),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a markup file is classified and parsed")
                .arg(input_arg("path"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'ast-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    env_logger::init();

    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&cleaned_args) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => detect_source_format(input),
            };
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("extract", sub_matches)) => {
            handle_extract_command(required(sub_matches, "input"));
        }
        Some(("check", sub_matches)) => {
            handle_check_command(required(sub_matches, "input"), &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// A first argument that is a path (or "-") rather than a flag or subcommand.
fn should_inject_convert(args: &[String]) -> bool {
    args.get(1).is_some_and(|first| {
        (first == STDIN_PATH || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
    })
}

/// Fetch an argument clap already guarantees is present.
fn required<'a>(matches: &'a clap::ArgMatches, id: &str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{id}'");
            std::process::exit(1);
        }
    }
}

fn detect_source_format(input: &str) -> String {
    if input == STDIN_PATH {
        log::debug!("reading stdin; assuming markdown input");
        return "markdown".to_string();
    }
    let registry = FormatRegistry::default();
    match registry.format_for_path(input) {
        Some(detected) => detected.to_string(),
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    let result = if path == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn display_name(path: &str) -> &str {
    if path == STDIN_PATH {
        "<stdin>"
    } else {
        path
    }
}

fn registry_from_config(config: &AdfConfig) -> FormatRegistry {
    FormatRegistry::with_options(
        ParseOptions::from(&config.parse),
        AdfOptions::from(&config.serialize.adf),
    )
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &AdfConfig,
) {
    let registry = registry_from_config(config);

    // Validate both ends before touching the input
    if let Err(e) = registry.reader(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.writer(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let doc = if from == "markdown" && config.diagnostics.strict {
        let parsed = parse_with_diagnostics(&source, &ParseOptions::from(&config.parse));
        for diagnostic in &parsed.diagnostics {
            log::warn!("{}: {diagnostic}", display_name(input));
        }
        parsed.document
    } else {
        registry.parse(&source, from).unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        })
    };
    log::debug!("parsed {} blocks from {}", doc.children.len(), display_name(input));

    // Whatever the config layer did not consume goes to the target format
    let text = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{text}"),
    }
}

/// Handle the extract command
fn handle_extract_command(input: &str) {
    let source = read_input(input);
    let text = adf_to_text(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    println!("{text}");
}

/// Handle the check command
fn handle_check_command(input: &str, config: &AdfConfig) {
    let source = read_input(input);
    let parsed = parse_with_diagnostics(&source, &ParseOptions::from(&config.parse));

    for diagnostic in &parsed.diagnostics {
        println!("{}:{diagnostic}", display_name(input));
    }
    if !parsed.diagnostics.is_empty() {
        std::process::exit(1);
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &AdfConfig) {
    let source = read_input(path);
    let options = ParseOptions::from(&config.parse);

    let output = transforms::execute_transform(&source, transform, &options).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format in registry.formats() {
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!(
            "  {:<10} {direction:<7} {}",
            format.name(),
            format.description()
        );
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> AdfConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut AdfConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("pretty") {
        config.serialize.adf.pretty = parse_bool_arg("pretty", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["number-column", "numbered"]) {
        config.serialize.adf.number_column = parse_bool_arg("number-column", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["table-layout", "layout"]) {
        config.serialize.adf.table_layout = raw;
    }
    if let Some(raw) = extra_params.remove("strict") {
        config.diagnostics.strict = parse_bool_arg("strict", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["language", "default-code-language"]) {
        config.parse.default_code_language = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
