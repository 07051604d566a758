// Command-line interface for mml-dump
//
// This binary reads a typed MML syntax tree in its JSON interchange form and writes it out as a
// tag dump (or normalized JSON). The core work happens in the mml-dump library; this is the shell.
//
// Usage:
//  mml-dump <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  mml-dump convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  mml-dump inspect <input> [<transform>]  - Show a view of the tree (defaults to "ast-tag")
//  mml-dump --list-formats                 - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  mml-dump tree.json --to tag --extra-initial-level 4

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use mml_config::{Loader, MmlConfig};
use mml_dump::format::parse_bool_option;
use mml_dump::formats::json::PRETTY_OPTION;
use mml_dump::formats::tag::INITIAL_LEVEL_OPTION;
use mml_dump::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::io::Write;

/// Configuration file picked up from the working directory when present.
const LOCAL_CONFIG: &str = "mml.toml";

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

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

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

fn build_cli() -> Command {
    Command::new("mml-dump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dump typed MML syntax trees as tagged text")
        .long_about(
            "mml-dump reads a typed MML syntax tree (JSON, as written by the front end)\n\
            and writes it as an indented tag dump with one tag pair per node.\n\n\
            Commands:\n  \
            - convert: Write the tree in another format (default command)\n  \
            - inspect: Show a view of the tree on stdout\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mml-dump tree.json --to tag                    # Tag dump to stdout\n  \
            mml-dump tree.json --to tag -o tree.tag        # Tag dump to a file\n  \
            mml-dump tree.json --to json --extra-pretty    # Pretty JSON\n  \
            mml-dump inspect tree.json --extra-initial-level 2",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug and trace output)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Log less (repeat to silence errors too)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show a view of a tree on stdout")
                .long_about(
                    "Show a view of a JSON-encoded tree.\n\n\
                    Transforms:\n  \
                    - ast-tag:   tag dump (default)\n  \
                    - ast-json:  the tree as pretty JSON\n\n\
                    Examples:\n  \
                    mml-dump inspect tree.json\n  \
                    mml-dump inspect tree.json ast-json --extra-pretty false",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON tree")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'ast-tag'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Write a tree in another format (default command)")
                .long_about(
                    "Convert a tree between formats.\n\n\
                    Supported formats:\n  \
                    - json: JSON interchange (.json), read and write\n  \
                    - tag:  tag dump (.tag, .xml), write only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
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
}

/// Re-parse with `convert` injected when the first argument looks like a path.
fn get_matches(cli: Command, args: &[String]) -> ArgMatches {
    match cli.clone().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            let injectable = args.len() > 1
                && !args[1].starts_with('-')
                && !matches!(args[1].as_str(), "inspect" | "convert" | "help");
            if !injectable {
                e.exit();
            }

            let mut new_args = vec![args[0].clone(), "convert".to_string()];
            new_args.extend_from_slice(&args[1..]);
            cli.try_get_matches_from(&new_args)
                .unwrap_or_else(|e2| e2.exit())
        }
    }
}

fn log_level(verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let index = (2 + verbose as usize).saturating_sub(quiet as usize);
    LEVELS[index.min(LEVELS.len() - 1)]
}

fn init_logging(matches: &ArgMatches) {
    let level = log_level(
        matches.get_count("verbose"),
        matches.get_count("quiet"),
    );
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter_level(level)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = get_matches(build_cli(), &cleaned_args);

    init_logging(&matches);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    // extras as given, before config-backed keys are folded into config
    let raw_extras = extra_params.clone();
    if let Err(e) = apply_config_overrides(&mut config, &mut extra_params) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: missing input path");
                std::process::exit(1);
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &raw_extras, &config);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                eprintln!("Error: convert needs an input and --to");
                std::process::exit(1);
            };

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match FormatRegistry::default().detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            if let Err(e) = check_option_targets(&raw_extras, to) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MmlConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let mut params = HashMap::new();
    if transform == "ast-tag" {
        params = format_options_from_config(config, "tag");
    }
    params.extend(extra_params.iter().map(|(k, v)| (k.clone(), v.clone())));

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MmlConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let root = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let mut format_options = format_options_from_config(config, to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let mut result = registry
        .serialize_with_options(&root, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
    // an empty dump (e.g. a bare data node) stays empty
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            log::info!("wrote {to} output to {path}");
        }
        None => print!("{result}"),
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("read");
        }
        if format.supports_serialization() {
            modes.push("write");
        }
        println!(
            "  {name:<6} {} [{}] (.{})",
            format.description(),
            modes.join("/"),
            format.file_extensions().join(", .")
        );
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MmlConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
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

/// Move config-backed extras into `config`, leaving the rest for the formats.
fn apply_config_overrides(
    config: &mut MmlConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), String> {
    if let Some(raw) = extra_params.remove(INITIAL_LEVEL_OPTION) {
        config.dump.initial_level = raw
            .parse()
            .map_err(|_| format!("Invalid value '{raw}' for --extra-{INITIAL_LEVEL_OPTION}"))?;
    }
    if let Some(raw) = extra_params.remove(PRETTY_OPTION) {
        config.json.pretty = parse_bool_option(PRETTY_OPTION, &raw).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Config-backed options belong to one format each.
fn check_option_targets(
    extra_params: &HashMap<String, String>,
    target: &str,
) -> Result<(), String> {
    for (option, format) in [(INITIAL_LEVEL_OPTION, "tag"), (PRETTY_OPTION, "json")] {
        if target != format && extra_params.contains_key(option) {
            return Err(format!("Format '{target}' does not support option '{option}'"));
        }
    }
    Ok(())
}

fn format_options_from_config(config: &MmlConfig, format: &str) -> HashMap<String, String> {
    let mut options = HashMap::new();
    match format {
        "tag" => {
            options.insert(
                INITIAL_LEVEL_OPTION.to_string(),
                config.dump.initial_level.to_string(),
            );
        }
        "json" => {
            options.insert(PRETTY_OPTION.to_string(), config.json.pretty.to_string());
        }
        _ => {}
    }
    options
}
