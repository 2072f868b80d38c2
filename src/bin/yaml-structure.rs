//! Command-line interface for yaml-structure
//! This binary inspects the structure tree of YAML-like files.
//!
//! Usage:
//!   yaml-structure dump `<path>` [--format `<format>`] [--config `<config>`]  - Print the structure tree
//!   yaml-structure find `<path>` `<offset|line:column>` [--stack]             - Show the node at a position
//!   yaml-structure get `<path>` `<dotted.path>`                               - Print the subtree at a key path

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yaml_structure::yaml::config::{Loader, StructureConfig, PROJECT_CONFIG_FILE};
use yaml_structure::yaml::formats::{render, OutputFormat};
use yaml_structure::yaml::range::SourceLocation;
use yaml_structure::yaml::structure::{format_at_offset, parse, YamlStructure};
use yaml_structure::YamlPath;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("yaml-structure")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the key structure of YAML-like files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dump")
                .about("Print the structure tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: dump, treeviz or json (overrides inspect.format)")
                        .value_parser(["dump", "treeviz", "json"]),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the defaults"),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("Show the deepest node at a byte offset or zero-based line:column")
                .arg(path_arg())
                .arg(
                    Arg::new("position")
                        .help("Byte offset (e.g. 42) or line:column (e.g. 3:4)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("stack")
                        .long("stack")
                        .help("Also list every enclosing node, deepest first")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the subtree text of the node at a dotted key path")
                .arg(path_arg())
                .arg(
                    Arg::new("key-path")
                        .help("Dotted key path, e.g. server.port or logging.level.\"org.example\"")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("dump", dump_matches)) => handle_dump_command(dump_matches),
        Some(("find", find_matches)) => handle_find_command(find_matches),
        Some(("get", get_matches)) => handle_get_command(get_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the YAML file")
        .required(true)
        .index(1)
}

fn required<'m>(matches: &'m ArgMatches, name: &str) -> Result<&'m String> {
    matches
        .get_one::<String>(name)
        .with_context(|| format!("missing argument '{}'", name))
}

fn load_structure(path: &str) -> Result<YamlStructure> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading file '{}'", path))?;
    Ok(parse(source))
}

fn load_config(matches: &ArgMatches) -> Result<StructureConfig> {
    let mut loader = Loader::new();
    if Path::new(PROJECT_CONFIG_FILE).exists() {
        debug!(file = PROJECT_CONFIG_FILE, "layering project configuration");
        loader = loader.with_optional_file(PROJECT_CONFIG_FILE);
    }
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format: OutputFormat = format.parse()?;
        loader = loader.set_override("inspect.format", format.name())?;
    }
    loader.build().context("Invalid configuration")
}

/// Handle the dump command
fn handle_dump_command(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let structure = load_structure(required(matches, "path")?)?;
    print!("{}", render(&structure, &config.inspect)?);
    Ok(())
}

/// Handle the find command
fn handle_find_command(matches: &ArgMatches) -> Result<()> {
    let structure = load_structure(required(matches, "path")?)?;
    let location = SourceLocation::new(structure.source());
    let offset = location.resolve(required(matches, "position")?)?;
    let node = structure.find(offset);

    println!(
        "node: {}({}) [{}..{}]",
        node.kind().name(),
        node.dump_indent(),
        node.start(),
        node.tree_end()
    );
    println!("position: {}", location.byte_to_position(offset));
    if let Some(key) = node.key() {
        println!("key: {}", key);
        println!("in-key: {}", node.is_in_key(offset));
    }
    println!("path: {}", YamlPath::of(node));
    println!("text: {}", node.text());

    if matches.get_flag("stack") {
        println!("stack:");
        println!("{}", format_at_offset(&structure, offset));
    }
    Ok(())
}

/// Handle the get command
fn handle_get_command(matches: &ArgMatches) -> Result<()> {
    let structure = load_structure(required(matches, "path")?)?;
    let key_path = required(matches, "key-path")?;
    let path: YamlPath = key_path
        .parse()
        .with_context(|| format!("Invalid key path '{}'", key_path))?;

    match path.traverse(structure.root()) {
        Some(node) => {
            print!("{}", node.tree_text());
            Ok(())
        }
        None => bail!("No node at path '{}'", path),
    }
}
