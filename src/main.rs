use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use yamlkeys::config::Config;
use yamlkeys::document::emitter::to_yaml_string;
use yamlkeys::document::tree::YamlTree;
use yamlkeys::file::loader::{load_yaml_file, load_yaml_from_stdin};
use yamlkeys::file::saver::{save_yaml_file, serialize_tree};
use yamlkeys::keypath::typed::from_value;

/// yamlkeys - read, write and delete values inside YAML files by key path
#[derive(Parser)]
#[command(name = "yamlkeys")]
#[command(version)]
#[command(about = "Read, write and delete values inside YAML files by key path", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/yamlkeys/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at KEYS as YAML
    Get {
        /// YAML file, or - for stdin
        file: String,
        /// Path tokens: map keys, [n] indices
        keys: Vec<String>,
    },
    /// Write VALUE (a YAML snippet) at KEYS
    Set {
        /// YAML file, or - for stdin
        file: String,
        /// Value to write, parsed as YAML
        value: String,
        /// Path tokens: map keys, [n] indices, [] to append
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the result instead of writing the file
        #[arg(long)]
        stdout: bool,
    },
    /// Remove the value at KEYS
    Delete {
        /// YAML file, or - for stdin
        file: String,
        /// Path tokens: map keys, [n] indices
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the result instead of writing the file
        #[arg(long)]
        stdout: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match cli.command {
        Command::Get { file, keys } => {
            let tree = load(&file)?;
            let value: serde_yaml::Value = tree
                .get_value(keys.as_slice())
                .with_context(|| format!("Cannot read {:?} from {}", keys, file))?;
            let node = from_value(value)?;
            print(&to_yaml_string(&node)?)?;
        }
        Command::Set {
            file,
            value,
            keys,
            stdout,
        } => {
            let mut tree = load(&file)?;
            let value: serde_yaml::Value =
                serde_yaml::from_str(&value).context("VALUE is not valid YAML")?;
            tree.set_value(&value, keys.as_slice())
                .with_context(|| format!("Cannot set {:?} in {}", keys, file))?;
            store(&file, &tree, &config, stdout)?;
        }
        Command::Delete { file, keys, stdout } => {
            let mut tree = load(&file)?;
            tree.delete_value(keys.as_slice())
                .with_context(|| format!("Cannot delete {:?} from {}", keys, file))?;
            store(&file, &tree, &config, stdout)?;
        }
    }

    Ok(())
}

fn load(file: &str) -> Result<YamlTree> {
    if file == "-" {
        load_yaml_from_stdin()
    } else {
        load_yaml_file(file)
    }
}

/// Writes the tree back to `file`, or prints it for stdin input and `--stdout`.
fn store(file: &str, tree: &YamlTree, config: &Config, stdout: bool) -> Result<()> {
    if stdout || file == "-" {
        print(&serialize_tree(tree)?)
    } else {
        save_yaml_file(file, tree, config)
    }
}

fn print(text: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
