#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// What to do once configuration has been loaded.
#[derive(Debug, PartialEq, Eq)]
pub enum Run {
    Ask,
    Screen,
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

pub fn log_dir() -> path::PathBuf {
    if let Ok(dir) = std::env::var("PAUSE_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pause");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Pause")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Pause with environment variable RUST_LOG=pause")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn global_arg(key: ConfigKey, env: &'static str, help: String) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(help)
        .global(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("pause")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(Command::new("ask").about("Fetch a single question, print it and exit."))
        .subcommand(Command::new("screen").about("Open the interactive screen. This is the default."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("PAUSE_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(global_arg(
            ConfigKey::GroqToken,
            "PAUSE_GROQ_TOKEN",
            "Groq API token used as the bearer credential for every request.".to_string(),
        ))
        .arg(global_arg(
            ConfigKey::GroqURL,
            "PAUSE_GROQ_URL",
            format!("Groq OpenAI compatible API URL. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::GroqURL)),
        ))
        .arg(global_arg(
            ConfigKey::MaxTokens,
            "PAUSE_MAX_TOKENS",
            format!("Upper bound on the length of the generated question, in tokens. [default: {}]", Config::default(ConfigKey::MaxTokens)),
        ))
        .arg(
            global_arg(
                ConfigKey::Model,
                "PAUSE_MODEL",
                format!("The model asked for reflection questions. [default: {}]", Config::default(ConfigKey::Model)),
            )
            .short('m'),
        )
        .arg(global_arg(
            ConfigKey::RequestTimeout,
            "PAUSE_REQUEST_TIMEOUT",
            format!("Time to wait in milliseconds for the question service before giving up. [default: {}]", Config::default(ConfigKey::RequestTimeout)),
        ))
        .arg(global_arg(
            ConfigKey::Temperature,
            "PAUSE_TEMPERATURE",
            format!("Sampling temperature. [default: {}]", Config::default(ConfigKey::Temperature)),
        ));
}

/// Parses arguments and handles every subcommand that doesn't need the
/// question service. Returns `None` when there is nothing left to run.
pub async fn parse() -> Result<Option<Run>> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    println!("{}", log_dir().join("debug.log").to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(None);
        }
        Some(("ask", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            return Ok(Some(Run::Ask));
        }
        Some(("screen", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            return Ok(Some(Run::Screen));
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(None);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(None);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(None);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(None);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(None);
            }
        },
        _ => {
            Config::load(vec![&matches]).await?;
            return Ok(Some(Run::Screen));
        }
    }
}
