use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::logging::{init_tracing, log_level};
use recase::cli::output::{self, OutputFormat};
use recase::config::{Overrides, LOCAL_CONFIG_FILE};
use recase::{input, Config, Conversion, ConvertResult, Style};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert text to camelCase or dot.case", long_about = None)]
struct Cli {
    /// Texts to convert (reads stdin, one per line, when none are given)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (camel, dot)
    #[arg(short, long, env = "RECASE_STYLE")]
    style: Option<Style>,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    file: Vec<PathBuf>,

    /// Treat inputs as JSON values; non-string values are rejected
    #[arg(long)]
    json: bool,

    /// Omit inputs that convert to an empty string
    #[arg(long)]
    skip_empty: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs could not be converted
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
enum ConfigCommands {
    /// Show where configuration files are read from
    Path,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    init_tracing(log_level(cli.verbose, cli.quiet));

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        style: cli.style,
        format: cli.format,
        skip_empty: cli.skip_empty,
        no_color: cli.no_color,
    })?;

    if let Some(command) = cli.command.take() {
        return handle_command(command, &config);
    }

    let mut result = collect(&cli, config.style)?;
    if config.skip_empty {
        result.skip_empty();
    }
    info!(
        style = %config.style,
        total = result.conversions.len(),
        failed = result.failed_count,
        "conversion finished"
    );

    {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        output::print_conversions(
            &mut stdout,
            &mut stderr,
            &result,
            config.style,
            config.format,
            config.color,
        )?;
        if config.format == OutputFormat::Text {
            output::print_summary(
                &mut stderr,
                result.failed_count,
                result.conversions.len(),
                config.color,
            )?;
        }
        stdout.flush()?;
    }

    if result.failed_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn collect(cli: &Cli, style: Style) -> Result<ConvertResult> {
    let mut result = ConvertResult::default();

    for arg in &cli.inputs {
        let conversion = if cli.json {
            Conversion::from_json_str(arg, style)
        } else {
            Conversion::from_text(arg, style)
        };
        result.push(conversion);
    }

    for path in &cli.file {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        debug!(path = %path.display(), bytes = contents.len(), "read input file");
        push_contents(&mut result, &contents, cli.json, style)
            .with_context(|| format!("Failed to read inputs from {}", path.display()))?;
    }

    if cli.inputs.is_empty() && cli.file.is_empty() {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read stdin")?;
        debug!(bytes = contents.len(), "read stdin");
        push_contents(&mut result, &contents, cli.json, style)?;
    }

    Ok(result)
}

fn push_contents(result: &mut ConvertResult, contents: &str, json: bool, style: Style) -> Result<()> {
    if json {
        for value in input::parse_values(contents)? {
            result.push(Conversion::from_value(&value, style));
        }
    } else {
        for line in contents.lines() {
            result.push(Conversion::from_text(line, style));
        }
    }
    Ok(())
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Config { action } => match action {
            ConfigCommands::Path => {
                match Config::global_config_path() {
                    Some(path) => println!("global: {}", path.display()),
                    None => println!("global: (unavailable)"),
                }
                println!("local:  {}", LOCAL_CONFIG_FILE);
            }
            ConfigCommands::Show => {
                print!("{}", config.to_toml()?);
            }
        },
    }
    Ok(())
}
