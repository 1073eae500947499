/*!
 * Configuration handling for tokcount
 */

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::error::Result;
use crate::report::ReportFormat;
use crate::tokenizer::DEFAULT_MODEL;
use crate::{bail, ensure, error};

/// Path that selects standard input for `--file`
pub const STDIN_PATH: &str = "-";

/// Command-line arguments for tokcount
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "tokcount",
    version = env!("CARGO_PKG_VERSION"),
    about = "Count tokens for LLM models",
    long_about = "Counts the tokens a text consumes for various Large Language Model providers.\n\n\
Token counts are exact for OpenAI, Meta Llama 3 and Google Gemini. Claude uses estimation.",
    after_help = "Examples:\n  tokcount \"Hello world, this is a test\"\n  tokcount -f context.txt\n  \
tokcount -m gpt-4.1 -f prompt.md\n  cat prompt.md | tokcount -f -\n  tokcount --list"
)]
pub struct Args {
    /// Text to count; multiple words are joined with spaces
    pub text: Vec<String>,

    /// Path to file to analyze ("-" reads standard input)
    #[clap(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Model to use for tokenization
    #[clap(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// List all supported models
    #[clap(short = 'l', long)]
    pub list: bool,

    /// Output format
    #[clap(long, value_enum, default_value_t = ReportFormat::default())]
    pub format: ReportFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Count tokens of the input
    Count,
    /// Print the model catalog
    List,
    /// Print help text
    Help,
    /// Print shell completions
    Completions(Shell),
}

/// Where the text to count comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Text(String),
    /// Contents of a file
    File(PathBuf),
    /// Standard input
    Stdin,
    /// Nothing was provided
    Missing,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Action to perform
    pub command: Command,

    /// Input text source
    pub input: InputSource,

    /// Model used for tokenization, as typed by the user
    pub model: String,

    /// Output format
    pub format: ReportFormat,

    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let command = if let Some(shell) = args.generate {
            Command::Completions(shell)
        } else if args.list {
            Command::List
        } else if matches!(args.text.first().map(String::as_str), Some("help")) {
            Command::Help
        } else {
            Command::Count
        };

        let input = match args.file {
            Some(path) if path.as_os_str() == STDIN_PATH => InputSource::Stdin,
            Some(path) => InputSource::File(path),
            None if !args.text.is_empty() => InputSource::Text(args.text.join(" ")),
            None => InputSource::Missing,
        };

        Self {
            command,
            input,
            model: args.model,
            format: args.format,
            verbosity: args.verbose,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.command != Command::Count {
            return Ok(());
        }

        ensure!(
            !self.model.trim().is_empty(),
            InvalidArgument,
            "model name must not be empty"
        );

        match &self.input {
            InputSource::Missing => {
                bail!(Config, "no input provided. Use text argument or -f flag")
            }
            InputSource::File(path) if !path.is_file() => {
                bail!(Config, "input file not found: {}", path.display())
            }
            _ => Ok(()),
        }
    }

    /// Read the text to tokenize
    pub fn read_input(&self) -> Result<String> {
        match &self.input {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => fs::read_to_string(path)
                .map_err(|e| error!(Input, "failed to read file {}: {}", path.display(), e)),
            InputSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| error!(Input, "failed to read standard input: {}", e))?;
                Ok(text)
            }
            InputSource::Missing => Err(error!(Config, "no input provided")),
        }
    }

    /// Default tracing filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("tokcount").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["Hello", "world"]);
        assert_eq!(config.command, Command::Count);
        assert_eq!(config.input, InputSource::Text("Hello world".to_string()));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.format, ReportFormat::Table);
        assert_eq!(config.log_level(), "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_list_and_help() {
        assert_eq!(parse(&["--list"]).command, Command::List);
        assert_eq!(parse(&["-l"]).command, Command::List);
        assert_eq!(parse(&["help"]).command, Command::Help);
        assert_eq!(
            parse(&["--generate", "bash"]).command,
            Command::Completions(Shell::Bash)
        );
        assert!(parse(&["--list"]).validate().is_ok());
    }

    #[test]
    fn test_missing_input() {
        let err = parse(&[]).validate().unwrap_err();
        assert!(err.to_string().contains("no input provided"));
    }

    #[test]
    fn test_blank_model() {
        let err = parse(&["-m", " ", "text"]).validate().unwrap_err();
        assert!(err.to_string().contains("model name must not be empty"));
    }

    #[test]
    fn test_file_input_wins_over_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "from a file").unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["-f", path, "ignored", "words"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.read_input().unwrap(), "from a file");
    }

    #[test]
    fn test_missing_file() {
        let config = parse(&["-f", "/definitely/not/here.txt"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("input file not found"));
    }

    #[test]
    fn test_stdin_path() {
        assert_eq!(parse(&["-f", "-"]).input, InputSource::Stdin);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["-v", "x"]).log_level(), "info");
        assert_eq!(parse(&["-vv", "x"]).log_level(), "debug");
        assert_eq!(parse(&["-vvvv", "x"]).log_level(), "trace");
    }
}
