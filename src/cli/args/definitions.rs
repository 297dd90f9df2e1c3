use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, ColorChoice, FromArgMatches, Parser};

use super::options::{LanguageArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Environment variable backing `--api-url`.
pub(crate) const API_URL_ENV: &str = "LEETEX_API_URL";

/// Command-line arguments accepted by the `leetex` binary.
#[derive(Parser, Debug)]
#[command(
	name = "leetex",
	version,
	long_version = long_version(),
	about = "Search coding-interview problems and generate Haskell solutions",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LEETEX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search for QUERY as soon as the explorer starts (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 'L',
		long,
		value_enum,
		help = "Reference solution language shown first (default: java)"
	)]
	pub(crate) language: Option<LanguageArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'a',
		long = "api-url",
		value_name = "URL",
		env = API_URL_ENV,
		help = "Base URL of the problem API (default: http://127.0.0.1:8000/api/)"
	)]
	pub(crate) api_url: Option<String>,
	/// Set when `api_url` was read from `LEETEX_API_URL` rather than typed.
	#[arg(skip)]
	pub(crate) api_url_from_env: bool,
	#[arg(
		short = 't',
		long = "timeout",
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: 60)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to FILE (default: leetex.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// Build the arguments from parsed matches, remembering which values were
	/// taken from the environment.
	pub(crate) fn from_matches(matches: &ArgMatches) -> Self {
		let mut args = Self::from_arg_matches(matches).unwrap_or_else(|err| err.exit());
		args.api_url_from_env = matches.value_source("api_url") == Some(ValueSource::EnvVariable);
		args
	}
}
