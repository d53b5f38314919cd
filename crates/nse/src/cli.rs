use clap::{Parser, Subcommand, ValueEnum};
use nse_spider::embed::{DATA_FILE, JS_FILE, JS_VAR_NAME};
use nse_spider::stock::nse::ALL_INDICES_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// What to run; without a command, `run` is assumed.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Sets the level of tracing.
    #[arg(short, long, global = true, default_value = "INFO")]
    pub trace: TraceLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the NSE indices and save the sectoral ones as JSON.
    Spider(SpiderArgs),

    /// Rewrite the saved JSON as a JavaScript variable for the web page.
    Embed(EmbedArgs),

    /// `spider`, then `embed`, with the default files.
    Run,
}

#[derive(clap::Args, Debug)]
pub struct SpiderArgs {
    /// The indices endpoint.
    #[arg(long, default_value = ALL_INDICES_URL)]
    pub url: String,

    /// Where to save the sectoral indices.
    #[arg(short, long, default_value = DATA_FILE)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct EmbedArgs {
    /// The saved sectoral indices.
    #[arg(short, long, default_value = DATA_FILE)]
    pub input: PathBuf,

    /// Where to write the JavaScript.
    #[arg(short, long, default_value = JS_FILE)]
    pub output: PathBuf,

    /// Name of the declared variable.
    #[arg(long = "var", default_value = JS_VAR_NAME)]
    pub var_name: String,
}

impl Default for SpiderArgs {
    fn default() -> Self {
        Self {
            url: ALL_INDICES_URL.to_string(),
            output: PathBuf::from(DATA_FILE),
        }
    }
}

impl Default for EmbedArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DATA_FILE),
            output: PathBuf::from(JS_FILE),
            var_name: JS_VAR_NAME.to_string(),
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_everything() {
        let cli = Cli::try_parse_from(["nse"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.trace, TraceLevel::INFO);
    }

    #[test]
    fn spider_defaults_to_the_original_files() {
        let cli = Cli::try_parse_from(["nse", "spider"]).unwrap();
        match cli.command {
            Some(Commands::Spider(args)) => {
                assert_eq!(args.url, "https://www.nseindia.com/api/allIndices");
                assert_eq!(args.output, PathBuf::from("nse_sectoral_data.json"));
            }
            other => panic!("expected spider, got {other:?}"),
        }
    }

    #[test]
    fn embed_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "nse", "embed", "-i", "in.json", "-o", "out.js", "--var", "data", "-t", "DEBUG",
        ])
        .unwrap();
        assert_eq!(cli.trace, TraceLevel::DEBUG);
        match cli.command {
            Some(Commands::Embed(args)) => {
                assert_eq!(args.input, PathBuf::from("in.json"));
                assert_eq!(args.output, PathBuf::from("out.js"));
                assert_eq!(args.var_name, "data");
            }
            other => panic!("expected embed, got {other:?}"),
        }
    }

    #[test]
    fn trace_levels_are_uppercase() {
        assert!(Cli::try_parse_from(["nse", "-t", "debug"]).is_err());
        assert!(Cli::try_parse_from(["nse", "run", "--trace", "WARN"]).is_ok());
    }
}
