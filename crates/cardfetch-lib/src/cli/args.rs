use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone)]
pub struct Command {
    pub config_path: Option<String>,
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "cardfetch",
    version,
    about = "Download every JW Timeline card image into public/images"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "HTTP and pacing settings (default: ./cardfetch.toml when present)"
    )]
    config: Option<String>,
}

pub fn log_level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();
    let log_level = log_level_for(cli.verbose);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper_util=warn".parse().unwrap())
                .add_directive("reqwest=info".parse().unwrap()),
        )
        .init();

    Args {
        command: Command {
            config_path: cli.config,
        },
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["cardfetch"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["cardfetch", "public/other"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["cardfetch", "-vv", "-c", "fetch.yaml"]).unwrap();
        assert_eq!(log_level_for(cli.verbose), Level::TRACE);
        assert_eq!(cli.config.as_deref(), Some("fetch.yaml"));
        assert_eq!(log_level_for(1), Level::DEBUG);
        assert_eq!(log_level_for(0), Level::INFO);
    }
}
