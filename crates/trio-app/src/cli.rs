use clap::Parser;

/// Trio: side-by-side chat assistants in one window.
#[derive(Parser, Debug)]
#[command(name = "trio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error) or a full filter
    /// directive such as `trio_coordinator=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["trio"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn config_and_log_level() {
        let args =
            Args::try_parse_from(["trio", "--config", "/tmp/trio.toml", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/trio.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
