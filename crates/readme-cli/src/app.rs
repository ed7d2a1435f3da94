//! The `readme-builder` application.

use crate::cli::{CliArgs, Command, ConfigAction};
use crate::config::ReadmeConfig;
use readme_api::AppState;
use readme_core::Result;
use tracing_subscriber::EnvFilter;

// ============================================================================
// ReadmeCli
// ============================================================================

/// CLI application holding the loaded configuration.
#[derive(Debug)]
pub struct ReadmeCli {
    name: String,
    config: ReadmeConfig,
    version: String,
}

impl ReadmeCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = ReadmeConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: ReadmeConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &ReadmeConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                self.handle_config(config_cmd.command, args.config.as_deref())
            }
            Some(Command::Serve { host, port }) => self.serve(host, port).await,
            None => self.serve(None, None).await,
        }
    }

    /// Start the HTTP service, applying flag overrides to the config.
    pub async fn serve(&self, host: Option<String>, port: Option<u16>) -> Result<()> {
        let mut server = self.config.server.clone();
        if let Some(host) = host {
            server.host = host;
        }
        if let Some(port) = port {
            server.port = port;
        }

        let languages = self.config.markdown.languages();
        tracing::info!(
            name = %self.name,
            version = %self.version,
            languages = languages.len(),
            "starting readme service"
        );

        let state = AppState::in_memory(languages, self.config.export_path());
        readme_api::serve(&server.address(), state).await
    }

    fn handle_config(&self, action: ConfigAction, explicit: Option<&str>) -> Result<()> {
        match action {
            ConfigAction::Path => {
                match ReadmeConfig::resolve_config_path(explicit) {
                    Some(path) => println!("{}", path.display()),
                    None => println!("(no config path could be determined)"),
                }
                Ok(())
            }
            ConfigAction::Show => {
                print!("{}", self.config.to_toml_string()?);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
