use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sstv_playlist_lib::api::AuthClient;
use sstv_playlist_lib::config::{
    resolve_credentials, AppConfig, ConfigSource, CredentialSource, EnvSource, FixedSource,
    ENV_SERVER,
};
use sstv_playlist_lib::console::{banner, say, Style};
use sstv_playlist_lib::errors::SstvError;
use sstv_playlist_lib::playlist::{self, PLAYLIST_FILENAME};
use sstv_playlist_lib::prompt::{self, PromptSource};
use sstv_playlist_lib::servers::{self, ServerPolicy};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Account username (overrides environment and config file)
    #[arg(short, long)]
    username: Option<String>,

    /// Account password (prefer SSTV_PASSWORD or the prompt; flags end up in shell history)
    #[arg(short, long)]
    password: Option<String>,

    /// Server region code, e.g. "dnaw" for US West
    #[arg(short, long)]
    server: Option<String>,

    /// Output file (defaults to SmoothStreamsTV.m3u8 in the working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail instead of warning when the server code is unrecognized
    #[arg(long)]
    strict_server: bool,

    /// Persist credentials and server choice to the config file
    #[arg(long)]
    save: bool,

    /// Suppress the greeting banner
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            say(Style::Error, &err.to_string());
            say(Style::Error, err.suggestion());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), SstvError> {
    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            say(
                Style::Warn,
                &format!("Could not read config file ({err}); continuing with defaults."),
            );
            AppConfig::default()
        }
    };

    // Credentials: CLI flags > environment > config file > interactive prompt
    let fixed = match (args.username.as_ref(), args.password.as_ref()) {
        (Some(username), Some(password)) => Some(FixedSource {
            username: username.clone(),
            password: password.clone(),
        }),
        _ => None,
    };
    let from_config = ConfigSource { config: &config };
    let mut sources: Vec<&dyn CredentialSource> = Vec::new();
    if let Some(fixed) = &fixed {
        sources.push(fixed);
    }
    sources.push(&EnvSource);
    sources.push(&from_config);

    let credentials = match resolve_credentials(&sources)? {
        Some((credentials, origin)) => {
            say(Style::Plain, &format!("Using credentials from {origin}."));
            credentials
        }
        None => {
            if !args.quiet {
                banner();
            }
            PromptSource.resolve()?.ok_or_else(|| {
                SstvError::AuthenticationFailed("no credentials provided".to_string())
            })?
        }
    };

    // Server: CLI flag > environment > config file > interactive prompt
    let code = match args
        .server
        .or_else(|| std::env::var(ENV_SERVER).ok().filter(|s| !s.is_empty()))
        .or_else(|| config.server.clone().filter(|s| !s.is_empty()))
    {
        Some(code) => code,
        None => prompt::prompt_server()?,
    };
    let policy = if args.strict_server {
        ServerPolicy::Reject
    } else {
        config.server_policy
    };
    let selection = servers::select(&code, policy)?;
    match selection.label() {
        Some(label) => say(
            Style::Success,
            &format!("\nYou have chosen the {label} server.\n"),
        ),
        None => say(
            Style::Warn,
            &format!(
                "\n\"{}\" is not a recognized server. The playlist will be built with \"{}\", but may not work as expected.\n",
                selection.code, selection.code
            ),
        ),
    }

    let client = AuthClient::new()?;
    let token = client.authenticate(&credentials).await?;
    say(Style::Success, "Thank you, authentication complete.\n");

    say(Style::Info, "\nPlease wait, generating playlist.");
    let text = playlist::generate(&selection.code, token.as_str());
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(PLAYLIST_FILENAME));
    let written = playlist::write_playlist(&output, &text)?;

    if args.save {
        config.remember(&credentials, &selection.code);
    }
    config.mark_generated();
    if let Err(err) = config.save() {
        say(Style::Warn, &format!("Could not update config file: {err}"));
    }

    say(Style::Info, "\nPlaylist built successfully, located at:");
    say(Style::Emphasis, &written.display().to_string());
    Ok(())
}
