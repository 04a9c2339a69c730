use std::io::{self, Write};

use crate::config::{CredentialSource, Credentials};
use crate::console::{say, Style};
use crate::errors::SstvError;
use crate::servers;

fn read_line(prompt: &str) -> Result<String, SstvError> {
    say(Style::Info, prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Interactive credential entry. Username is echoed back, the password
/// is read without echo.
pub struct PromptSource;

impl CredentialSource for PromptSource {
    fn origin(&self) -> &'static str {
        "interactive prompt"
    }

    fn resolve(&self) -> Result<Option<Credentials>, SstvError> {
        say(
            Style::Emphasis,
            "You may store your credentials and server preference with --save,\n\
             or via the config file. Otherwise you will be prompted on each run.",
        );
        let username = read_line("\nPlease enter your username for SmoothStreamsTV:")?;
        say(Style::Success, &format!("\nThank you, {username}.\n"));
        say(Style::Info, "\nPlease enter your password for SmoothStreamsTV:");
        let password = rpassword::prompt_password("")?;
        Ok(Some(Credentials { username, password }))
    }
}

/// Present the region listing and read a server code. Acceptance is a
/// single attempt; validation happens in `servers::select`.
pub fn prompt_server() -> Result<String, SstvError> {
    say(Style::Info, "\nServer options:");
    for (label, code) in servers::SERVERS {
        say(Style::Info, &format!("    {label:<16} {code}"));
    }
    say(
        Style::Plain,
        "Example, for US West: enter \"dnaw\" (without the quotes)\n",
    );
    read_line("\nPlease choose your server:")
}
