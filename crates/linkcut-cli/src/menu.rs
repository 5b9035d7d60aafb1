use crate::error::{CliError, Result};
use linkcut_core::{validate_url, Record, ShortCode};
use linkcut_shortener::{ShortenParams, Shortener, ShortenerError};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const MENU: &str = "What do you want to do?
1. Shorten a URL
2. Create a custom short code
3. Start the redirect server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Shorten,
    Custom,
    Serve,
}

impl FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Shorten),
            "2" => Ok(MenuChoice::Custom),
            "3" => Ok(MenuChoice::Serve),
            other => Err(CliError::UnknownChoice(other.to_string())),
        }
    }
}

/// What the operator asked for.
#[derive(Debug)]
pub enum MenuOutcome {
    Stored(Record),
    Serve,
}

/// The interactive menu, reading answers line by line from `input`.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the menu and performs the chosen action, except for starting the
    /// server which is left to the caller.
    pub async fn run<S: Shortener>(
        &mut self,
        shortener: &S,
        base_url: &str,
    ) -> Result<MenuOutcome> {
        let choice: MenuChoice = self.prompt(MENU, "a menu choice").await?.parse()?;

        let params = match choice {
            MenuChoice::Shorten => {
                let url = self.prompt("Enter your URL:", "a URL").await?;
                ShortenParams::generated(url)
            }
            MenuChoice::Custom => {
                let url = self.prompt("Enter your URL:", "a URL").await?;
                validate_url(&url).map_err(ShortenerError::from)?;
                let code = self
                    .prompt("Enter the custom code you want:", "a custom code")
                    .await?;
                let alias = ShortCode::custom(code).map_err(ShortenerError::from)?;
                ShortenParams::custom(url, alias)
            }
            MenuChoice::Serve => return Ok(MenuOutcome::Serve),
        };

        let record = shortener.shorten(params).await?;
        self.say(&describe(&record, base_url)).await?;
        Ok(MenuOutcome::Stored(record))
    }

    async fn prompt(&mut self, question: &str, what: &'static str) -> Result<String> {
        self.say(question).await?;
        self.read_value(what).await
    }

    /// Reads the next non-blank line, trimmed.
    async fn read_value(&mut self, what: &'static str) -> Result<String> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line).await? == 0 {
                return Err(CliError::UnexpectedEof(what));
            }
            let value = line.trim();
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// One-line summary of a stored record.
pub fn describe(record: &Record, base_url: &str) -> String {
    format!(
        "{} -> {} (id {})",
        record.short_code.to_url(base_url),
        record.address,
        record.id
    )
}
