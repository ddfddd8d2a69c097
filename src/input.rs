use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use url::Url;

use crate::{error::ResolveError, format};

/// Asks the user whether a URL may be fetched. Injected so tests can answer
/// without a terminal.
pub trait TrustPrompt {
    fn confirm(&mut self, url: &Url) -> io::Result<bool>;
}

pub struct TerminalPrompt;

impl TrustPrompt for TerminalPrompt {
    fn confirm(&mut self, url: &Url) -> io::Result<bool> {
        eprint!("Do you trust the URL: {url}? [y/n] ");
        io::stderr().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let answer = answer.trim();

        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Source {
    Stdin,
    File(PathBuf),
    Url(Url),
    Literal(String),
}

impl Source {
    /// URL-shaped tokens win over file paths, file paths win over literal
    /// JSON. A token that looks like an http(s) URL is never tried as a path.
    fn detect(token: &str) -> Self {
        if let Ok(url) = Url::parse(token) {
            if matches!(url.scheme(), "http" | "https") {
                return Self::Url(url);
            }
        }

        let path = Path::new(token);
        if path.is_file() {
            return Self::File(path.to_path_buf());
        }

        Self::Literal(token.to_string())
    }
}

pub fn resolve(
    token: Option<&str>,
    trust_all: bool,
    prompt: &mut dyn TrustPrompt,
) -> Result<Vec<u8>, ResolveError> {
    let source = match token.map(str::trim).filter(|token| !token.is_empty()) {
        None => Source::Stdin,
        Some(token) => Source::detect(token),
    };

    match source {
        Source::Stdin => read_stdin(),
        Source::Url(url) => {
            if !trust_all && !prompt.confirm(&url)? {
                return Err(ResolveError::UrlAccessDenied);
            }
            fetch(url)
        }
        Source::File(path) => Ok(fs::read(path)?),
        Source::Literal(text) => {
            if !format::is_valid(text.as_bytes()) {
                return Err(ResolveError::InvalidLiteral);
            }
            Ok(text.into_bytes())
        }
    }
}

fn read_stdin() -> Result<Vec<u8>, ResolveError> {
    // Nothing piped in and no argument given: there is no input to format.
    if atty::is(atty::Stream::Stdin) {
        return Err(ResolveError::NoInput);
    }

    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

fn fetch(url: Url) -> Result<Vec<u8>, ResolveError> {
    let response = reqwest::blocking::get(url)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResolveError::HttpStatus(status));
    }

    Ok(response.bytes()?.to_vec())
}
