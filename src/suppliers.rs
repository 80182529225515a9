//! Concrete candidate suppliers.
//!
//! These sit outside the engine: they turn files, a remote dictionary or a
//! fixed list into the candidate strings a round is drawn from.

use crate::config::HangmanConfig;
use crate::games::hangman::{CandidateSupplier, Difficulty, Mode, SupplyError};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Fixed in-memory word and phrase lists.
#[derive(Debug, Clone, Default)]
pub struct StaticSupplier {
    words: Vec<String>,
    phrases: Vec<String>,
}

impl StaticSupplier {
    /// Creates a supplier from word and phrase lists.
    #[instrument(skip(words, phrases))]
    pub fn new<W, P>(words: W, phrases: P) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }
}

impl CandidateSupplier for StaticSupplier {
    fn candidates(&self, mode: Mode, _difficulty: Difficulty) -> Result<Vec<String>, SupplyError> {
        Ok(match mode {
            Mode::Words => self.words.clone(),
            Mode::Phrases => self.phrases.clone(),
        })
    }
}

/// Supplier driven by [`HangmanConfig`].
///
/// Phrases come from the easy or hard phrase file depending on difficulty.
/// Words come from the local word list if configured, otherwise from the
/// remote dictionary.
#[derive(Debug, Clone)]
pub struct ConfiguredSupplier {
    config: HangmanConfig,
}

impl ConfiguredSupplier {
    /// Creates a supplier from configuration.
    #[instrument(skip(config))]
    pub fn new(config: HangmanConfig) -> Self {
        Self { config }
    }
}

impl CandidateSupplier for ConfiguredSupplier {
    #[instrument(skip(self))]
    fn candidates(&self, mode: Mode, difficulty: Difficulty) -> Result<Vec<String>, SupplyError> {
        match mode {
            Mode::Phrases => read_lines(self.config.phrase_list(difficulty)),
            Mode::Words => match self.config.word_list() {
                Some(path) => read_lines(path),
                None => RemoteWordSupplier::new(self.config.dictionary_url().clone())
                    .candidates(mode, difficulty),
            },
        }
    }
}

/// Words fetched from a remote dictionary, one per line.
///
/// Queried as `GET <dictionary_url>?difficulty=N`.
#[derive(Debug, Clone)]
pub struct RemoteWordSupplier {
    dictionary_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteWordSupplier {
    /// Creates a supplier for the dictionary URL with a default HTTP client.
    pub fn new(dictionary_url: String) -> Self {
        Self::with_client(dictionary_url, reqwest::blocking::Client::new())
    }

    /// Creates a supplier that issues requests through the given client.
    pub fn with_client(dictionary_url: String, client: reqwest::blocking::Client) -> Self {
        Self {
            dictionary_url,
            client,
        }
    }
}

impl CandidateSupplier for RemoteWordSupplier {
    #[instrument(skip(self), fields(url = %self.dictionary_url))]
    fn candidates(&self, mode: Mode, difficulty: Difficulty) -> Result<Vec<String>, SupplyError> {
        if mode != Mode::Words {
            return Err(SupplyError::new(format!(
                "Remote dictionary only supplies words, not {}",
                mode
            )));
        }

        let url = format!("{}?difficulty={}", self.dictionary_url, difficulty.level());
        debug!(url = %url, "Fetching word list");

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| {
                SupplyError::new(format!(
                    "There was a problem connecting and/or reading list of words from {}: {}",
                    url, e
                ))
            })?;

        let words = parse_lines(&body);
        info!(count = words.len(), "Word list fetched");
        Ok(words)
    }
}

#[instrument(skip(path), fields(path = %path.display()))]
fn read_lines(path: &Path) -> Result<Vec<String>, SupplyError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SupplyError::new(format!("Failed to read list '{}': {}", path.display(), e))
    })?;
    let lines = parse_lines(&content);
    debug!(count = lines.len(), "List read");
    Ok(lines)
}

fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tempfile::NamedTempFile;

    /// Serves one HTTP response on a loopback port and hands back the request line.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/words", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut header = String::new();
            loop {
                header.clear();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line
        });
        (url, handle)
    }

    fn loopback_supplier(url: String) -> RemoteWordSupplier {
        let client = reqwest::blocking::Client::builder().no_proxy().build().unwrap();
        RemoteWordSupplier::with_client(url, client)
    }

    fn level(n: u8) -> Difficulty {
        Difficulty::new(n).unwrap()
    }

    #[test]
    fn test_parse_lines_skips_blanks_and_lowercases() {
        assert_eq!(parse_lines("Apple\n\n  PEAR  \r\n"), vec!["apple", "pear"]);
    }

    #[test]
    fn test_static_supplier_by_mode() {
        let supplier = StaticSupplier::new(["cat"], ["the quick fox"]);
        assert_eq!(supplier.candidates(Mode::Words, level(1)).unwrap(), vec!["cat"]);
        assert_eq!(
            supplier.candidates(Mode::Phrases, level(1)).unwrap(),
            vec!["the quick fox"]
        );
    }

    #[test]
    fn test_missing_word_list_is_supply_error() {
        let toml = "word_list = \"/nonexistent/words.txt\"\n";
        let supplier = ConfiguredSupplier::new(HangmanConfig::from_toml(toml).unwrap());
        let err = supplier.candidates(Mode::Words, level(1)).unwrap_err();
        assert!(err.message.contains("/nonexistent/words.txt"));
    }

    #[test]
    fn test_configured_supplier_reads_phrase_list_for_difficulty() {
        let mut easy = NamedTempFile::new().unwrap();
        writeln!(easy, "Easy Does It").unwrap();
        let mut hard = NamedTempFile::new().unwrap();
        writeln!(hard, "Hard Times Ahead").unwrap();

        let toml = format!(
            "easy_phrases = {:?}\nhard_phrases = {:?}\n",
            easy.path().display().to_string(),
            hard.path().display().to_string()
        );
        let supplier = ConfiguredSupplier::new(HangmanConfig::from_toml(&toml).unwrap());

        assert_eq!(
            supplier.candidates(Mode::Phrases, level(6)).unwrap(),
            vec!["easy does it"]
        );
        assert_eq!(
            supplier.candidates(Mode::Phrases, level(7)).unwrap(),
            vec!["hard times ahead"]
        );
    }

    #[test]
    fn test_remote_supplier_fetches_words_for_difficulty() {
        let (url, server) = serve_once("200 OK", "Apple\n\nPear\n");
        let words = loopback_supplier(url).candidates(Mode::Words, level(7)).unwrap();

        let request_line = server.join().unwrap();
        assert!(request_line.starts_with("GET /words?difficulty=7 "), "{request_line}");
        assert_eq!(words, vec!["apple", "pear"]);
    }

    #[test]
    fn test_remote_supplier_error_status_is_supply_error() {
        let (url, server) = serve_once("500 Internal Server Error", "boom");
        let err = loopback_supplier(url).candidates(Mode::Words, level(3)).unwrap_err();

        server.join().unwrap();
        assert!(err.message.contains("500"), "{}", err.message);
    }

    #[test]
    fn test_remote_supplier_rejects_phrases() {
        let supplier = RemoteWordSupplier::new("http://localhost/words".to_string());
        assert!(supplier.candidates(Mode::Phrases, level(1)).is_err());
    }
}
