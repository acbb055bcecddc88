use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use charlm_core::io::open_corpus;
use charlm_core::model::{LanguageModel, ModelConfig};

/// Seed used when generation is not in "random" mode.
const FIXED_SEED: u64 = 20;

/// Train a character-level Markov model on a corpus and generate text.
#[derive(Parser, Debug)]
#[command(name = "charlm", version, about)]
struct Cli {
    /// Number of characters in each lookup window
    window_length: usize,

    /// Text to start generating from
    #[arg(allow_hyphen_values = true)]
    seed_text: String,

    /// Maximum number of characters to generate
    target_length: usize,

    /// "random" for a fresh random source, anything else for a fixed seed
    mode: String,

    /// Corpus file to train on
    corpus: PathBuf,

    /// Print the trained model to stderr
    #[arg(long)]
    dump: bool,
}

impl Cli {
    fn config(&self) -> charlm_core::Result<ModelConfig> {
        let config = ModelConfig::new(self.window_length)?;
        if self.mode == "random" {
            Ok(config)
        } else {
            Ok(config.with_seed(FIXED_SEED))
        }
    }
}

/// Trains a model on the corpus and returns the generated text.
///
/// A corpus shorter than the window leaves the model empty; the seed text is
/// then returned as-is.
fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let mut model = LanguageModel::new(cli.config()?);

    let mut corpus = open_corpus(&cli.corpus)?;
    let trained = model.train_chars(&mut corpus);
    corpus.finish()?;
    info!("trained on {} ({} windows)", cli.corpus.display(), model.len());

    match trained {
        Ok(()) => (),
        Err(e) if e.is_recoverable() => warn!("{e}"),
        Err(e) => return Err(e.into()),
    }

    if cli.dump {
        eprint!("{}", model.render());
    }

    Ok(model.generate(&cli.seed_text, cli.target_length))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::try_parse_from(["charlm", "3", "the", "100", "fixed", "corpus.txt"]).unwrap();
        assert_eq!(cli.window_length, 3);
        assert_eq!(cli.seed_text, "the");
        assert_eq!(cli.target_length, 100);
        assert_eq!(cli.corpus, PathBuf::from("corpus.txt"));
        assert!(!cli.dump);
        assert_eq!(cli.config().unwrap().seed(), Some(FIXED_SEED));
    }

    #[test]
    fn random_mode_is_unseeded() {
        let cli = Cli::try_parse_from(["charlm", "2", "ab", "5", "random", "c.txt", "--dump"]).unwrap();
        assert!(cli.dump);
        assert_eq!(cli.config().unwrap().seed(), None);
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["charlm", "2", "ab"]).is_err());
    }

    #[test]
    fn rejects_negative_target_length() {
        assert!(Cli::try_parse_from(["charlm", "2", "ab", "-5", "fixed", "c.txt"]).is_err());
    }

    #[test]
    fn zero_window_is_a_configuration_error() {
        let cli = Cli::try_parse_from(["charlm", "0", "ab", "5", "fixed", "c.txt"]).unwrap();
        assert!(cli.config().is_err());
    }

    fn cli_for(args: &[&str], corpus: &Path) -> Cli {
        let mut argv = vec!["charlm"];
        argv.extend_from_slice(args);
        argv.push(corpus.to_str().unwrap());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn short_corpus_returns_seed() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("short.txt");
        std::fs::write(&corpus, "ab").unwrap();

        let cli = cli_for(&["3", "ab", "5", "fixed"], &corpus);
        assert_eq!(run(&cli).unwrap(), "ab");
    }

    #[test]
    fn run_generates_from_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("abab.txt");
        std::fs::write(&corpus, "ababab").unwrap();

        let cli = cli_for(&["2", "ab", "4", "fixed", "--dump"], &corpus);
        assert_eq!(run(&cli).unwrap(), "ababab");
    }

    #[test]
    fn missing_corpus_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&["2", "ab", "4", "random"], &dir.path().join("missing.txt"));
        let err = run(&cli).unwrap_err();
        assert!(err.downcast_ref::<charlm_core::ModelError>().is_some());
    }
}
