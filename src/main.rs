//! CJK Match - Main entrypoint.
//!
//! Command line front end for dictionary matching and pinyin conversion.
//! It loads configuration, initializes logging, and runs one command.

use cjk_match_lib::config::{
    self, CjkMatchConfig, ConfigLoader, LogConfig, MatcherConfig, Validate,
};
use cjk_match_lib::data_structures::dict_trie::DictTrie;
use cjk_match_lib::data_structures::text_matcher::{
    Hits, MatchStrategy, MatcherOptions, OverlapResolver, TextMatcher,
};
use cjk_match_lib::error::{
    report_error, set_error_reporter, CjkMatchError, CjkMatchResult, ErrorContext,
    TracingErrorReporter,
};
use cjk_match_lib::nlp::{self, PinyinConverter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

/// Command line arguments for CJK Match.
#[derive(Parser, Debug)]
#[clap(name = "cjk_match", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Find dictionary entries in a text
    Match {
        /// Lexicon file, overrides `lexicon.path`
        #[clap(short, long, value_parser)]
        dict: Option<PathBuf>,

        /// Matching strategy, overrides `matcher.strategy`
        #[clap(short, long, value_enum)]
        strategy: Option<MatchStrategy>,

        /// Also report suffix entries hidden inside longer matches
        #[clap(long)]
        overlap: bool,

        /// Report characters no entry covers
        #[clap(long)]
        unmatched: bool,

        /// Print hits as JSON
        #[clap(long)]
        json: bool,

        /// Text to match
        text: String,
    },

    /// Convert Chinese text to pinyin
    Pinyin {
        /// Pinyin lexicon file, overrides `lexicon.path`
        #[clap(short, long, value_parser)]
        dict: Option<PathBuf>,

        /// Print per-character details
        #[clap(long)]
        full: bool,

        /// Also print the first letter of every syllable
        #[clap(long)]
        first_letter: bool,

        /// Drop whitespace and punctuation from the output
        #[clap(long)]
        ignore_whitespace: bool,

        /// Print the result as JSON
        #[clap(long)]
        json: bool,

        /// Text to convert
        text: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> CjkMatchResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| {
        CjkMatchError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    let loaded = loader.load();
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
    }
    set_error_reporter(Arc::new(TracingErrorReporter::new()));

    let result = loaded
        .map_err(CjkMatchError::from)
        .and_then(|config| run(args.command, config));

    if let Err(e) = result {
        report_error(&ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}

fn run(command: Command, config: CjkMatchConfig) -> CjkMatchResult<()> {
    match command {
        Command::Match {
            dict,
            strategy,
            overlap,
            unmatched,
            json,
            text,
        } => {
            let matcher = MatcherConfig {
                strategy: strategy.unwrap_or(config.matcher.strategy),
                resolve_overlaps: overlap || config.matcher.resolve_overlaps,
                track_unmatched: unmatched || config.matcher.track_unmatched,
                ..config.matcher.clone()
            };
            // Command line overrides obey the same rules as the config file
            matcher.validate()?;

            let path = lexicon_path(dict, &config)?;
            let trie = nlp::load_dictionary(&path, &config.lexicon, matcher.trie_config())?;
            info!(path = %path.display(), entries = trie.len(), "Dictionary loaded");

            let hits = find_hits(
                trie,
                matcher.matcher_options(),
                matcher.resolve_overlaps,
                &text,
            )?;
            print_hits(&hits, json)
        }
        Command::Pinyin {
            dict,
            full,
            first_letter,
            ignore_whitespace,
            json,
            text,
        } => {
            let path = lexicon_path(dict, &config)?;
            let converter =
                PinyinConverter::load(&path, &config.lexicon, config.matcher.trie_config())?;

            if full {
                match converter.full_convert(&text) {
                    Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                    Some(result) => println!("{result}"),
                    None => info!("Nothing converted"),
                }
                return Ok(());
            }

            match converter.normal_convert(&text, ignore_whitespace, first_letter) {
                Some((pinyin, letters)) if json => println!(
                    "{}",
                    serde_json::json!({ "pinyin": pinyin, "first_letters": letters })
                ),
                Some((pinyin, letters)) => {
                    println!("{pinyin}");
                    if let Some(letters) = letters {
                        println!("{letters}");
                    }
                }
                None => info!("Nothing converted"),
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = CjkMatchConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| CjkMatchError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

fn lexicon_path(dict: Option<PathBuf>, config: &CjkMatchConfig) -> CjkMatchResult<PathBuf> {
    dict.or_else(|| config.lexicon.path.clone()).ok_or_else(|| {
        CjkMatchError::Custom("No lexicon given: pass --dict or set lexicon.path".to_string())
    })
}

fn find_hits(
    mut trie: DictTrie<String>,
    options: MatcherOptions,
    overlap: bool,
    text: &str,
) -> CjkMatchResult<Hits<String>> {
    let chars: Vec<char> = text.chars().collect();
    if !overlap {
        return Ok(TextMatcher::with_options(&trie, options).find_all(&chars));
    }

    trie.build_failure_links()?;
    let mut hits = OverlapResolver::new(&trie)?.find(&chars, 0, chars.len())?;
    if options.track_unmatched {
        let mut tracked = Hits::with_unmatched_tracking();
        for hit in hits {
            tracked.add_hit(hit);
        }
        tracked.record_uncovered(&chars, 0, chars.len());
        hits = tracked;
    }
    Ok(hits)
}

fn print_hits(hits: &Hits<String>, json: bool) -> CjkMatchResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
        return Ok(());
    }

    for hit in hits {
        println!("{hit}");
    }
    if hits.tracks_unmatched() && !hits.unmatched().is_empty() {
        let unmatched: Vec<String> = hits.unmatched().iter().map(ToString::to_string).collect();
        println!("unmatched: {}", unmatched.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_lexicon(dir: &Path) -> PathBuf {
        let path = dir.join("words.dic");
        std::fs::write(&path, "中国=CN\n中国人=CNP\n人=P\n").unwrap();
        path
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "cjk_match", "match", "--dict", "words.dic", "-s", "min-reverse", "--json", "中国人",
        ]);
        match args.command {
            Command::Match {
                strategy, json, text, ..
            } => {
                assert_eq!(strategy, Some(MatchStrategy::MinReverse));
                assert!(json);
                assert_eq!(text, "中国人");
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_lexicon_path_resolution() {
        let mut config = CjkMatchConfig::default();
        assert!(lexicon_path(None, &config).is_err());

        config.lexicon.path = Some(PathBuf::from("from_config.dic"));
        assert_eq!(
            lexicon_path(None, &config).unwrap(),
            PathBuf::from("from_config.dic")
        );
        assert_eq!(
            lexicon_path(Some(PathBuf::from("cli.dic")), &config).unwrap(),
            PathBuf::from("cli.dic")
        );
    }

    #[test]
    fn test_find_hits_with_overlap_and_unmatched() {
        let dir = tempfile::tempdir().unwrap();
        let config = CjkMatchConfig::default();
        let trie = nlp::load_dictionary(
            write_lexicon(dir.path()),
            &config.lexicon,
            config.matcher.trie_config(),
        )
        .unwrap();

        let options = MatcherOptions::new().track_unmatched(true);
        let hits = find_hits(trie, options, true, "我是中国人").unwrap();
        let texts: Vec<&str> = hits.iter().map(|h| h.text()).collect();
        assert_eq!(texts, vec!["中国人", "人"]);
        assert_eq!(hits.unmatched().len(), 2);
    }

    #[test]
    fn test_overlap_requires_max_forward() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::Match {
            dict: Some(write_lexicon(dir.path())),
            strategy: Some(MatchStrategy::MinForward),
            overlap: true,
            unmatched: false,
            json: false,
            text: "中国人".to_string(),
        };
        let result = run(command, CjkMatchConfig::default());
        assert!(matches!(
            result,
            Err(CjkMatchError::Config(
                cjk_match_lib::error::config::ConfigError::ValidationError(_)
            ))
        ));
    }

    #[test]
    fn test_run_match_and_gen_config() {
        let dir = tempfile::tempdir().unwrap();
        let dict = write_lexicon(dir.path());

        let command = Command::Match {
            dict: Some(dict),
            strategy: Some(MatchStrategy::MaxReverse),
            overlap: false,
            unmatched: false,
            json: true,
            text: "中国人".to_string(),
        };
        assert!(run(command, CjkMatchConfig::default()).is_ok());

        let output = dir.path().join("nested").join("cjk_match.toml");
        let command = Command::GenConfig {
            output: output.clone(),
        };
        assert!(run(command, CjkMatchConfig::default()).is_ok());
        assert!(std::fs::read_to_string(output).unwrap().contains("[lexicon]"));
    }
}
