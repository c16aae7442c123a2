// Poetry Slam sonnet generator: CLI entry point.
//
// Loads the inspiring set, tone lists and oracles (embedded defaults unless
// paths are given), generates the configured number of candidates, prints
// the best one with its score report and tone, and optionally speaks it.
//
// Usage:
//   cargo run -p poetry_slam_sonnet -- [--seed N] [--candidates N] [--parallel]
//     [--corpus PATH] [--positives PATH --negatives PATH] [--tags PATH]
//     [--dictionary PATH] [--config PATH] [--speak]
//
// Logging goes to stderr; set RUST_LOG (e.g. `poetry_slam=debug`) for
// per-line and per-candidate detail. The sonnet itself goes to stdout.

use std::path::PathBuf;

use clap::Parser;
use poetry_slam_lang::{
    Corpus, HeuristicTagger, MeterOracle, PronouncingDictionary, RhymeOracle, SpellingRhymer,
    SpellingScansion, SyllableEstimator, TagLexicon, ToneLexicon, default_corpus,
    default_tone_lexicon,
};
use poetry_slam_prng::SlamRng;
use poetry_slam_sonnet::tone::ToneProfile;
use poetry_slam_sonnet::voice::{SpeechCommand, dispatch};
use poetry_slam_sonnet::{
    ScoreReport, Scorer, SlamConfig, SlamError, Selector, SonnetGenerator, TITLE, classify_tone,
};
use tracing::{error, info};

/// Generate a Shakespearean sonnet from an inspiring set of text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Inspiring set text file (default: embedded sonnets)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Positive tone word list, one word per line
    #[arg(long, requires = "negatives")]
    positives: Option<PathBuf>,

    /// Negative tone word list, one word per line
    #[arg(long, requires = "positives")]
    negatives: Option<PathBuf>,

    /// JSON object of word -> part-of-speech tag overrides
    #[arg(long)]
    tags: Option<PathBuf>,

    /// CMU-format pronouncing dictionary for rhyme and meter
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// JSON run configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of candidate sonnets (overrides the config)
    #[arg(long)]
    candidates: Option<usize>,

    /// Generate candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// Speak the winner through the configured speech program
    #[arg(long)]
    speak: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(&cli) {
        error!(error = %err, "sonnet generation failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("poetry_slam=info,generate=info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn run(cli: &Cli) -> Result<(), SlamError> {
    let mut config = match &cli.config {
        Some(path) => SlamConfig::load(path)?,
        None => SlamConfig::default(),
    };
    if let Some(count) = cli.candidates {
        config.candidate_count = count;
    }
    if cli.parallel {
        config.parallel = true;
    }
    config.validate()?;

    let estimator = SyllableEstimator::new(config.le_suffix_rule);
    let overrides = match &cli.tags {
        Some(path) => TagLexicon::load(path)?,
        None => TagLexicon::default(),
    };
    let tagger = HeuristicTagger::new(overrides);
    let corpus = match &cli.corpus {
        Some(path) => Corpus::load(path, &tagger, estimator)?,
        None => default_corpus(&tagger, estimator)?,
    };
    info!(words = corpus.len(), "inspiring set loaded");

    let lexicon = match (&cli.positives, &cli.negatives) {
        (Some(positives), Some(negatives)) => ToneLexicon::load(positives, negatives)?,
        _ => default_tone_lexicon(),
    };

    let dictionary = cli
        .dictionary
        .as_deref()
        .map(|path| PronouncingDictionary::load(path, estimator))
        .transpose()?;
    if let Some(dictionary) = &dictionary {
        info!(entries = dictionary.len(), "pronouncing dictionary loaded");
    }
    let spelling_rhymer = SpellingRhymer;
    let spelling_scansion = SpellingScansion::new(estimator);
    let rhymer: &dyn RhymeOracle = match &dictionary {
        Some(dictionary) => dictionary,
        None => &spelling_rhymer,
    };
    let meter: &dyn MeterOracle = match &dictionary {
        Some(dictionary) => dictionary,
        None => &spelling_scansion,
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, candidates = config.candidate_count, parallel = config.parallel, "generating");
    let mut rng = SlamRng::new(seed);

    let generator = SonnetGenerator::new(&corpus, rhymer, &config);
    let scorer = Scorer::new(rhymer, meter, config.syllables_per_line);
    let selection = Selector::new(generator, scorer, &config).run(&mut rng)?;
    let winner = &selection.winner;

    let report = ScoreReport::new(&winner.score, &config.report);
    let tone = classify_tone(&winner.sonnet, &lexicon);

    println!("{TITLE}");
    println!();
    print!("{}", winner.sonnet.display_text());
    println!();
    println!("{report}");
    println!("Tone: {tone} ({:?})", ToneProfile::from_tone(tone));

    if cli.speak {
        let speaker = SpeechCommand::new(config.speech_program.as_str());
        dispatch(&speaker, tone, &config.voices, &winner.sonnet.raw_text())?;
    }
    Ok(())
}
