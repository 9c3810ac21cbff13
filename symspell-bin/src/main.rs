use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use symspell::dictionary::DictionaryBuilder;
use symspell::speller::{Segmentation, SuggestItem, SymSpell, SymSpellConfig, Verbosity};
use symspell::tokenizer::Tokenize;

trait OutputWriter {
    fn write_suggestions(&mut self, input: &str, suggestions: &[SuggestItem]);
    fn write_segmentation(&mut self, input: &str, segmentation: &Segmentation);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_suggestions(&mut self, input: &str, suggestions: &[SuggestItem]) {
        println!("Input: {}", input);

        if suggestions.is_empty() {
            println!("  (no suggestions)");
        }

        for s in suggestions {
            println!("  {}\t\tdistance {}\tcount {}", s.term(), s.distance(), s.count());
        }
        println!();
    }

    fn write_segmentation(&mut self, input: &str, segmentation: &Segmentation) {
        println!("Input: {}", input);
        println!("  segmented: {}", segmentation.segmented_string);
        println!("  corrected: {}", segmentation.corrected_string);
        println!(
            "  distance {}\tlog10 probability {:.4}",
            segmentation.distance_sum, segmentation.probability_log_sum
        );
        println!();
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Suggestions {
        input: String,
        suggestions: Vec<SuggestItem>,
    },
    Segmentation {
        input: String,
        segmentation: Segmentation,
    },
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<Output>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_suggestions(&mut self, input: &str, suggestions: &[SuggestItem]) {
        self.results.push(Output::Suggestions {
            input: input.to_owned(),
            suggestions: suggestions.to_vec(),
        });
    }

    fn write_segmentation(&mut self, input: &str, segmentation: &Segmentation) {
        self.results.push(Output::Segmentation {
            input: input.to_owned(),
            segmentation: segmentation.clone(),
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize results: {}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "get suggestions for single words")]
    Lookup(LookupArgs),

    #[options(help = "correct whole sentences, merging and splitting words")]
    Compound(CompoundArgs),

    #[options(help = "insert missing spaces into text")]
    Segment(SegmentArgs),

    #[options(help = "print input in word-separated tokenized form")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct LookupArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "frequency dictionary, one `term count` per line", required)]
    dictionary: PathBuf,

    #[options(help = "JSON file overriding the speller configuration")]
    config: Option<PathBuf>,

    #[options(help = "which suggestions to return: top, closest or all")]
    verbosity: Option<Verbosity>,

    #[options(help = "maximum edit distance of suggestions")]
    max_edit_distance: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct CompoundArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "frequency dictionary, one `term count` per line", required)]
    dictionary: PathBuf,

    #[options(help = "bigram dictionary, one `first second count` per line")]
    bigrams: Option<PathBuf>,

    #[options(help = "JSON file overriding the speller configuration")]
    config: Option<PathBuf>,

    #[options(help = "maximum edit distance per word")]
    max_edit_distance: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "sentences to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct SegmentArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "frequency dictionary, one `term count` per line", required)]
    dictionary: PathBuf,

    #[options(help = "JSON file overriding the speller configuration")]
    config: Option<PathBuf>,

    #[options(help = "maximum edit distance per word")]
    max_edit_distance: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "text to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words only")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_inputs(inputs: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;

    Ok(buffer
        .lines()
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SymSpellConfig> {
    let path = match path {
        Some(path) => path,
        None => return Ok(SymSpellConfig::default()),
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;

    Ok(config)
}

fn load_speller(
    dictionary: &Path,
    bigrams: Option<&Path>,
    config: Option<&Path>,
) -> anyhow::Result<SymSpell> {
    let config = load_config(config)?;
    log::debug!("Using config: {:?}", config);

    let mut builder = DictionaryBuilder::new(config)?;
    builder.load_dictionary_path(dictionary, 0, 1)?;

    if let Some(bigrams) = bigrams {
        builder.load_bigram_dictionary_path(bigrams, 0, 2)?;
    }

    log::info!(
        "Loaded {} words and {} bigrams from {}",
        builder.word_count(),
        builder.bigram_count(),
        dictionary.display()
    );

    Ok(builder.build())
}

fn writer(use_json: bool) -> Box<dyn OutputWriter> {
    if use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    }
}

fn lookup(args: LookupArgs) -> anyhow::Result<()> {
    let speller = load_speller(&args.dictionary, None, args.config.as_deref())?;
    let verbosity = args.verbosity.unwrap_or_default();
    let mut writer = writer(args.use_json);

    for input in read_inputs(args.inputs)? {
        for word in input.split_whitespace() {
            let suggestions = speller.lookup(word, verbosity, args.max_edit_distance);
            writer.write_suggestions(word, &suggestions);
        }
    }

    writer.finish();
    Ok(())
}

fn compound(args: CompoundArgs) -> anyhow::Result<()> {
    let speller = load_speller(
        &args.dictionary,
        args.bigrams.as_deref(),
        args.config.as_deref(),
    )?;
    let mut writer = writer(args.use_json);

    // Free arguments form one sentence, stdin holds one sentence per line.
    let sentences = if args.inputs.is_empty() {
        read_inputs(args.inputs)?
    } else {
        vec![args.inputs.join(" ")]
    };

    for sentence in sentences {
        let suggestions = speller.lookup_compound(&sentence, args.max_edit_distance);
        writer.write_suggestions(&sentence, &suggestions);
    }

    writer.finish();
    Ok(())
}

fn segment(args: SegmentArgs) -> anyhow::Result<()> {
    let speller = load_speller(&args.dictionary, None, args.config.as_deref())?;
    let max_edit_distance = args.max_edit_distance.unwrap_or(0);
    let mut writer = writer(args.use_json);

    for input in read_inputs(args.inputs)? {
        let segmentation = speller.word_segmentation(&input, max_edit_distance);
        writer.write_segmentation(&input, &segmentation);
    }

    writer.finish();
    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs = read_inputs(args.inputs)?.join(" ");

    if args.is_words_only {
        for token in inputs.words() {
            println!("\"{}\"", token);
        }
    } else {
        for (index, token) in inputs.word_bound_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Lookup(args)) => lookup(args),
        Some(Command::Compound(args)) => compound(args),
        Some(Command::Segment(args)) => segment(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
