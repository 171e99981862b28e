//! Wordle Ranker CLI
//!
//! Interactive command-line interface for the Wordle assistant.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use wordle_ranker::{
    cache, load_dictionary, logging, Feedback, GuessPool, RankEvent, Ranking, Session,
    SessionConfig, SessionState, Word, WORD_LENGTH,
};

const HELP_TEXT: &str = "\
Commands at the guess prompt:
  <word>     enter the word you guessed, then its colors
  words      list the remaining candidates
  top N      show the N best guesses
  help       show this message
  quit       leave

Colors: one letter per position, g = green, y = yellow, b = black/gray.
Example: crane, then gybbb";

/// Suggests Wordle guesses and narrows down the answer from your feedback.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Word list: whitespace-separated words, all of the same length.
    #[clap(short, long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Number of letters per word.
    #[clap(short, long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Sets the number of threads used to rank guesses.
    ///
    /// 0 uses rayon's default of one thread per core.
    #[clap(short, long, global = true, default_value = "0")]
    threads: usize,

    /// Log debug output. RUST_LOG overrides this.
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive session (the default)
    Play {
        #[clap(flatten)]
        ranking: RankingArgs,

        /// Stop after this many guesses.
        #[clap(long)]
        max_turns: Option<usize>,
    },
    /// Print the best opening guesses
    Rank {
        #[clap(flatten)]
        ranking: RankingArgs,
    },
    /// Compute the opening ranking and write it as CSV
    Cache {
        /// Where to write the CSV file.
        path: PathBuf,
    },
    /// Let the solver play against a known answer
    Solve {
        /// The answer.
        secret: String,

        /// Give up after this many guesses.
        #[clap(long, default_value = "6")]
        max_turns: usize,

        /// Which words the solver may guess.
        #[clap(long, value_enum, default_value = "dictionary")]
        pool: Pool,
    },
}

#[derive(Args, Debug)]
struct RankingArgs {
    /// How many guesses to show.
    #[clap(long, default_value = "15")]
    top: usize,

    /// Which words may be suggested as guesses.
    #[clap(long, value_enum, default_value = "dictionary")]
    pool: Pool,

    /// CSV cache of the opening ranking; created if missing.
    #[clap(long)]
    cache: Option<PathBuf>,
}

impl Default for RankingArgs {
    fn default() -> Self {
        Self {
            top: 15,
            pool: Pool::Dictionary,
            cache: None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Pool {
    /// Any dictionary word.
    Dictionary,
    /// Only words that could still be the answer.
    Candidates,
}

impl From<Pool> for GuessPool {
    fn from(pool: Pool) -> Self {
        match pool {
            Pool::Dictionary => GuessPool::Dictionary,
            Pool::Candidates => GuessPool::Candidates,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build_global()
        .context("failed to start the thread pool")?;

    let dictionary = load_dictionary(&cli.words, cli.length)
        .with_context(|| format!("failed to load dictionary {}", cli.words.display()))?;

    match cli.command {
        None => play(dictionary, RankingArgs::default(), None),
        Some(Command::Play { ranking, max_turns }) => play(dictionary, ranking, max_turns),
        Some(Command::Rank { ranking }) => print_opening(dictionary, ranking),
        Some(Command::Cache { path }) => write_cache(dictionary, path),
        Some(Command::Solve {
            secret,
            max_turns,
            pool,
        }) => solve(dictionary, &secret, cli.length, max_turns, pool),
    }
}

/// Rank on rayon's pool while drawing a progress bar from its events.
fn rank_with_bar(session: &Session) -> Result<Ranking> {
    let (tx, rx) = mpsc::channel();
    thread::scope(|s| -> Result<Ranking> {
        let worker = s.spawn(move || session.rank_with_progress(tx));

        let mut bar = ProgressBar::hidden();
        for event in rx {
            match event {
                RankEvent::Started { total } => {
                    let style = ProgressStyle::with_template(
                        "Ranking {pos}/{len} [{elapsed}] {wide_bar}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar());
                    bar = ProgressBar::new(total as u64).with_style(style);
                }
                RankEvent::Scored(_) => bar.inc(1),
                RankEvent::Finished => bar.finish_and_clear(),
            }
        }

        worker
            .join()
            .map_err(|_| anyhow!("ranking thread panicked"))?
            .map_err(Into::into)
    })
}

fn opening_ranking(session: &Session, cache_path: Option<&PathBuf>) -> Result<Ranking> {
    match cache_path {
        Some(path) => cache::load_or_build(path, session.dictionary())
            .with_context(|| format!("failed to use cache {}", path.display())),
        None => rank_with_bar(session),
    }
}

fn print_ranking(ranking: &Ranking, session: &Session, n: usize) {
    let top = ranking.top(n);
    println!();
    println!("Top {} guesses:", top.len());
    println!("{:>4} {:>8} {:>12} Possible?", "#", "Word", "Exp. Remain");
    println!("{}", "-".repeat(36));
    for (i, entry) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>12.3} {}",
            i + 1,
            entry.word.as_str().to_uppercase(),
            entry.score,
            if session.candidates().contains(&entry.word) {
                "✓"
            } else {
                ""
            }
        );
    }
    println!();
}

fn print_candidates(session: &Session, limit: usize) {
    let candidates = session.candidates();
    println!("{} possible words:", candidates.len());
    for (i, word) in candidates.iter().take(limit).enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.as_str().to_uppercase());
    }
    if candidates.len() > limit {
        print!("  ...");
    }
    println!();
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

enum TurnInput {
    Observation(Word, Feedback),
    Quit,
}

/// Ask for a guess and its colors until both parse.
fn read_turn(session: &Session, ranking: &Ranking) -> Result<TurnInput> {
    let len = session.word_len();
    loop {
        let Some(line) = prompt("Guess:  ")? else {
            return Ok(TurnInput::Quit);
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let guess = match parts.as_slice() {
            [] => continue,
            ["quit" | "exit" | "q"] => return Ok(TurnInput::Quit),
            ["help" | "h" | "?"] => {
                println!("{HELP_TEXT}");
                continue;
            }
            ["words" | "w"] => {
                print_candidates(session, usize::MAX);
                continue;
            }
            ["top" | "t", rest @ ..] => {
                let n = rest.first().and_then(|s| s.parse().ok()).unwrap_or(5);
                print_ranking(ranking, session, n);
                continue;
            }
            [word] => match Word::parse_with_length(word, len) {
                Ok(guess) => guess,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            _ => {
                println!("Enter a single {len}-letter word, or 'help'.");
                continue;
            }
        };

        loop {
            let Some(colors) = prompt("Colors: ")? else {
                return Ok(TurnInput::Quit);
            };
            if colors == "quit" {
                return Ok(TurnInput::Quit);
            }
            match Feedback::parse_with_length(&colors, len) {
                Ok(feedback) => return Ok(TurnInput::Observation(guess, feedback)),
                Err(e) if e.is_input_error() => println!("{e}"),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn play(dictionary: Vec<Word>, args: RankingArgs, max_turns: Option<usize>) -> Result<()> {
    let config = SessionConfig {
        max_turns,
        pool: args.pool.into(),
    };
    let mut session = Session::new(dictionary, config)?;

    println!("----------WORDLE RANKER----------");
    println!("Loaded {} words. Type 'help' for commands.", session.dictionary().len());

    let opening = match &args.cache {
        Some(path) => Some(opening_ranking(&session, Some(path))?),
        None => None,
    };

    loop {
        match session.state() {
            SessionState::Playing => {}
            SessionState::Solved(word) => {
                println!();
                println!("{} is the word!", word.as_str().to_uppercase());
                break;
            }
            SessionState::Exhausted => {
                println!();
                println!("No words match that description!");
                break;
            }
            SessionState::OutOfTurns => {
                println!();
                println!("Out of turns after {} guesses.", session.turns());
                print_candidates(&session, 20);
                break;
            }
        }

        let ranking = match &opening {
            Some(cached) if session.turns() == 0 => session.rank_or_cached(Some(cached))?,
            _ => rank_with_bar(&session)?,
        };
        print_ranking(&ranking, &session, args.top);

        let (guess, feedback) = match read_turn(&session, &ranking)? {
            TurnInput::Observation(guess, feedback) => (guess, feedback),
            TurnInput::Quit => break,
        };
        let before = session.candidates().len();
        session = session.apply(guess, feedback)?;
        println!(
            "{} {}  eliminated {} words ({} → {})",
            guess.as_str().to_uppercase(),
            feedback,
            before - session.candidates().len(),
            before,
            session.candidates().len()
        );
        if session.state() == SessionState::Playing {
            print_candidates(&session, 10);
        }
    }

    println!();
    println!("Thanks for playing!");
    Ok(())
}

fn print_opening(dictionary: Vec<Word>, args: RankingArgs) -> Result<()> {
    let config = SessionConfig {
        max_turns: None,
        pool: args.pool.into(),
    };
    let session = Session::new(dictionary, config)?;
    let ranking = opening_ranking(&session, args.cache.as_ref())?;
    print_ranking(&ranking, &session, args.top);
    Ok(())
}

fn write_cache(dictionary: Vec<Word>, path: PathBuf) -> Result<()> {
    let session = Session::new(dictionary, SessionConfig::default())?;
    let ranking = rank_with_bar(&session)?;
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    cache::write_ranking(&ranking, BufWriter::new(file))?;
    println!("Wrote {} rows to {}", ranking.len(), path.display());
    Ok(())
}

fn solve(
    dictionary: Vec<Word>,
    secret: &str,
    length: usize,
    max_turns: usize,
    pool: Pool,
) -> Result<()> {
    let secret = Word::parse_with_length(secret, length)?;
    if !dictionary.contains(&secret) {
        bail!("{} is not in the dictionary", secret);
    }
    let config = SessionConfig {
        max_turns: Some(max_turns),
        pool: pool.into(),
    };

    println!("Solving for: {}", secret.as_str().to_uppercase());
    println!();

    let solution = Session::new(dictionary, config)?.solve_for_secret(&secret)?;
    for (i, (guess, feedback)) in solution.guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess.as_str().to_uppercase(), feedback);
    }

    println!();
    if solution.is_win() {
        println!("✓ Solved in {} guesses!", solution.guesses.len());
    } else {
        println!("✗ Failed to solve within {} guesses.", max_turns);
    }
    Ok(())
}
