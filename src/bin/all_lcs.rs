//! `all_lcs`: print every longest common subsequence of two strings.
//!
//! Without SOURCE and TARGET it runs two demo pairs. Small queries are
//! cross-checked against the brute-force enumerator.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use lcs_all::oracle::brute_force_all_lcs;
use lcs_all::{backtrack_one, count_alignments, LcsEngineBuilder, LcsError, LcsTable};

const DEMO_PAIRS: &[(&str, &str)] = &[("ABCBDAB", "BDCABA"), ("ABDEDA", "ADEBADDA")];

const USAGE: &str = "\
Usage: all_lcs [OPTIONS] [SOURCE TARGET]

Prints every longest common subsequence of SOURCE and TARGET. Tokens are
characters unless --words is given. Without SOURCE and TARGET, runs the
built-in demo pairs.

Options:
  --words                 Split inputs on whitespace and compare words
  --count                 Print the length and alignment count only
  --one                   Print a single LCS instead of all of them
  --max-alignments <N>    Refuse queries with more than N alignments
  --verify-limit <N>      Cross-check against brute force when the shorter
                          input has at most N tokens (default: 12)
  -h, --help              Print this help message

Examples:
  all_lcs ABCBDAB BDCABA
  all_lcs --words 'the quick brown fox' 'the lazy brown dog'
  all_lcs --count ACGTACGTACGT TGCATGCATGCA
";

fn main() -> ExitCode {
    let cli = match Cli::parse(env::args().skip(1)) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("all_lcs: {err}");
            eprint!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let pairs: Vec<(String, String)> = match cli.pair.clone() {
        Some(pair) => vec![pair],
        None => DEMO_PAIRS
            .iter()
            .map(|&(s, t)| (s.to_owned(), t.to_owned()))
            .collect(),
    };

    let mut failures = 0;
    for (source, target) in &pairs {
        let started = Instant::now();
        let answer = cli.query(source, target);
        eprintln!(
            "all_lcs: {source:?} vs {target:?} in {:.3}s",
            started.elapsed().as_secs_f64()
        );
        print!("{}", answer.render(source, target, cli.tokens.joiner()));
        if answer.is_failure() {
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("all_lcs: {failures} of {} queries failed", pairs.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Run(Cli),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tokens {
    Chars,
    Words,
}

impl Tokens {
    fn split(self, input: &str) -> Vec<String> {
        match self {
            Tokens::Chars => input.chars().map(String::from).collect(),
            Tokens::Words => input.split_whitespace().map(str::to_owned).collect(),
        }
    }

    fn joiner(self) -> &'static str {
        match self {
            Tokens::Chars => "",
            Tokens::Words => " ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    All,
    Count,
    One,
}

#[derive(Debug, PartialEq, Eq)]
struct Cli {
    tokens: Tokens,
    mode: Mode,
    max_alignments: Option<usize>,
    verify_limit: usize,
    pair: Option<(String, String)>,
}

impl Cli {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
        let mut cli = Cli {
            tokens: Tokens::Chars,
            mode: Mode::All,
            max_alignments: None,
            verify_limit: 12,
            pair: None,
        };
        let mut inputs = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if !arg.starts_with('-') || arg == "-" {
                inputs.push(arg);
                continue;
            }
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
                None => (arg.clone(), None),
            };
            match flag.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--words" => cli.tokens = switch(&flag, inline, Tokens::Words)?,
                "--count" => cli.set_mode(switch(&flag, inline, Mode::Count)?)?,
                "--one" => cli.set_mode(switch(&flag, inline, Mode::One)?)?,
                "--max-alignments" => {
                    let n = count(&flag, value_of(&flag, inline, &mut args)?)?;
                    if n == 0 {
                        return Err("--max-alignments must be at least 1".into());
                    }
                    cli.max_alignments = Some(n);
                }
                "--verify-limit" => {
                    cli.verify_limit = count(&flag, value_of(&flag, inline, &mut args)?)?;
                }
                _ => return Err(format!("unknown option '{flag}'")),
            }
        }

        let mut inputs = inputs.into_iter();
        cli.pair = match (inputs.next(), inputs.next(), inputs.next()) {
            (None, _, _) => None,
            (Some(source), Some(target), None) => Some((source, target)),
            (Some(_), None, _) => return Err("TARGET is missing".into()),
            (Some(_), Some(_), Some(extra)) => {
                return Err(format!("unexpected argument '{extra}' after TARGET"))
            }
        };
        Ok(Command::Run(cli))
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), String> {
        if self.mode != Mode::All && self.mode != mode {
            return Err("--count and --one cannot be combined".into());
        }
        self.mode = mode;
        Ok(())
    }

    fn query(&self, source: &str, target: &str) -> Answer {
        let s = self.tokens.split(source);
        let t = self.tokens.split(target);

        match self.mode {
            Mode::Count => {
                let table = LcsTable::build(&s, &t);
                Answer::Counted {
                    length: table.lcs_len(),
                    alignments: count_alignments(&table, &s, &t),
                }
            }
            Mode::One => {
                let table = LcsTable::build(&s, &t);
                Answer::Single(backtrack_one(&table, &s, &t))
            }
            Mode::All => {
                let builder = LcsEngineBuilder::new(&s, &t);
                let builder = match self.max_alignments {
                    Some(limit) => builder.max_alignments(limit),
                    None => builder,
                };
                let report = match builder.build().and_then(|engine| engine.run()) {
                    Ok(report) => report,
                    Err(err) => return Answer::Refused(err),
                };
                let check = if s.len().min(t.len()) <= self.verify_limit {
                    match brute_force_all_lcs(&s, &t) {
                        Ok(expected) if expected == report.sequences => Check::Agrees,
                        Ok(expected) => Check::Disagrees {
                            expected: expected.len(),
                        },
                        Err(_) => Check::Skipped,
                    }
                } else {
                    Check::Skipped
                };
                Answer::Listed {
                    length: report.length,
                    alignments: report.paths,
                    sequences: report.sorted(),
                    check,
                }
            }
        }
    }
}

/// Value-less flag; rejects `--flag=value`.
fn switch<V>(flag: &str, inline: Option<String>, value: V) -> Result<V, String> {
    match inline {
        Some(_) => Err(format!("{flag} takes no value")),
        None => Ok(value),
    }
}

fn value_of(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, String> {
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn count(flag: &str, value: String) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a whole number, got '{value}'"))
}

/// Oracle cross-check outcome of a full listing.
#[derive(Debug, PartialEq, Eq)]
enum Check {
    Skipped,
    Agrees,
    Disagrees { expected: usize },
}

#[derive(Debug)]
enum Answer {
    Listed {
        length: u32,
        alignments: usize,
        sequences: Vec<Vec<String>>,
        check: Check,
    },
    Counted {
        length: u32,
        alignments: usize,
    },
    Single(Vec<String>),
    Refused(LcsError),
}

impl Answer {
    fn is_failure(&self) -> bool {
        matches!(
            self,
            Answer::Refused(_)
                | Answer::Listed {
                    check: Check::Disagrees { .. },
                    ..
                }
        )
    }

    fn render(&self, source: &str, target: &str, joiner: &str) -> String {
        let mut out = format!("{source} / {target}: ");
        match self {
            Answer::Listed {
                length,
                alignments,
                sequences,
                check,
            } => {
                out.push_str(&format!(
                    "length {length}, {} distinct of {alignments} alignments",
                    sequences.len()
                ));
                match check {
                    Check::Skipped => {}
                    Check::Agrees => out.push_str(", matches brute force"),
                    Check::Disagrees { expected } => out.push_str(&format!(
                        ", MISMATCH: brute force found {expected} sequence(s)"
                    )),
                }
                out.push('\n');
                for seq in sequences {
                    out.push_str(&format!("  {}\n", show(seq, joiner)));
                }
            }
            Answer::Counted { length, alignments } => {
                if *alignments == usize::MAX {
                    out.push_str(&format!("length {length}, at least {alignments} alignments\n"));
                } else {
                    out.push_str(&format!("length {length}, {alignments} alignments\n"));
                }
            }
            Answer::Single(seq) => {
                out.push_str(&format!("length {}\n  {}\n", seq.len(), show(seq, joiner)));
            }
            Answer::Refused(err) => {
                out.push_str(&format!("refused: {err}\n"));
            }
        }
        out
    }
}

fn show(seq: &[String], joiner: &str) -> String {
    if seq.is_empty() {
        "(empty)".to_owned()
    } else {
        seq.join(joiner)
    }
}
