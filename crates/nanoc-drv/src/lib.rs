//! The `nanoc` CLI driver: argument parsing, source acquisition, and
//! wiring the tokenizer, parser, and code generator together. No
//! compiler logic lives here — it's a thin `Session`-style wrapper
//! around the three pipeline crates, matching `faxc-drv`'s
//! thin-`main`-plus-library shape, trimmed down from its multi-flag
//! `Config` (emit kind, output path, verbose, incremental) to spec.md's
//! single positional-argument contract.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use nanoc_util::Handler;

/// Where the source program comes from: a file path, or stdin via `-`.
#[derive(Debug, Clone)]
pub enum InputSource {
    Path(PathBuf),
    Stdin,
}

/// Everything the driver needs to run one compilation. `program_name` is
/// `argv[0]`, kept only for the invalid-arguments message.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputSource,
    pub program_name: String,
}

impl Config {
    /// Parses `argv` (including `argv[0]`). Exactly one positional
    /// argument is accepted: an input path, or `-` for stdin.
    pub fn from_args(args: &[String]) -> anyhow::Result<Config> {
        let program_name = args
            .first()
            .cloned()
            .unwrap_or_else(|| "nanoc".to_string());

        if args.len() != 2 {
            anyhow::bail!("{program_name}: invalid number of arguments");
        }

        let input = if args[1] == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(PathBuf::from(&args[1]))
        };

        Ok(Config {
            input,
            program_name,
        })
    }
}

/// Reads the configured source, then runs it through the full
/// tokenize → parse → codegen pipeline, returning the generated
/// assembly text. A diagnostic anywhere in the pipeline terminates the
/// process directly via `Handler`; this function only ever returns on
/// success.
pub fn compile(source: &str, filename: &str) -> String {
    let handler = Handler::new(filename, source);
    let tokens = nanoc_lex::tokenize(source, &handler);
    let program = nanoc_par::parse(&tokens, &handler);
    nanoc_gen::generate(&program, &handler)
}

/// Runs a full compilation for `config`, writing the resulting assembly
/// to stdout. I/O failures (a missing input file, an unreadable stdin)
/// are the only errors that propagate as a `Result` — everything past
/// source acquisition is fatal-on-diagnostic via `Handler`.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let (source, filename) = read_source(&config.input)?;
    let asm = compile(&source, &filename);
    print!("{asm}");
    Ok(())
}

fn read_source(input: &InputSource) -> anyhow::Result<(String, String)> {
    match input {
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok((buf, "<stdin>".to_string()))
        }
        InputSource::Path(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
    }
}
