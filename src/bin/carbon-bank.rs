use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use carbon_bank::{
    Bank, ChartSpec, ExtendMode, Mark, PanelFields, Year, chart_series, decode_mark, encode_mark,
    resolve_panels,
    series::{max_by, min_by},
};

#[derive(Parser, Debug)]
#[command(name = "carbon-bank", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve authored panel fields into fully-specified marks.
    Marks(MarksArgs),
    /// Print the chart series for an extent, optionally projected forward.
    Series(SeriesArgs),
    /// Encode a mark JSON file as a shareable snapshot string.
    Encode(EncodeArgs),
    /// Decode a snapshot string back into mark JSON.
    Decode(DecodeArgs),
}

#[derive(Parser, Debug)]
struct MarksArgs {
    /// Input panels JSON (an array of raw panel field objects).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SeriesArgs {
    /// First charted year.
    #[arg(long)]
    min_year: i32,

    /// Last charted year.
    #[arg(long)]
    max_year: i32,

    /// Trim the historical record at this year instead of max-year.
    #[arg(long)]
    stop_at: Option<i32>,

    /// Project past the record under this policy.
    #[arg(long, value_enum)]
    extend: Option<ExtendChoice>,

    /// Plateau years at the peak rate before a reduce projection.
    #[arg(long)]
    steady: Option<u32>,

    /// Total carbon budget in gigatonnes.
    #[arg(long, default_value_t = carbon_bank::DEFAULT_BUDGET)]
    budget: f64,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Input mark JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Snapshot string produced by `encode`.
    encoded: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExtendChoice {
    Steady,
    Reduce,
}

impl From<ExtendChoice> for ExtendMode {
    fn from(choice: ExtendChoice) -> Self {
        match choice {
            ExtendChoice::Steady => ExtendMode::Steady,
            ExtendChoice::Reduce => ExtendMode::Reduce,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Marks(args) => cmd_marks(args),
        Command::Series(args) => cmd_series(args),
        Command::Encode(args) => cmd_encode(args),
        Command::Decode(args) => cmd_decode(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_marks(args: MarksArgs) -> anyhow::Result<()> {
    let panels: Vec<PanelFields> = read_json(&args.in_path, "panels")?;
    let marks = resolve_panels(&panels);
    for mark in &marks {
        mark.validate()?;
    }
    print_json(&marks, args.pretty)?;
    eprintln!("resolved {} marks", marks.len());
    Ok(())
}

fn cmd_series(args: SeriesArgs) -> anyhow::Result<()> {
    let bank = Bank::new(carbon_bank::historical_emissions().clone(), args.budget)?;
    let chart = ChartSpec {
        min_year: Year(args.min_year),
        max_year: Year(args.max_year),
        stop_at: args.stop_at.map(Year),
        extend: args.extend.map(Into::into),
        steady: args.steady,
        label_years: Vec::new(),
    };
    chart.validate()?;

    let series = chart_series(&bank, &chart);
    print_json(&series, args.pretty)?;
    eprintln!(
        "{} points, emissions {:.2}..{:.2} Gt/yr",
        series.len(),
        min_by(&series, |p| p.emissions) / 1e9,
        max_by(&series, |p| p.emissions) / 1e9
    );
    Ok(())
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let mark: Mark = read_json(&args.in_path, "mark")?;
    mark.validate()?;
    println!("{}", encode_mark(&mark)?);
    Ok(())
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let mark = decode_mark(&args.encoded)?;
    print_json(&mark, true)?;
    Ok(())
}
