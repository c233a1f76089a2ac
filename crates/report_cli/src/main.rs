//! Command-line host for the question bank export pipeline
//!
//! Stands in for the learning platform: loads a JSON dump of a course's
//! question bank, applies the optional category filter, orders the
//! records the way the host contract specifies, and runs one exporter,
//! writing `questions_<course>_<date>.<ext>` into the output directory.

use anyhow::{Context, Result};
use bank_model::{
    export_filename, Answer, AnswerLookup, ExportFormat, ExportJob, Locale, Question,
};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "report_cli", about = "Export a course's question bank")]
struct Args {
    /// JSON dump of the course's question bank
    #[arg(long)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    format: FormatArg,

    /// Course display name (defaults to the one in the dump)
    #[arg(long)]
    course: Option<String>,

    /// Restrict the export to these category ids
    #[arg(long = "category")]
    categories: Vec<u64>,

    /// Category id whose questions form the final-exam sample pool
    #[arg(long)]
    final_exam_category: Option<u64>,

    /// Display language for localized strings
    #[arg(long, value_enum, default_value = "es")]
    locale: LocaleArg,

    /// Directory the dated output file is written into
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Seed for the final-exam sample (reproducible documents)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Xlsx,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Xlsx => ExportFormat::Xlsx,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LocaleArg {
    Es,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Es => Locale::Es,
            LocaleArg::En => Locale::En,
        }
    }
}

/// The JSON dump: course name plus questions with their answers inline.
#[derive(Debug, Deserialize)]
struct BankDump {
    course: String,
    questions: Vec<DumpQuestion>,
}

#[derive(Debug, Deserialize)]
struct DumpQuestion {
    #[serde(flatten)]
    question: Question,
    #[serde(default)]
    answers: Vec<Answer>,
}

/// Build the export job from a dump and the request parameters: filter by
/// category when asked, then order by category name and question name as
/// the host contract specifies.
fn build_job(dump: BankDump, args: &Args) -> ExportJob {
    let mut questions = Vec::new();
    let mut answers = AnswerLookup::new();

    for entry in dump.questions {
        if !args.categories.is_empty() && !args.categories.contains(&entry.question.category_id) {
            continue;
        }
        answers.insert(entry.question.id, entry.answers);
        questions.push(entry.question);
    }
    questions.sort_by(|a, b| {
        (a.category_name.as_str(), a.name.as_str()).cmp(&(b.category_name.as_str(), b.name.as_str()))
    });

    let course = args.course.clone().unwrap_or(dump.course);
    let mut job = ExportJob::new(questions, answers, course, args.format.into())
        .with_locale(args.locale.into());
    if let Some(category_id) = args.final_exam_category {
        job = job.with_final_exam_category(category_id);
    }
    job
}

fn run(args: Args) -> Result<PathBuf> {
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let dump: BankDump = serde_json::from_str(&input)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let job = build_job(dump, &args);
    tracing::info!(
        questions = job.questions.len(),
        format = ?job.format,
        "loaded question bank"
    );

    let date = chrono::Local::now().date_naive();
    let path = args
        .out
        .join(export_filename(&job.course_name, date, job.format));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    export::export_job(&job, &mut rng, BufWriter::new(file))?;

    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let path = run(args)?;
    println!("{}", path.display());
    Ok(())
}
