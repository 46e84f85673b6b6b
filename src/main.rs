use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use carbon_score::{
    calculate_carbon_score, generate_tips, get_random_questions, logging, CategoryShare,
    InputType, Question, ScoreResult, SurveyAnswer, Tip,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Answer a short lifestyle survey and get a carbon footprint estimate.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Score a JSON answer file instead of asking questions
    #[arg(long)]
    answers: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a ScoreResult,
    breakdown: Vec<CategoryShare>,
    tips: Vec<Tip>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let answers = match args.answers {
        Some(ref path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SurveyAnswer::from_json(&json)
                .with_context(|| format!("failed to parse answers in {}", path.display()))?
        }
        None => ask(&get_random_questions())?,
    };

    let result = calculate_carbon_score(&answers);
    let report = Report {
        result: &result,
        breakdown: result.breakdown(),
        tips: generate_tips(&answers),
    };
    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_report(&report),
    }
    Ok(())
}

fn ask(questions: &[Question]) -> Result<SurveyAnswer> {
    let mut answers = SurveyAnswer::new();
    let mut buffer = String::new();

    for (number, question) in questions.iter().enumerate() {
        println!("[{}/{}] {}", number + 1, questions.len(), question.category);
        println!("{}", question.question);
        for (index, option) in question.options.iter().enumerate() {
            println!("  {} => {}", index + 1, option.label);
        }
        loop {
            print!("> ");
            stdout().flush()?;
            buffer.clear();
            if stdin().read_line(&mut buffer)? == 0 {
                anyhow::bail!("survey aborted");
            }
            match choose(question, buffer.trim()) {
                Some(value) => {
                    store_answer(&mut answers, question, value);
                    break;
                }
                None => println!(
                    "Please answer with a number from 1 to {}.",
                    question.options.len()
                ),
            }
        }
        println!();
    }
    Ok(answers)
}

/// Maps typed input to an option value: a 1-based option number, the value
/// itself, or yes/no for radio questions.
fn choose<'a>(question: &'a Question, input: &str) -> Option<&'a str> {
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| question.options.get(index))
            .map(|option| option.value.as_str());
    }
    let input = match (question.input_type, input.to_ascii_lowercase().as_str()) {
        (InputType::Radio, "y" | "yes") => "true".to_string(),
        (InputType::Radio, "n" | "no") => "false".to_string(),
        (_, input) => input.to_string(),
    };
    question.option(&input).map(|option| option.value.as_str())
}

fn store_answer(answers: &mut SurveyAnswer, question: &Question, value: &str) {
    match question.input_type {
        InputType::Radio => answers.insert(question.answer_key(), value == "true"),
        InputType::Select => answers.insert(question.answer_key(), value),
    }
}

fn print_report(report: &Report) {
    let result = report.result;
    println!(
        "Total: {:.1} kg CO2e ({} impact)",
        result.total_score, result.impact_category
    );
    println!();
    for share in &report.breakdown {
        println!(
            "  {:<16} {:>7.1} kg  ({:.1}%)",
            share.category.label(),
            share.score,
            share.percentage
        );
    }
    if !report.tips.is_empty() {
        println!();
        println!("Tips:");
        for tip in &report.tips {
            println!("  * {} [{} / {}]", tip.title, tip.category, tip.impact);
            println!("    {}", tip.description);
        }
    }
}
