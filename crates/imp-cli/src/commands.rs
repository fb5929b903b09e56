use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use imp_core::models::submission::Submission;
use imp_export::render;
use imp_export::report::{BlankFormContext, ResultsContext};
use imp_instruments::analysis::{self, DetailedAnalysis};
use imp_instruments::catalog::{Catalog, SectionId};
use imp_instruments::interpret::Interpreter;
use imp_instruments::scoring::{ScoreResult, Scorer};
use imp_instruments::validation::Validator;

use crate::cli::{CatalogArgs, Command, OutputFormat, ScoreArgs, ValidateArgs};

/// JSON body printed by `imp score`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationResponse {
    status: &'static str,
    scores: ScoreResult,
    interpretation: String,
    detailed_analysis: DetailedAnalysis,
}

pub fn run(catalog: &Catalog, command: Command) -> eyre::Result<ExitCode> {
    match command {
        Command::Validate(args) => validate(catalog, args),
        Command::Score(args) => score(catalog, args),
        Command::Catalog(args) => list_catalog(catalog, args),
        Command::Form => blank_form(catalog),
    }
}

fn validate(catalog: &Catalog, args: ValidateArgs) -> eyre::Result<ExitCode> {
    let submission = read_submission(&args.input)?;
    let validator = Validator::new(catalog);

    let errors = if args.all {
        validator.validate_all(&submission)
    } else {
        validator.validate(&submission).err().into_iter().collect()
    };

    if errors.is_empty() {
        println!("valid");
        return Ok(ExitCode::SUCCESS);
    }
    for e in &errors {
        println!("{e}");
    }
    Ok(ExitCode::FAILURE)
}

fn score(catalog: &Catalog, args: ScoreArgs) -> eyre::Result<ExitCode> {
    let submission = read_submission(&args.input)?;
    let patient_id = submission.patient_id().unwrap_or("unknown").to_string();
    tracing::info!(%patient_id, "evaluation received");

    if let Err(e) = Validator::new(catalog).validate(&submission) {
        eprintln!("{e}");
        return Ok(ExitCode::FAILURE);
    }

    let scores = Scorer::new(catalog).score(&submission);
    let age_weeks = args.age_weeks.or_else(|| submission.age_weeks());
    let interpreter = Interpreter::new(catalog);
    let detailed_analysis = analysis::analyze(&interpreter, &scores, age_weeks);

    match args.format {
        OutputFormat::Json => {
            let response = EvaluationResponse {
                status: "success",
                interpretation: detailed_analysis.interpretation.clone(),
                scores,
                detailed_analysis,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Report => {
            let context =
                ResultsContext::new(catalog, &submission, &detailed_analysis, today());
            print!("{}", render::render_results(&context)?);
        }
    }

    tracing::info!(%patient_id, "evaluation completed");
    Ok(ExitCode::SUCCESS)
}

fn list_catalog(catalog: &Catalog, args: CatalogArgs) -> eyre::Result<ExitCode> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog.to_schema()?)?);
        return Ok(ExitCode::SUCCESS);
    }

    for id in SectionId::ALL {
        let section = catalog.section(id);
        println!("{} ({}-{})", section.title, section.start, section.end);
        for item in catalog.items_in(id) {
            let values: Vec<String> = item.options.iter().map(|o| o.value.to_string()).collect();
            println!(
                "  {:>2}. [{}] {} ({}) {{{}}}",
                item.sequence_number,
                item.skill_type.code(),
                item.title,
                item.id,
                values.join(",")
            );
        }
    }
    println!("maximum possible score: {}", catalog.max_possible());
    Ok(ExitCode::SUCCESS)
}

fn blank_form(catalog: &Catalog) -> eyre::Result<ExitCode> {
    let context = BlankFormContext::new(catalog, today());
    print!("{}", render::render_blank_form(&context)?);
    Ok(ExitCode::SUCCESS)
}

fn read_submission(input: &Path) -> eyre::Result<Submission> {
    let contents = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| eyre::eyre!("failed to read submission at {}: {e}", input.display()))?
    };
    Ok(Submission::from_json(&contents)?)
}

fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
