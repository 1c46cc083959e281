//! # Project Info Collection
//!
//! File: cli/src/commands/setup/collect.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Asks the operator the profile's questions in a fixed order and derives
//! the remaining placeholder values from the answers. Answers are taken as
//! typed: nothing is validated, and an empty answer simply flows into the
//! derived values.
//!
//! ## Derived Values
//!
//! Derivations are plain string operations on the answers plus today's date
//! from the injected `Clock`:
//! - `snake`: `keyword-analysis` → `keyword_analysis`
//! - `title`: `keyword analysis` → `Keyword Analysis`
//! - `abbreviation`: `keyword-analysis-v2` → `kav`
//! - `slug`: `My Project` → `my-project`
//!
//! The essential profiles end the sprint on day 28 of the current month,
//! even when today is already past it.
//!
use super::profile::{Profile, PROJECT_SLUG_KEY};
use crate::common::clock::Clock;
use crate::common::ui::prompt::{self, Prompter};
use crate::core::error::Result;
use crate::core::project_info::ProjectInfo;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

const DEFAULT_TEAM_NAME: &str = "Development Team";

/// Project-type menu for the enhanced profile: (answer, label, value).
const PROJECT_TYPES: &[(&str, &str, &str)] = &[
    ("1", "Data Pipeline / ETL", "data-pipeline"),
    ("2", "Web Application", "web-application"),
    ("3", "Machine Learning", "ml-model"),
    ("4", "API Service", "api-service"),
    ("5", "Other", "other"),
];
const FALLBACK_PROJECT_TYPE: &str = "other";

/// Starter entries for the sprint document.
struct SprintDefaults {
    changes: [&'static str; 3],
    next_steps: [&'static str; 3],
    decision: &'static str,
}

const FULL_SPRINT: SprintDefaults = SprintDefaults {
    changes: [
        "Update data processing logic",
        "Add validation checks",
        "Update documentation",
    ],
    next_steps: ["Complete implementation", "Run tests", "Deploy to production"],
    decision: "Decided on implementation approach",
};

const ESSENTIAL_SPRINT: SprintDefaults = SprintDefaults {
    changes: [
        "Set up initial project structure",
        "Create core processing logic",
        "Add documentation",
    ],
    next_steps: [
        "Define data requirements",
        "Implement initial version",
        "Test with sample data",
    ],
    decision: "Chose implementation approach",
};

/// Asks the profile's questions and returns the complete mapping.
pub fn collect(
    profile: Profile,
    prompter: &mut dyn Prompter,
    clock: &dyn Clock,
) -> Result<ProjectInfo> {
    let today = clock.today();
    let info = match profile {
        Profile::Full => collect_full(prompter, today)?,
        Profile::Enhanced | Profile::Simple => collect_essential(profile, prompter, today)?,
    };
    debug!("Collected {} values for {} profile", info.len(), profile);
    Ok(info)
}

fn collect_full(p: &mut dyn Prompter, today: NaiveDate) -> Result<ProjectInfo> {
    p.say("🚀 Claude Documentation Setup")?;
    p.say(&"=".repeat(50))?;
    p.say("This will customize the documentation templates for your project.\n")?;

    let mut info = ProjectInfo::new();
    ask_into(p, &mut info, "PROJECT_NAME", "Project name: ")?;
    let algorithm = ask_into(
        p,
        &mut info,
        "ALGORITHM_TYPE",
        "Algorithm/system type (e.g., keyword-classification, pricing-optimization): ",
    )?;
    ask_into(
        p,
        &mut info,
        "ALGORITHM_NAME",
        "Algorithm display name (e.g., Keyword Classification V2): ",
    )?;
    let primary_ids = ask_into(
        p,
        &mut info,
        "PRIMARY_IDS",
        "Primary identifiers (e.g., BSS-12345-678, SKU-ABC): ",
    )?;
    info.insert("START_DATE", iso_date(today));

    ask_into(
        p,
        &mut info,
        "SPRINT_DATES",
        "Current sprint dates (e.g., July 16-30, 2025): ",
    )?;
    let task = ask_into(
        p,
        &mut info,
        "CURRENT_TASK_DESCRIPTION",
        "What are you currently working on? ",
    )?;

    let current_file = ask_into(
        p,
        &mut info,
        "CURRENT_FILE",
        "Main file you're working on (e.g., scripts/process_data.py): ",
    )?;
    ask_into(
        p,
        &mut info,
        "OUTPUT_LOCATION",
        "Where does output go? (e.g., BigQuery table name): ",
    )?;
    ask_into(
        p,
        &mut info,
        "TEST_IDENTIFIER",
        "Test case identifier (e.g., BSS-92588-723): ",
    )?;

    insert_doc_paths(&mut info, &algorithm);

    let team = p.ask("Team name (optional, press Enter to skip): ")?;
    info.insert(
        "TEAM_NAME",
        if team.is_empty() {
            DEFAULT_TEAM_NAME.to_string()
        } else {
            team
        },
    );

    p.say("\n📊 BigQuery Configuration")?;
    let prefix = ask_into(p, &mut info, "TABLE_PREFIX", "Table prefix (e.g., pp, kwr): ")?;
    let dataset = ask_into(
        p,
        &mut info,
        "OUTPUT_DATASET",
        "Output dataset (e.g., OF_Dataset): ",
    )?;
    info.insert("OUTPUT_TABLE", output_table(&dataset, &prefix, &algorithm));

    insert_examples(&mut info, &algorithm, "calculate", "improvement");
    let primary_id = primary_id(&primary_ids);
    let id_description = format!("{} identifier", primary_id.to_uppercase());
    info.insert("PRIMARY_ID", primary_id);
    info.insert("ID_DESCRIPTION", id_description);
    info.insert("MAIN_SCRIPT_PATH", current_file);
    info.insert("CURRENT_FOCUS_DESCRIPTION", task);

    insert_sprint_defaults(&mut info, &FULL_SPRINT, today);
    info.insert(
        "PREVIOUS_SPRINT",
        format!("{}-sprint1.md", today.format("%Y-%m")),
    );
    Ok(info)
}

fn collect_essential(
    profile: Profile,
    p: &mut dyn Prompter,
    today: NaiveDate,
) -> Result<ProjectInfo> {
    p.say("🚀 Claude Documentation Quick Setup")?;
    p.say(&"=".repeat(50))?;
    p.say("Just answer a few quick questions...\n")?;

    let mut info = ProjectInfo::new();
    let project_name = ask_into(p, &mut info, "PROJECT_NAME", "Project name: ")?;

    let algorithm_question = if profile == Profile::Enhanced {
        p.say("\nSelect project type:")?;
        for (answer, label, _) in PROJECT_TYPES {
            p.say(&format!("{answer}. {label}"))?;
        }
        let choice = p.ask("Select (1-5): ")?;
        info.insert("PROJECT_TYPE", project_type(&choice));
        "What type of system/algorithm? (e.g., keyword-analysis, pricing, inventory): "
    } else {
        "What type of system? (e.g., keyword-analysis, pricing, inventory): "
    };
    let algorithm = ask_into(p, &mut info, "ALGORITHM_TYPE", algorithm_question)?;
    let task = ask_into(
        p,
        &mut info,
        "CURRENT_TASK_DESCRIPTION",
        "What are you working on first? ",
    )?;

    if profile == Profile::Enhanced {
        info.insert(PROJECT_SLUG_KEY, slug(&project_name));
    }
    info.insert("ALGORITHM_NAME", title(&algorithm.replace('-', " ")));
    info.insert("START_DATE", iso_date(today));
    info.insert("SPRINT_DATES", sprint_dates(today));

    info.insert("PRIMARY_IDS", "TBD - will identify during development");
    let current_file = format!("scripts/main_{}.py", snake(&algorithm));
    info.insert("CURRENT_FILE", current_file.clone());
    info.insert("OUTPUT_LOCATION", "TBD - will determine based on requirements");
    info.insert("TEST_IDENTIFIER", "TBD - will set up test cases");
    info.insert("TEAM_NAME", DEFAULT_TEAM_NAME);

    let prefix = abbreviation(&algorithm);
    let dataset = "TBD_Dataset";
    info.insert("TABLE_PREFIX", prefix.clone());
    info.insert("OUTPUT_DATASET", dataset);
    info.insert("OUTPUT_TABLE", format!("{dataset}.{prefix}_output"));

    insert_doc_paths(&mut info, &algorithm);
    insert_examples(&mut info, &algorithm, "process", "optimization");
    info.insert("PRIMARY_ID", "identifier");
    info.insert("ID_DESCRIPTION", "Primary identifier");
    info.insert("MAIN_SCRIPT_PATH", current_file);
    info.insert("CURRENT_FOCUS_DESCRIPTION", task);

    insert_sprint_defaults(&mut info, &ESSENTIAL_SPRINT, today);
    info.insert("PREVIOUS_SPRINT", "initial-setup.md");
    Ok(info)
}

/// Shows the summary for the essential profiles and asks to proceed.
pub fn confirm_setup(
    profile: Profile,
    info: &ProjectInfo,
    p: &mut dyn Prompter,
) -> Result<bool> {
    p.say("\n📋 Setup Summary:")?;
    p.say(&format!("   Project: {}", info.value("PROJECT_NAME")))?;
    if profile == Profile::Enhanced {
        p.say(&format!("   Type: {}", info.value("PROJECT_TYPE")))?;
        p.say(&format!("   Algorithm: {}", info.value("ALGORITHM_TYPE")))?;
    } else {
        p.say(&format!("   Type: {}", info.value("ALGORITHM_TYPE")))?;
    }
    p.say(&format!("   Focus: {}", info.value("CURRENT_TASK_DESCRIPTION")))?;
    p.say("\n✅ Everything else will use smart defaults that can be updated later.")?;
    prompt::confirm(p, "\nProceed with setup? (y/n): ")
}

fn ask_into(
    p: &mut dyn Prompter,
    info: &mut ProjectInfo,
    key: &str,
    question: &str,
) -> Result<String> {
    let answer = p.ask(question)?;
    info.insert(key, answer.clone());
    Ok(answer)
}

fn insert_doc_paths(info: &mut ProjectInfo, algorithm: &str) {
    info.insert(
        "MAIN_ALGORITHM_DOC",
        format!("Algorithm Details: `reference/{algorithm}-guide.md`"),
    );
    info.insert("ALGORITHM_FILE", format!("{algorithm}-guide.md"));
    info.insert(
        "IMPLEMENTATION_GUIDE",
        format!("reference/{algorithm}-implementation.md"),
    );
}

fn insert_examples(
    info: &mut ProjectInfo,
    algorithm: &str,
    production_verb: &str,
    experiment: &str,
) {
    let snake = snake(algorithm);
    info.insert("PRODUCTION_EXAMPLE", format!("{production_verb}_{snake}.py"));
    info.insert("SCRIPT_EXAMPLE", format!("run_{snake}.py"));
    info.insert("TEST_EXAMPLE", snake.clone());
    info.insert("EXPERIMENT_EXAMPLE", format!("{algorithm}-{experiment}"));
    info.insert("FUNCTION_EXAMPLE", format!("process_{snake}"));
}

fn insert_sprint_defaults(info: &mut ProjectInfo, defaults: &SprintDefaults, today: NaiveDate) {
    for (i, change) in defaults.changes.iter().enumerate() {
        info.insert(format!("CHANGE_{}", i + 1), *change);
    }
    for (i, step) in defaults.next_steps.iter().enumerate() {
        info.insert(format!("NEXT_STEP_{}", i + 1), *step);
    }
    info.insert("DATE_1", iso_date(today));
    info.insert("DECISION_1", defaults.decision);
    info.insert("DATE_2", "TBD");
    info.insert("DECISION_2", "TBD");
}

fn project_type(choice: &str) -> &'static str {
    PROJECT_TYPES
        .iter()
        .find(|(answer, _, _)| *answer == choice)
        .map(|(_, _, value)| *value)
        .unwrap_or(FALLBACK_PROJECT_TYPE)
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `"<Month> <dd> - <Month> 28, <yyyy>"` for the current month.
fn sprint_dates(today: NaiveDate) -> String {
    let end = today.with_day(28).unwrap_or(today);
    format!("{} - {}", today.format("%B %d"), end.format("%B %d, %Y"))
}

/// `<dataset>.<prefix>_<algorithm as snake>`.
pub fn output_table(dataset: &str, prefix: &str, algorithm: &str) -> String {
    format!("{dataset}.{prefix}_{}", snake(algorithm))
}

/// Lowercased first hyphen segment of the identifiers, or `identifier` when there is no hyphen.
fn primary_id(primary_ids: &str) -> String {
    match primary_ids.split_once('-') {
        Some((head, _)) => head.to_lowercase(),
        None => "identifier".to_string(),
    }
}

pub fn snake(s: &str) -> String {
    s.replace('-', "_")
}

pub fn slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}

/// Uppercases the first letter of every run of letters and lowercases the rest.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// First letter of each non-empty hyphen-separated word, at most three letters.
pub fn abbreviation(s: &str) -> String {
    s.split('-')
        .filter_map(|word| word.chars().next())
        .take(3)
        .collect()
}
