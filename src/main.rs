use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use u_assign::engine::{AssignmentEngine, AssignmentRun, EngineConfig, RandomTieBreaker};
use u_assign::loader;
use u_assign::models::{FacultyTable, StudentPreference, MAX_PREFERENCES};
use u_assign::report::{render_chart, PreferenceReport};
use u_assign::validation::validate_input;

const CHART_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(
    name = "u-assign",
    version,
    about = "Assign students to faculty supervisors from ranked preferences"
)]
struct Cli {
    #[arg(long, default_value = "Students_Preferences.csv", help = "Student preferences file")]
    students: PathBuf,
    #[arg(long, default_value = "faculty_members.csv", help = "Faculty capacity file")]
    faculty: PathBuf,
    #[arg(long, help = "Seed for tie-breaking; random if omitted")]
    seed: Option<u64>,
    #[arg(long, help = "Engine config JSON (load caps)")]
    config: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, help = "Skip the distribution chart")]
    no_chart: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    run: &'a AssignmentRun,
    faculty: &'a FacultyTable,
    report: &'a PreferenceReport,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match loader::read_engine_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let students = loader::load_student_preferences(&cli.students);
    let mut faculty = loader::load_faculty_table(&cli.faculty);
    info!(
        "loaded {} students and {} faculty",
        students.len(),
        faculty.len()
    );

    if let Err(issues) = validate_input(&students, &faculty) {
        for issue in &issues {
            warn!("{issue}");
        }
    }

    let tie_breaker = match cli.seed {
        Some(seed) => RandomTieBreaker::seeded(seed),
        None => RandomTieBreaker::from_os_rng(),
    };
    let mut engine = AssignmentEngine::new(tie_breaker).with_config(config);
    info!(
        "load caps: preferred < {}, absolute < {}",
        engine.config().preferred_load_cap,
        engine.config().absolute_load_cap
    );
    let run = engine.assign(&students, &mut faculty);
    let report = PreferenceReport::calculate(&run.ledger, &students);

    if cli.json {
        let output = JsonOutput {
            run: &run,
            faculty: &faculty,
            report: &report,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print_text(&run, &faculty, &report, &students);
    if !cli.no_chart {
        println!();
        print!("{}", render_chart(&report, CHART_WIDTH));
    }
    ExitCode::SUCCESS
}

fn print_text(
    run: &AssignmentRun,
    faculty: &FacultyTable,
    report: &PreferenceReport,
    students: &[StudentPreference],
) {
    for r in &run.ledger {
        println!(
            "Student: {}, ID: {}, Assigned Faculty: {}",
            r.student_name, r.student_id, r.faculty_name
        );
    }
    for index in run.unassigned() {
        if let Some(s) = students.get(index) {
            println!("Unassigned: {}, ID: {}", s.name, s.id);
        }
    }

    println!("\nUpdated Faculty Information:");
    for f in faculty {
        println!(
            "Faculty: {}, Current Load: {}, Requested Load: {}",
            f.name, f.current_load, f.requested_load
        );
    }
    println!("Total Current Load: {}", faculty.total_load());

    println!("\nStatistics of Student Preferences:");
    for (rank, count) in &report.rank_counts {
        println!("Preference {rank}: {count} students");
    }
    println!(
        "Students assigned to faculty not in their preferences: {}",
        report.outside_preference
    );
    println!(
        "First preference rate: {:.1}%",
        report.first_choice_rate() * 100.0
    );

    let outside = report.students_outside_preference();
    if !outside.is_empty() {
        println!("\nStudents assigned to faculty not in their preferences:");
        for p in outside {
            println!(
                "Student: {}, ID: {}, Assigned Faculty: {}",
                p.student_name, p.student_id, p.faculty_name
            );
        }
    }

    for rank in 1..=MAX_PREFERENCES {
        println!("\nStudents who were assigned to preference {rank}:");
        for p in report.students_at_rank(rank) {
            println!(
                "Student: {}, ID: {}, Assigned Faculty: {}",
                p.student_name, p.student_id, p.faculty_name
            );
        }
    }
}
