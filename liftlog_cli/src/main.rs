use clap::{value_parser, Args, Parser, Subcommand};
use liftlog_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Workout logbook grouped by date", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this logbook file instead of the one in the data directory
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Print the event log when the command finishes
    #[arg(long, global = true)]
    show_events: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Log an exercise for a date
    Add(AddArgs),

    /// Remove an exercise from a date
    Remove(FindArgs),

    /// Change an exercise (or its session date)
    Update(UpdateArgs),

    /// Show every session (default)
    List,

    /// Show sessions for one date or one muscle group
    Filter(FilterArgs),

    /// Show every exercise for one muscle group
    Exercises {
        #[arg(long)]
        muscle: MuscleGroup,
    },

    /// Remove every session
    Clear,
}

#[derive(Args)]
struct AddArgs {
    #[arg(long, value_parser = parse_name)]
    name: String,

    /// chest, back, legs, shoulders, biceps, triceps or abs
    #[arg(long)]
    muscle: MuscleGroup,

    /// Weight in kg
    #[arg(long, value_parser = value_parser!(i32).range(0..))]
    weight: i32,

    #[arg(long, value_parser = value_parser!(i32).range(0..))]
    reps: i32,

    #[arg(long, value_parser = value_parser!(i32).range(0..))]
    sets: i32,

    /// yyyy/mm/dd, defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<String>,
}

#[derive(Args)]
struct FindArgs {
    #[arg(long, value_parser = parse_name)]
    name: String,

    /// yyyy/mm/dd
    #[arg(long, value_parser = parse_date)]
    date: String,
}

#[derive(Args)]
struct UpdateArgs {
    #[command(flatten)]
    target: FindArgs,

    #[arg(long, value_parser = parse_name)]
    new_name: Option<String>,

    #[arg(long)]
    muscle: Option<MuscleGroup>,

    #[arg(long, value_parser = value_parser!(i32).range(0..))]
    weight: Option<i32>,

    #[arg(long, value_parser = value_parser!(i32).range(0..))]
    reps: Option<i32>,

    #[arg(long, value_parser = value_parser!(i32).range(0..))]
    sets: Option<i32>,

    /// Move the whole session to another date
    #[arg(long, value_parser = parse_date)]
    new_date: Option<String>,
}

impl UpdateArgs {
    fn exercise_update(&self) -> ExerciseUpdate {
        ExerciseUpdate {
            name: self.new_name.clone(),
            muscle: self.muscle,
            weight: self.weight,
            reps: self.reps,
            sets: self.sets,
        }
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FilterArgs {
    /// yyyy/mm/dd
    #[arg(long, value_parser = parse_date)]
    date: Option<String>,

    #[arg(long)]
    muscle: Option<MuscleGroup>,
}

fn main() {
    let cli = Cli::parse();
    liftlog_core::logging::init(liftlog_core::logging::level_for_verbosity(cli.verbose));

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let path = match (cli.file, cli.data_dir) {
        (Some(file), _) => file,
        (None, Some(data_dir)) => data_dir.join(&config.data.logbook_file),
        (None, None) => config.logbook_path(),
    };

    let mut logbook = open_logbook(&path)?;

    match cli.command.unwrap_or(Commands::List) {
        Commands::Add(args) => cmd_add(&mut logbook, args)?,
        Commands::Remove(args) => cmd_remove(&mut logbook, args)?,
        Commands::Update(args) => cmd_update(&mut logbook, args)?,
        Commands::List => display_sessions(logbook.sessions().iter()),
        Commands::Filter(args) => cmd_filter(&logbook, args),
        Commands::Exercises { muscle } => cmd_exercises(&logbook, muscle),
        Commands::Clear => {
            logbook.clear();
            save(&mut logbook)?;
            println!("✓ Logbook cleared");
        }
    }

    if cli.show_events {
        println!();
        if logbook.events().is_empty() {
            println!("No events logged.");
        }
        for event in logbook.events().iter() {
            println!("{}\n", event);
        }
    }

    Ok(())
}

/// Load the logbook, starting fresh when the file does not exist yet.
///
/// A file that exists but cannot be read is an error; it is never overwritten.
fn open_logbook(path: &Path) -> Result<Logbook> {
    let mut logbook = Logbook::new(path);
    match logbook.load() {
        Ok(()) => Ok(logbook),
        Err(e) if e.is_missing_file() => {
            tracing::info!("No existing log file found at {:?}. Starting fresh.", path);
            Ok(logbook)
        }
        Err(e) => Err(e),
    }
}

fn save(logbook: &mut Logbook) -> Result<()> {
    if let Some(parent) = logbook.path().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: logbook.path().to_path_buf(),
                source,
            })?;
        }
    }
    logbook.save()
}

fn cmd_add(logbook: &mut Logbook, args: AddArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(today);
    let exercise = Exercise::with_stats(&args.name, args.muscle, args.weight, args.reps, args.sets);

    logbook
        .session_for_date_or_insert(&date)
        .add_exercise(exercise.clone());
    save(logbook)?;

    display_exercise(&exercise, Some(&date), "Exercise Added");
    println!("\n✓ Exercise added successfully");
    Ok(())
}

fn cmd_remove(logbook: &mut Logbook, args: FindArgs) -> Result<()> {
    let Some(session) = logbook.session_by_date_mut(&args.date) else {
        println!("No workout session found for date: {}", args.date);
        return Ok(());
    };

    if !session.remove_exercise(&args.name) {
        println!("Exercise '{}' not found on this date.", args.name);
        return Ok(());
    }

    save(logbook)?;
    println!("✓ Exercise '{}' removed successfully.", args.name);
    Ok(())
}

fn cmd_update(logbook: &mut Logbook, args: UpdateArgs) -> Result<()> {
    let update = args.exercise_update();
    if update.is_empty() && args.new_date.is_none() {
        return Err(Error::InvalidInput(
            "nothing to update: pass at least one of --new-name, --muscle, --weight, --reps, --sets, --new-date".into(),
        ));
    }

    let target = &args.target;
    let Some(session) = logbook.session_by_date_mut(&target.date) else {
        println!("No workout session found for date: {}", target.date);
        return Ok(());
    };

    let Some(exercise) = session.exercise_by_name_mut(&target.name) else {
        println!("Exercise '{}' not found on this date.", target.name);
        return Ok(());
    };
    update.apply(exercise);
    display_exercise(exercise, None, "Exercise");

    if let Some(ref new_date) = args.new_date {
        tracing::info!("Moving session {} to {}", target.date, new_date);
        session.set_date(new_date.as_str());
    }

    save(logbook)?;
    println!("\n✓ Exercise updated successfully!");
    Ok(())
}

fn cmd_filter(logbook: &Logbook, args: FilterArgs) {
    let (title, sessions) = match (args.date, args.muscle) {
        (Some(date), _) => (
            format!("Workouts on {}", date),
            logbook.filter_sessions_by_date(&date),
        ),
        (None, Some(muscle)) => (
            format!("Workouts for {}", muscle),
            logbook.filter_sessions_by_muscle(muscle),
        ),
        // clap's argument group requires one of the two
        (None, None) => return,
    };

    println!("--- {} ---", title);
    if sessions.is_empty() {
        println!("No workout found matching this filter.");
        return;
    }
    display_sessions(sessions.into_iter());
}

fn cmd_exercises(logbook: &Logbook, muscle: MuscleGroup) {
    let exercises = logbook.all_exercises_by_muscle(muscle);
    println!("--- {} exercises ---", muscle);
    if exercises.is_empty() {
        println!("No exercises found for {}.", muscle);
        return;
    }
    for exercise in exercises {
        display_exercise(exercise, None, "Exercise");
    }
}

fn display_sessions<'a>(sessions: impl Iterator<Item = &'a WorkoutSession>) {
    let mut any = false;
    for session in sessions {
        any = true;
        println!("\n===============================");
        println!("    DATE: {}", session.date());
        println!("===============================");

        if session.is_empty() {
            println!("  (Rest Day / No exercises logged)");
        }
        for exercise in session.exercises() {
            display_exercise(exercise, Some(session.date()), "Exercise");
        }
    }

    if !any {
        println!("No exercises have been logged yet.");
    }
}

fn display_exercise(exercise: &Exercise, date: Option<&str>, title: &str) {
    println!("\n{}: {}", title, exercise.name());
    println!(" Muscle: {}", exercise.muscle());
    println!(" Weight: {} kg", exercise.weight());
    println!(" Reps: {}", exercise.reps());
    println!(" Sets: {}", exercise.sets());
    if let Some(date) = date {
        println!(" Date: {}", date);
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y/%m/%d").to_string()
}

fn parse_name(s: &str) -> std::result::Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("exercise name cannot be empty".into());
    }
    Ok(name.to_string())
}

/// Accept a real `yyyy/mm/dd` date and keep it as typed.
///
/// Sessions are matched on the exact date string, so `2025/1/5` and
/// `2025/01/05` are different sessions.
fn parse_date(s: &str) -> std::result::Result<String, String> {
    let date = s.trim();
    chrono::NaiveDate::parse_from_str(date, "%Y/%m/%d")
        .map_err(|e| format!("expected a date like 2025/10/01: {}", e))?;
    Ok(date.to_string())
}
