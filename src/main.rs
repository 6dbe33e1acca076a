use std::path::PathBuf;

use clap::Parser;
use quiz_app::{load_into, QuizError, QuizRepository, QuizSession, DEFAULT_QUIZ_NAME};

const DEFAULT_QUIZ_PATH: &str = "quizzes/android_quiz.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from
    #[arg(short, long, default_value = DEFAULT_QUIZ_PATH)]
    quiz: PathBuf,

    /// Name to register the quiz under
    #[arg(short, long, default_value = DEFAULT_QUIZ_NAME)]
    name: String,
}

fn start(args: Args) -> Result<(), QuizError> {
    let mut repository = QuizRepository::new();
    load_into(&mut repository, &args.name, &args.quiz)?;

    let quiz = repository.require(&args.name)?;
    quiz_app::run(QuizSession::new(quiz))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = start(args) {
        log::error!("{}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
