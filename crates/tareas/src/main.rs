use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tareas_core::error::{ComposeError, TrackerError};
use tareas_core::types::{CreateTaskInput, PhraseInput, TaskId, Topic};
use tareas_core::{Store, Tracker};
use tareas_store::{paths, reference, JsonStore};

mod render;

const MAX_GUIDED_STEPS: usize = 4;

#[derive(Parser)]
#[command(name = "tareas", about = "Registro personal de tareas de inglés")]
struct Cli {
    /// Carpeta de datos (por defecto TAREAS_DATA_DIR o la del sistema).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Guarda una nueva tarea.
    Add {
        /// La frase completa (modo simple).
        #[arg(value_name = "FRASE")]
        phrase: Option<String>,
        /// Un paso del modo guiado; repetible, hasta cuatro.
        #[arg(long = "step", value_name = "TEXTO", conflicts_with = "phrase")]
        steps: Vec<String>,
        /// Tema gramatical de la tarea; repetible.
        #[arg(long = "topic", value_name = "TEMA")]
        topics: Vec<Topic>,
    },
    /// Muestra las tareas guardadas, la más reciente primero.
    List,
    /// Borra una tarea por su id.
    Remove {
        id: TaskId,
        /// No pide confirmación.
        #[arg(long)]
        yes: bool,
    },
    /// Borra todas las tareas.
    Clear {
        /// No pide confirmación.
        #[arg(long)]
        yes: bool,
    },
    /// Genera la entrega en texto plano.
    Export {
        /// Añade los temas de cada tarea entre corchetes.
        #[arg(long)]
        topics: bool,
        /// Escribe la entrega en un archivo en vez de la salida estándar.
        #[arg(long, value_name = "ARCHIVO")]
        output: Option<PathBuf>,
    },
    /// Muestra o cambia el nombre del estudiante.
    Name {
        #[arg(value_name = "NOMBRE")]
        name: Option<String>,
    },
    /// Lista los temas disponibles.
    Topics,
    /// Muestra el vocabulario y los verbos de referencia.
    Vocab {
        /// Carpeta con words.csv y verbs.csv (por defecto la de datos).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(paths::data_dir);
    let store = match JsonStore::open(&data_dir) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let tracker = Tracker::new(store);

    match cli.command {
        Command::Add {
            phrase,
            steps,
            topics,
        } => add(&tracker, phrase, steps, topics),
        Command::List => {
            render::task_list(&tracker.tasks().list());
            ExitCode::SUCCESS
        }
        Command::Remove { id, yes } => remove(&tracker, id, yes),
        Command::Clear { yes } => clear(&tracker, yes),
        Command::Export { topics, output } => export(&tracker, topics, output),
        Command::Name { name } => profile_name(&tracker, name),
        Command::Topics => {
            render::topic_list();
            ExitCode::SUCCESS
        }
        Command::Vocab { dir } => vocab(dir.unwrap_or(data_dir)).await,
    }
}

fn add<S: Store>(
    tracker: &Tracker<S>,
    phrase: Option<String>,
    steps: Vec<String>,
    topics: Vec<Topic>,
) -> ExitCode {
    if steps.len() > MAX_GUIDED_STEPS {
        eprintln!("El modo guiado admite como máximo {MAX_GUIDED_STEPS} pasos");
        return ExitCode::FAILURE;
    }
    let input = CreateTaskInput {
        phrase: match phrase {
            Some(text) => PhraseInput::Simple(text),
            None => PhraseInput::Guided(steps),
        },
        topics,
    };
    match tracker.tasks().add(input) {
        Ok(_) => {
            println!("Tarea guardada satisfactoriamente");
            render::task_list(&tracker.tasks().list());
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn remove<S: Store>(tracker: &Tracker<S>, id: TaskId, yes: bool) -> ExitCode {
    if !yes && !confirm("¿Estás seguro de que quieres borrar esta tarea?") {
        return ExitCode::SUCCESS;
    }
    // An id no longer in the list is a quiet no-op.
    match tracker.tasks().remove(id) {
        Ok(_) => {
            render::task_list(&tracker.tasks().list());
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn clear<S: Store>(tracker: &Tracker<S>, yes: bool) -> ExitCode {
    if tracker.tasks().list().is_empty() {
        return ExitCode::SUCCESS;
    }
    if !yes && !confirm("⚠️ ¿Borrar TODAS las tareas? Esta acción es irreversible.") {
        return ExitCode::SUCCESS;
    }
    match tracker.tasks().clear() {
        Ok(()) => {
            println!("Todas las tareas borradas");
            render::task_list(&tracker.tasks().list());
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn export<S: Store>(tracker: &Tracker<S>, topics: bool, output: Option<PathBuf>) -> ExitCode {
    let Some(transcript) = tracker.tasks().transcript(topics) else {
        return ExitCode::SUCCESS;
    };
    match output {
        Some(path) => {
            if let Err(err) = std::fs::write(&path, &transcript) {
                tracing::warn!("cannot write {}: {err}", path.display());
            } else {
                println!("Entrega copiada!");
            }
        }
        None => println!("{transcript}"),
    }
    ExitCode::SUCCESS
}

fn profile_name<S: Store>(tracker: &Tracker<S>, name: Option<String>) -> ExitCode {
    match name {
        Some(name) => match tracker.profile().set_student_name(&name) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => fail(&err),
        },
        None => {
            if let Some(name) = tracker.profile().student_name() {
                println!("{name}");
            }
            ExitCode::SUCCESS
        }
    }
}

async fn vocab(dir: PathBuf) -> ExitCode {
    let words = dir.join(reference::WORDS_FILE);
    let verbs = dir.join(reference::VERBS_FILE);
    let loaded = reference::load(&words, &verbs).await;
    render::vocabulary(&loaded);
    ExitCode::SUCCESS
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [s/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí")
}

fn fail(err: &TrackerError) -> ExitCode {
    eprintln!("{}", describe(err));
    ExitCode::FAILURE
}

fn describe(err: &TrackerError) -> String {
    match err {
        TrackerError::Compose(ComposeError::EmptyPhrase) => {
            "⚠️ La frase no puede estar vacía".to_string()
        }
        TrackerError::Compose(ComposeError::NoTopicSelected) => {
            "⚠️ Selecciona al menos un tema".to_string()
        }
        other => format!("error: {other}"),
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
