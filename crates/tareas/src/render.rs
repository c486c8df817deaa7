use owo_colors::{OwoColorize, Stream};
use tareas_core::types::{Task, Topic};
use tareas_store::reference::Reference;

const EMPTY_LIST: &str = "No tienes tareas guardadas aún. ¡Añade tu primera frase arriba!";
const LOAD_FAILED: &str = "No se pudo cargar.";

/// Prints the task view: one line per task, newest first.
pub fn task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{EMPTY_LIST}");
        return;
    }
    for task in tasks {
        let tags = task
            .lessons
            .iter()
            .map(|topic| topic.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}  {}  {}  {}",
            task.id.if_supports_color(Stream::Stdout, |id| id.dimmed()),
            task.created_at
                .if_supports_color(Stream::Stdout, |date| date.dimmed()),
            task.phrase,
            format!("[{tags}]").if_supports_color(Stream::Stdout, |tags| tags.cyan()),
        );
    }
}

/// Prints the eight topics alongside the keys `add --topic` accepts.
pub fn topic_list() {
    for topic in Topic::ALL {
        let key = topic.label().to_lowercase().replace(' ', "-");
        println!("{key:<20}{}", topic.label());
    }
}

/// Prints the word sections and the verb list. A region that failed to
/// load reports only its own failure.
pub fn vocabulary(reference: &Reference) {
    match &reference.words {
        Ok(book) => {
            for (section, entries) in book {
                println!(
                    "{}",
                    section.if_supports_color(Stream::Stdout, |section| section.bold())
                );
                for entry in entries {
                    println!("  {}: {}", entry.word, entry.definition);
                }
                println!();
            }
        }
        Err(err) => {
            tracing::warn!("word list: {err}");
            println!("{LOAD_FAILED}");
            println!();
        }
    }

    match &reference.verbs {
        Ok(verbs) => {
            println!(
                "{}",
                "Lista de Verbos".if_supports_color(Stream::Stdout, |title| title.bold())
            );
            for verb in verbs {
                println!("  {verb}");
            }
        }
        Err(err) => {
            tracing::warn!("verb list: {err}");
            println!("{LOAD_FAILED}");
        }
    }
}
