use crate::types::task::Task;

/// Name printed on the transcript when the student never set one.
pub const FALLBACK_STUDENT: &str = "Estudiante";

const HEADER: &str = "ENTREGA DE TAREAS\n------------------\n";

/// Renders the plain-text submission transcript, or `None` when there is
/// nothing to submit. The output carries no trailing newline.
pub fn render_transcript(
    tasks: &[Task],
    student_name: &str,
    date: &str,
    include_topics: bool,
) -> Option<String> {
    if tasks.is_empty() {
        return None;
    }

    let name = student_name.trim();
    let name = if name.is_empty() { FALLBACK_STUDENT } else { name };

    let mut out = String::from(HEADER);
    out.push_str(&format!("Estudiante: {name}\n"));
    out.push_str(&format!("Fecha de entrega: {date}\n\n"));
    out.push_str("TAREAS:\n");

    let lines: Vec<String> = tasks
        .iter()
        .map(|task| task_line(task, include_topics))
        .collect();
    out.push_str(&lines.join("\n"));

    Some(out)
}

fn task_line(task: &Task, include_topics: bool) -> String {
    let mut line = format!("- {}", task.phrase);
    if include_topics && !task.lessons.is_empty() {
        let labels: Vec<&str> = task.lessons.iter().map(|topic| topic.label()).collect();
        line.push_str(&format!(" [{}]", labels.join(", ")));
    }
    line
}
