use std::path::Path;

use tareas_core::error::VocabError;
use tareas_core::types::vocab::VocabBook;
use tareas_core::vocab;

pub const WORDS_FILE: &str = "words.csv";
pub const VERBS_FILE: &str = "verbs.csv";

/// The two reference lists, each standing or failing on its own.
#[derive(Debug)]
pub struct Reference {
    pub words: Result<VocabBook, VocabError>,
    pub verbs: Result<Vec<String>, VocabError>,
}

/// Loads both reference files concurrently. A failure on one side never
/// hides the other.
pub async fn load(words_path: &Path, verbs_path: &Path) -> Reference {
    let (words_text, verbs_text) = tokio::join!(
        tokio::fs::read_to_string(words_path),
        tokio::fs::read_to_string(verbs_path),
    );
    Reference {
        words: words_text
            .map(|text| vocab::parse_words(&text))
            .map_err(|err| unavailable(words_path, &err)),
        verbs: verbs_text
            .map(|text| vocab::parse_verbs(&text))
            .map_err(|err| unavailable(verbs_path, &err)),
    }
}

fn unavailable(path: &Path, err: &std::io::Error) -> VocabError {
    VocabError::Unavailable {
        message: format!("{}: {err}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn each_list_stands_or_fails_on_its_own() {
        let dir = tempdir().unwrap();
        let words = dir.path().join(WORDS_FILE);
        let verbs = dir.path().join(VERBS_FILE);
        std::fs::write(&words, "run,Verbos,correr\n").unwrap();

        let reference = load(&words, &verbs).await;
        let book = reference.words.unwrap();
        assert_eq!(book["Verbos"][0].word, "run");
        assert!(reference.verbs.is_err());
    }

    #[tokio::test]
    async fn both_lists_load_together() {
        let dir = tempdir().unwrap();
        let words = dir.path().join(WORDS_FILE);
        let verbs = dir.path().join(VERBS_FILE);
        std::fs::write(
            &words,
            "Palabra,Categoría,Definición\nhardly,Adverbios,\"apenas, difícilmente\"\n",
        )
        .unwrap();
        std::fs::write(&verbs, "Verbos,\nrun,\nbe\n").unwrap();

        let reference = load(&words, &verbs).await;
        let book = reference.words.unwrap();
        assert_eq!(book["Adverbios"][0].definition, "apenas, difícilmente");
        assert_eq!(reference.verbs.unwrap(), ["be", "run"]);
    }
}
