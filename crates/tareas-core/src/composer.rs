use crate::error::ComposeError;
use crate::types::io::PhraseInput;
use crate::types::topic::Topic;

/// Collapses either input mode into the final phrase text.
///
/// Guided fragments are trimmed, blank ones dropped, and the rest joined
/// with single spaces, so skipped steps never leave doubled spacing.
pub fn compose(input: &PhraseInput) -> String {
    match input {
        PhraseInput::Simple(text) => text.trim().to_string(),
        PhraseInput::Guided(steps) => steps
            .iter()
            .map(|step| step.trim())
            .filter(|step| !step.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Checks a composed phrase and its topic tags. The phrase is checked
/// first, so a submission missing both reports the empty phrase.
pub fn validate(phrase: &str, topics: &[Topic]) -> Result<(), ComposeError> {
    if phrase.trim().is_empty() {
        return Err(ComposeError::EmptyPhrase);
    }
    if topics.is_empty() {
        return Err(ComposeError::NoTopicSelected);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_input_is_trimmed() {
        let phrase = compose(&PhraseInput::Simple("  I have been studying  ".to_string()));
        assert_eq!(phrase, "I have been studying");
    }

    #[test]
    fn guided_steps_join_with_single_spaces() {
        let steps = vec![
            "I".to_string(),
            " go ".to_string(),
            "  ".to_string(),
            "home".to_string(),
        ];
        assert_eq!(compose(&PhraseInput::Guided(steps)), "I go home");
    }

    #[test]
    fn guided_with_all_blank_steps_is_empty() {
        let steps = vec![String::new(), "   ".to_string()];
        assert_eq!(compose(&PhraseInput::Guided(steps)), "");
    }

    #[test]
    fn empty_phrase_is_reported_before_missing_topics() {
        assert_eq!(validate("", &[]), Err(ComposeError::EmptyPhrase));
        assert_eq!(validate("   ", &[Topic::Causatives]), Err(ComposeError::EmptyPhrase));
    }

    #[test]
    fn phrase_without_topics_is_rejected() {
        assert_eq!(validate("I wish I knew", &[]), Err(ComposeError::NoTopicSelected));
    }

    #[test]
    fn phrase_with_a_topic_passes() {
        assert_eq!(validate("I wish I knew", &[Topic::WishAndHope]), Ok(()));
    }
}
