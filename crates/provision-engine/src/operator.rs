//! Prompt seam between the workflows and the person driving them

use std::collections::VecDeque;
use std::io::Write;
use std::sync::Mutex;

/// Answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    /// Anything that is not a recognizable yes or no
    Unrecognized,
}

/// Interactive seam for the workflows.
///
/// Workflows never touch stdin or stdout directly; they ask and report
/// through this trait, so tests can script an entire session.
pub trait Operator: Send + Sync {
    /// Prompt for one line of input, returned without the trailing newline.
    fn ask(&self, prompt: &str) -> String;

    /// Show one line of progress or status text.
    fn say(&self, message: &str);

    /// Ask a yes/no question. `y`/`yes` and `n`/`no` are matched
    /// case-insensitively; everything else is [`Confirmation::Unrecognized`].
    fn confirm(&self, prompt: &str) -> Confirmation {
        match self.ask(prompt).trim().to_lowercase().as_str() {
            "y" | "yes" => Confirmation::Yes,
            "n" | "no" => Confirmation::No,
            _ => Confirmation::Unrecognized,
        }
    }
}

/// Operator backed by the controlling terminal.
#[derive(Debug, Default)]
pub struct Terminal;

impl Operator for Terminal {
    fn ask(&self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return String::new();
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    }

    fn say(&self, message: &str) {
        println!("{message}");
    }
}

/// Scripted operator feeding queued answers and recording every line of
/// output, for tests and unattended runs.
#[derive(Debug, Default)]
pub struct Script {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl Script {
    /// Queue the given answers, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Everything said and asked so far, in order. Prompts are recorded
    /// with a leading `? `.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().unwrap().clone()
    }

    /// Whether any transcript line contains the given text.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript
            .lock()
            .unwrap()
            .iter()
            .any(|line| line.contains(needle))
    }
}

impl Operator for Script {
    /// # Panics
    ///
    /// Panics when the script has no answer left for the prompt.
    fn ask(&self, prompt: &str) -> String {
        self.transcript.lock().unwrap().push(format!("? {prompt}"));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("script ran out of answers at prompt: {prompt}"))
    }

    fn say(&self, message: &str) {
        self.transcript.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_recognizes_yes_and_no_case_insensitively() {
        let script = Script::new(["YES", "n", "maybe", " y "]);
        assert_eq!(script.confirm("continue?"), Confirmation::Yes);
        assert_eq!(script.confirm("continue?"), Confirmation::No);
        assert_eq!(script.confirm("continue?"), Confirmation::Unrecognized);
        assert_eq!(script.confirm("continue?"), Confirmation::Yes);
    }

    #[test]
    fn script_replays_answers_and_keeps_a_transcript() {
        let script = Script::new(["E000123"]);
        assert_eq!(script.ask("Enter E# :"), "E000123");
        script.say("No End User found for E000123");
        assert_eq!(
            script.transcript(),
            vec![
                "? Enter E# :".to_string(),
                "No End User found for E000123".to_string()
            ]
        );
        assert!(script.saw("No End User found"));
    }

    #[test]
    #[should_panic(expected = "ran out of answers")]
    fn script_panics_when_answers_run_dry() {
        let script = Script::new(Vec::<String>::new());
        script.ask("Enter E# :");
    }
}
