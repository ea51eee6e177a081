//! Confirmation and notice dialogs

/// Blocking dialogs shown to the person driving the session
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a notice that needs no answer
    fn alert(&self, message: &str);
}

/// Answers yes to every confirmation and prints notices to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn alert(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Prompter with a fixed answer that records every message
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answer: bool,
        confirmations: Mutex<Vec<String>>,
        alerts: Mutex<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn answering(answer: bool) -> Self {
            Self {
                answer,
                ..Self::default()
            }
        }

        pub fn confirmations(&self) -> Vec<String> {
            self.confirmations.lock().unwrap().clone()
        }

        pub fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, message: &str) -> bool {
            self.confirmations.lock().unwrap().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }
}
