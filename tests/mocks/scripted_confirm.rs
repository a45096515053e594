use amber_safe::ui::Confirm;
use std::sync::Mutex;

/// Confirm that always gives the same answer and records the prompts.
#[allow(dead_code)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
