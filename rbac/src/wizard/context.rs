/// Submission state shared by every wizard step.
///
/// Steps receive it explicitly; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardContext {
    pub success: bool,
    pub submitting: bool,
    pub error: Option<String>,
    /// Form replaced by the success screen
    pub hide_form: bool,
}

impl WizardContext {
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_success(&mut self, success: bool) {
        self.success = success;
    }

    pub fn set_hide_form(&mut self, hide_form: bool) {
        self.hide_form = hide_form;
    }

    pub fn start_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.success = true;
        self.hide_form = true;
    }

    pub fn submit_failed(&mut self, error: impl Into<String>) {
        self.submitting = false;
        self.error = Some(error.into());
    }
}
