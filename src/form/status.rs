/// Lifecycle of a single booking submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Submit control is disabled while a request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    /// Success and error both fall back to idle after a delay
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Book Appointment",
            SubmissionStatus::Loading => "Checking availability...",
            SubmissionStatus::Success => "✅ Booked Successfully!",
            SubmissionStatus::Error => "Try Again",
        }
    }
}
