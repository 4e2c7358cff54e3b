/// Pipeline stage reported in `result.step_cd` of outbound callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingStep {
    Extract,
    Indexing,
}

impl ProcessingStep {
    pub fn code(&self) -> i32 {
        match self {
            ProcessingStep::Extract => 1,
            ProcessingStep::Indexing => 2,
        }
    }
}
