use crate::summary_modal::ResultDialog;

/// Which way one "Create AI Summary" invocation ended.
#[derive(Debug)]
pub enum InvocationOutcome {
    NoActiveView,
    EmptyNote,
    Failed,
    Opened(ResultDialog),
}
