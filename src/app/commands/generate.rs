//! Build a form from a document and assignments, then generate both prompts.

use std::path::PathBuf;
use std::time::Instant;

use crate::app::AppContext;
use crate::app::session::{Action, CopyOutcome, Session};
use crate::domain::form_state::validate_option;
use crate::domain::{AppError, FormField, FormState};
use crate::ports::{ClipboardWriter, FormStore};

/// Inputs for `generate`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Form document to start from. Defaults apply when absent.
    pub form: Option<PathBuf>,
    /// `key=value` assignments applied in order after the document.
    pub assignments: Vec<String>,
    /// Copy the structured prompt to the clipboard.
    pub copy: bool,
}

/// Generated session plus the copy result when a copy was requested.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub session: Session,
    pub copy: Option<CopyOutcome>,
}

pub fn execute<S: FormStore, C: ClipboardWriter>(
    ctx: &mut AppContext<S, C>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let form = build_form(ctx.forms(), options)?;

    let mut session = Session::with_form(form);
    session.apply(Action::Generate);

    let copy = if options.copy {
        Some(session.copy_structured(ctx.clipboard_mut(), Instant::now()))
    } else {
        None
    };

    Ok(GenerateOutcome { session, copy })
}

/// Load the base document and apply assignments. Select values must come from their catalogs.
pub fn build_form<S: FormStore>(store: &S, options: &GenerateOptions) -> Result<FormState, AppError> {
    let mut form = match &options.form {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading form document");
            store.load(path)?
        }
        None => FormState::default(),
    };
    form.validate_options()?;

    for assignment in &options.assignments {
        let (field, value) = parse_assignment(assignment)?;
        validate_option(field, &value)?;
        form.set(field, value);
    }

    Ok(form)
}

/// Split `key=value`. The value may itself contain `=`.
pub fn parse_assignment(assignment: &str) -> Result<(FormField, String), AppError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| AppError::InvalidAssignment(assignment.to_string()))?;
    if key.trim().is_empty() {
        return Err(AppError::InvalidAssignment(assignment.to_string()));
    }
    let field: FormField = key.parse()?;
    Ok((field, value.to_string()))
}
