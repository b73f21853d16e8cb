//! Terminal menu driving a [`Session`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use dialoguer::{Editor, Error as DialoguerError, Input, Select};

use crate::app::report::{current_year, render_report};
use crate::app::session::{Action, Session};
use crate::domain::{
    ASPECT_RATIOS, AppError, CAMERA_MOVEMENTS, FieldKind, FormField, GeneratedPrompts,
    StatusKind,
};
use crate::ports::FormStore;
use crate::services::{ArboardClipboardWriter, FilesystemFormStore};

const DEFAULT_SAVE_PATH: &str = "scene.toml";
const PREVIEW_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    EditField,
    Generate,
    EditLocalized,
    Copy,
    Reset,
    Save,
    Quit,
}

impl MenuItem {
    fn label(&self) -> &'static str {
        match self {
            MenuItem::EditField => "Isi field",
            MenuItem::Generate => "Buat Prompt",
            MenuItem::EditLocalized => "Edit Prompt Bahasa Indonesia",
            MenuItem::Copy => "Salin Prompt Veo 3",
            MenuItem::Reset => "Reset Isian",
            MenuItem::Save => "Simpan form",
            MenuItem::Quit => "Keluar",
        }
    }

    /// Menu entries for the current session. Output actions appear once a prompt exists.
    fn available(has_output: bool) -> Vec<MenuItem> {
        let mut items = vec![MenuItem::EditField, MenuItem::Generate];
        if has_output {
            items.extend([MenuItem::EditLocalized, MenuItem::Copy]);
        }
        items.extend([MenuItem::Reset, MenuItem::Save, MenuItem::Quit]);
        items
    }
}

pub fn run_interactive(form_path: Option<PathBuf>) -> Result<(), AppError> {
    let store = FilesystemFormStore::new();
    let form = match &form_path {
        Some(path) => {
            let form = store.load(path)?;
            form.validate_options()?;
            form
        }
        None => Default::default(),
    };
    let mut session = Session::with_form(form);
    let mut clipboard = ArboardClipboardWriter::new();

    println!("Veo 3 Prompt Generator");
    println!("Buat prompt karakter yang sangat detail dan konsisten untuk Veo 3.");

    loop {
        if let Some(status) = session.status(Instant::now()) {
            match status.kind {
                StatusKind::Success => println!("✅ {}", status.text),
                StatusKind::Failure => println!("⚠️  {}", status.text),
            }
        }

        let items = MenuItem::available(session.has_output());
        let labels: Vec<&str> = items.iter().map(|item| item.label()).collect();
        let Some(index) = select("Pilih aksi", &labels, 0)? else {
            break;
        };

        match items[index] {
            MenuItem::EditField => edit_field(&mut session)?,
            MenuItem::Generate => {
                session.apply(Action::Generate);
                print_prompts(&session)?;
            }
            MenuItem::EditLocalized => {
                if let Some(text) = edit_text(session.localized_prompt())? {
                    session.apply(Action::EditLocalized(text));
                }
            }
            MenuItem::Copy => {
                session.copy_structured(&mut clipboard, Instant::now());
            }
            MenuItem::Reset => {
                session.apply(Action::Reset);
                println!("Isian direset.");
            }
            MenuItem::Save => save_form(&store, &session, form_path.as_deref())?,
            MenuItem::Quit => break,
        }
    }

    println!("(c) {} Veo 3 Prompt Generator. Untuk tujuan ilustrasi.", current_year());
    Ok(())
}

fn edit_field(session: &mut Session) -> Result<(), AppError> {
    let labels: Vec<String> = FormField::ALL
        .iter()
        .map(|field| format!("{} [{}]", field.label(), preview(session.form().get(*field))))
        .collect();
    let Some(index) = select("Pilih field", &labels, 0)? else {
        return Ok(());
    };
    let field = FormField::ALL[index];
    let current = session.form().get(field).to_string();

    let value = match field.kind() {
        FieldKind::Text => input_text(field, &current)?,
        FieldKind::Multiline => {
            println!("contoh: {}", field.hint());
            edit_text(&current)?.map(|text| text.trim_end_matches(['\r', '\n']).to_string())
        }
        FieldKind::Select => select_option(field, &current)?,
    };

    if let Some(value) = value {
        session.apply(Action::SetField(field, value));
    }
    Ok(())
}

fn select_option(field: FormField, current: &str) -> Result<Option<String>, AppError> {
    let (values, labels): (Vec<&str>, Vec<String>) = match field {
        FormField::CameraMovement => CAMERA_MOVEMENTS
            .iter()
            .map(|option| (option.value, option.label_localized.to_string()))
            .unzip(),
        _ => ASPECT_RATIOS.iter().map(|option| (option.value, option.label.to_string())).unzip(),
    };
    let default = values.iter().position(|value| *value == current).unwrap_or(0);

    Ok(select(field.label(), &labels, default)?.map(|index| values[index].to_string()))
}

fn print_prompts(session: &Session) -> Result<(), AppError> {
    let prompts = GeneratedPrompts {
        localized: session.localized_prompt().to_string(),
        structured: session.structured_prompt().to_string(),
    };
    println!();
    println!("{}", render_report(&prompts, current_year(), true)?);
    println!();
    Ok(())
}

fn save_form<S: FormStore>(
    store: &S,
    session: &Session,
    form_path: Option<&Path>,
) -> Result<(), AppError> {
    let suggested = form_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| DEFAULT_SAVE_PATH.to_string());
    let path = match Input::<String>::new()
        .with_prompt("Simpan ke")
        .with_initial_text(suggested)
        .interact_text()
    {
        Ok(value) => PathBuf::from(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => return Ok(()),
        Err(err) => return Err(interaction_error(err)),
    };

    store.save(&path, session.form())?;
    println!("✅ Form tersimpan di {}", path.display());
    Ok(())
}

fn select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(interaction_error)
}

fn input_text(field: FormField, current: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(format!("{} (contoh: {})", field.label(), field.hint()))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(interaction_error(err)),
    }
}

/// Open `$EDITOR` on `current`. `None` when the user quits without saving.
fn edit_text(current: &str) -> Result<Option<String>, AppError> {
    Editor::new().edit(current).map_err(|err| AppError::Interaction(err.to_string()))
}

fn interaction_error(err: DialoguerError) -> AppError {
    AppError::Interaction(err.to_string())
}

fn preview(value: &str) -> String {
    let single_line = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > PREVIEW_CHARS {
        let cut: String = single_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut)
    } else {
        single_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_actions_only_after_generation() {
        assert!(!MenuItem::available(false).contains(&MenuItem::Copy));
        assert!(!MenuItem::available(false).contains(&MenuItem::EditLocalized));
        let items = MenuItem::available(true);
        assert!(items.contains(&MenuItem::Copy));
        assert_eq!(items.last(), Some(&MenuItem::Quit));
    }

    #[test]
    fn preview_flattens_and_truncates() {
        assert_eq!(preview("a\n  b"), "a b");
        let long = "x".repeat(60);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS + 1);
    }
}
