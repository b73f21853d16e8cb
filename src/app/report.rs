//! Text report for a generated prompt pair.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, GeneratedPrompts};

const REPORT_TEMPLATE: &str = r#"== Hasil Prompt Veo 3 ==

-- Prompt Bahasa Indonesia (Dapat Diedit) --
{% if localized %}{{ localized }}{% else %}(kosong){% endif %}

-- Prompt Bahasa Inggris Final (Untuk Veo 3) --
{{ structured }}
{%- if notes %}

Catatan Struktur Prompt:
  Prompt Bahasa Indonesia: versi naratif yang lebih deskriptif untuk Anda review dan kembangkan.
  Prompt Bahasa Inggris Final: prompt terstruktur dengan label Bahasa Inggris untuk model AI
  seperti Veo 3. Dialog karakter tetap dalam Bahasa Indonesia. Bagian ini yang disalin ke clipboard.
{%- endif %}

(c) {{ year }} Veo 3 Prompt Generator. Untuk tujuan ilustrasi."#;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render both prompts with headings, the optional structure note and the footer.
pub fn render_report(
    prompts: &GeneratedPrompts,
    year: i32,
    notes: bool,
) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(
        REPORT_TEMPLATE,
        context! {
            localized => prompts.localized.as_str(),
            structured => prompts.structured.as_str(),
            notes => notes,
            year => year,
        },
    )
    .map_err(|err| AppError::RenderError(err.to_string()))
}

/// Current calendar year for the footer.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts(localized: &str, structured: &str) -> GeneratedPrompts {
        GeneratedPrompts { localized: localized.to_string(), structured: structured.to_string() }
    }

    #[test]
    fn report_contains_both_prompts_and_footer() {
        let report =
            render_report(&prompts("Judul Scene: Terminal", "Scene Title: Terminal"), 2026, false)
                .unwrap();
        assert!(report.contains("-- Prompt Bahasa Indonesia (Dapat Diedit) --\nJudul Scene: Terminal"));
        assert!(report.contains("-- Prompt Bahasa Inggris Final (Untuk Veo 3) --\nScene Title: Terminal"));
        assert!(report.ends_with("(c) 2026 Veo 3 Prompt Generator. Untuk tujuan ilustrasi."));
        assert!(!report.contains("Catatan Struktur Prompt"));
    }

    #[test]
    fn empty_localized_prompt_is_marked() {
        let report = render_report(&prompts("", "--ar 16:9"), 2026, true).unwrap();
        assert!(report.contains("(kosong)"));
        assert!(report.contains("Catatan Struktur Prompt:"));
    }

    #[test]
    fn prompt_text_is_not_escaped() {
        let report = render_report(&prompts("a & \"b\"", "<x>"), 2026, false).unwrap();
        assert!(report.contains("a & \"b\""));
        assert!(report.contains("<x>"));
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
