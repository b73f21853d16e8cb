//! Pure assembly of the localized and structured prompts from a form snapshot.

use serde::Serialize;

use crate::domain::FormState;
use crate::domain::catalog::{DEFAULT_ASPECT_RATIO, find_camera_movement};
use crate::domain::prompt::PromptStyle;

const SEGMENT_SEPARATOR: &str = "\n\n";

/// One labeled block of an assembled prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Title,
    CoreDescription,
    VoiceDetails,
    Action,
    Expression,
    LocationTime,
    VisualDetails,
    Atmosphere,
    EnvironmentalSounds,
    Dialogue,
}

impl Segment {
    /// Segments in the order they appear in a prompt.
    pub const ORDER: [Segment; 10] = [
        Segment::Title,
        Segment::CoreDescription,
        Segment::VoiceDetails,
        Segment::Action,
        Segment::Expression,
        Segment::LocationTime,
        Segment::VisualDetails,
        Segment::Atmosphere,
        Segment::EnvironmentalSounds,
        Segment::Dialogue,
    ];

    /// Render this segment, or `None` when its inputs are blank.
    pub fn render(&self, form: &FormState, style: PromptStyle) -> Option<String> {
        match self {
            Segment::Title => labeled(&form.scene_title, style, PromptStyle::title),
            Segment::CoreDescription => {
                labeled(&form.character_core_description, style, PromptStyle::core_description)
            }
            Segment::VoiceDetails => {
                labeled(&form.character_voice_details, style, PromptStyle::voice_details)
            }
            Segment::Action => labeled(&form.character_action, style, PromptStyle::action),
            Segment::Expression => {
                labeled(&form.character_expression, style, PromptStyle::expression)
            }
            Segment::LocationTime => {
                labeled(&form.scene_location_time, style, PromptStyle::location_time)
            }
            Segment::VisualDetails => visual_details(form, style),
            Segment::Atmosphere => {
                labeled(&form.overall_atmosphere, style, PromptStyle::atmosphere)
            }
            Segment::EnvironmentalSounds => {
                labeled(&form.environmental_sounds, style, PromptStyle::environmental_sounds)
            }
            Segment::Dialogue => labeled(&form.character_dialog, style, PromptStyle::dialogue),
        }
    }
}

/// Both renderings of one form snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPrompts {
    /// Indonesian narrative prompt.
    pub localized: String,
    /// English-labeled prompt with flag trailer.
    pub structured: String,
}

/// Assemble both prompts from a form snapshot.
pub fn assemble(form: &FormState) -> GeneratedPrompts {
    GeneratedPrompts {
        localized: render(form, PromptStyle::Localized),
        structured: render(form, PromptStyle::Structured),
    }
}

/// Render one prompt in the given style.
///
/// Field values are trimmed both to decide inclusion and in the rendered
/// text, so `"  Halo "` renders as `"Halo"`. The earlier web form kept the raw
/// value and only skipped empty strings.
pub fn render(form: &FormState, style: PromptStyle) -> String {
    let body = Segment::ORDER
        .iter()
        .filter_map(|segment| segment.render(form, style))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR);

    match style {
        PromptStyle::Localized => body,
        PromptStyle::Structured => {
            format!("{body}{SEGMENT_SEPARATOR}{}", flag_line(form)).trim().to_string()
        }
    }
}

/// The `--ar <ratio>` trailer, followed by `--no <negative>` when one is given.
pub fn flag_line(form: &FormState) -> String {
    let aspect_ratio = non_blank(&form.aspect_ratio).unwrap_or(DEFAULT_ASPECT_RATIO);
    let mut flags = vec![format!("--ar {aspect_ratio}")];
    if let Some(negative) = non_blank(&form.negative_prompt) {
        flags.push(format!("--no {negative}"));
    }
    flags.join(" ")
}

fn visual_details(form: &FormState, style: PromptStyle) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(option) =
        find_camera_movement(form.camera_movement.trim()).filter(|option| !option.value.is_empty())
    {
        lines.push(style.camera_movement(option));
    }
    if let Some(notes) = non_blank(&form.additional_visual_details) {
        lines.push(style.visual_notes(notes));
    }

    if lines.is_empty() {
        return None;
    }
    lines.insert(0, style.visual_header().to_string());
    Some(lines.join("\n"))
}

fn labeled(
    value: &str,
    style: PromptStyle,
    renderer: fn(&PromptStyle, &str) -> String,
) -> Option<String> {
    non_blank(value).map(|value| renderer(&style, value))
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
