//! Label sets for the two prompt renderings.

use crate::domain::catalog::CameraMovementOption;

/// Policy appended to the voice segment of the localized prompt.
pub const VOICE_POLICY_LOCALIZED: &str = "PENTING: Seluruh dialog harus dalam Bahasa Indonesia \
     dengan pengucapan natural dan jelas. Pastikan suara karakter ini konsisten di seluruh video.";

/// Policy appended to the voice segment of the structured prompt.
pub const VOICE_POLICY_STRUCTURED: &str = "IMPORTANT: All dialogue must be in Indonesian with \
     natural and clear pronunciation. Ensure this character's voice is consistent throughout the video.";

/// Dialogue language marker in the localized prompt.
pub const DIALOGUE_POLICY_LOCALIZED: &str = "DIALOG dalam Bahasa Indonesia";

/// Dialogue language marker in the structured prompt.
pub const DIALOGUE_POLICY_STRUCTURED: &str = "DIALOGUE in Bahasa Indonesia";

/// Which label set a prompt is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Indonesian narrative labels, no flag trailer.
    Localized,
    /// English section labels followed by `--ar`/`--no` flags.
    Structured,
}

impl PromptStyle {
    pub fn title(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => format!(
                "Judul Scene: {value}\nDeskripsi: Adegan ini berpusat pada sebuah skenario berjudul \"{value}\"."
            ),
            PromptStyle::Structured => format!("Scene Title: {value}"),
        }
    }

    pub fn core_description(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => {
                format!("Deskripsi Karakter Inti: Karakter utama adalah {value}")
            }
            PromptStyle::Structured => format!("Core Character Description: {value}"),
        }
    }

    pub fn voice_details(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => {
                format!("Detail Suara Karakter: {value}\n{VOICE_POLICY_LOCALIZED}")
            }
            PromptStyle::Structured => {
                format!("Character Voice Details: {value}\n{VOICE_POLICY_STRUCTURED}")
            }
        }
    }

    pub fn action(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => format!("Aksi Karakter: Karakter terlihat melakukan {value}."),
            PromptStyle::Structured => format!("Character Action: {value}"),
        }
    }

    pub fn expression(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => format!(
                "Ekspresi Karakter: Ekspresi yang ditunjukkan oleh karakter adalah {value}."
            ),
            PromptStyle::Structured => format!("Character Expression: {value}"),
        }
    }

    pub fn location_time(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => {
                format!("Latar Tempat & Waktu: Adegan berlangsung di {value}.")
            }
            PromptStyle::Structured => format!("Scene Location & Time: {value}"),
        }
    }

    /// Header line of the composite visual details segment.
    pub fn visual_header(&self) -> &'static str {
        match self {
            PromptStyle::Localized => "Detail Visual Tambahan:",
            PromptStyle::Structured => "Additional Visual Details:",
        }
    }

    pub fn camera_movement(&self, option: &CameraMovementOption) -> String {
        match self {
            PromptStyle::Localized => format!(
                "  - Gerakan Kamera: {} ({}).",
                option.label_localized, option.label_common
            ),
            PromptStyle::Structured => format!("  - Camera Movement: {}.", option.label_common),
        }
    }

    pub fn visual_notes(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => format!("  - Catatan Visual Lainnya: {value}."),
            PromptStyle::Structured => format!("  - Other Visual Notes: {value}."),
        }
    }

    pub fn atmosphere(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => {
                format!("Suasana Keseluruhan: Atmosfer yang ingin dibangun adalah {value}.")
            }
            PromptStyle::Structured => format!("Overall Atmosphere: {value}"),
        }
    }

    pub fn environmental_sounds(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => format!("Suara Lingkungan/Ambience: SOUND: {value}"),
            PromptStyle::Structured => format!("Environmental Sounds/Ambience: SOUND: {value}"),
        }
    }

    pub fn dialogue(&self, value: &str) -> String {
        match self {
            PromptStyle::Localized => format!(
                "Dialog Karakter: {DIALOGUE_POLICY_LOCALIZED}: Karakter berkata: \"{value}\""
            ),
            PromptStyle::Structured => format!(
                "Character Dialogue (in Indonesian): {DIALOGUE_POLICY_STRUCTURED}: Character says: \"{value}\""
            ),
        }
    }
}
