use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Multiline,
    /// One value out of a compiled-in catalog.
    Select,
}

/// The fields of the prompt form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    SceneTitle,
    CharacterCoreDescription,
    CharacterVoiceDetails,
    CharacterAction,
    CharacterExpression,
    SceneLocationTime,
    AdditionalVisualDetails,
    CameraMovement,
    OverallAtmosphere,
    EnvironmentalSounds,
    CharacterDialog,
    AspectRatio,
    NegativePrompt,
}

impl FormField {
    /// All fields in the order the form presents them.
    pub const ALL: [FormField; 13] = [
        FormField::SceneTitle,
        FormField::CharacterCoreDescription,
        FormField::CharacterVoiceDetails,
        FormField::CharacterAction,
        FormField::CharacterExpression,
        FormField::SceneLocationTime,
        FormField::AdditionalVisualDetails,
        FormField::CameraMovement,
        FormField::OverallAtmosphere,
        FormField::EnvironmentalSounds,
        FormField::CharacterDialog,
        FormField::AspectRatio,
        FormField::NegativePrompt,
    ];

    /// Key used by form documents and `--set`.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::SceneTitle => "sceneTitle",
            FormField::CharacterCoreDescription => "characterCoreDescription",
            FormField::CharacterVoiceDetails => "characterVoiceDetails",
            FormField::CharacterAction => "characterAction",
            FormField::CharacterExpression => "characterExpression",
            FormField::SceneLocationTime => "sceneLocationTime",
            FormField::AdditionalVisualDetails => "additionalVisualDetails",
            FormField::CameraMovement => "cameraMovement",
            FormField::OverallAtmosphere => "overallAtmosphere",
            FormField::EnvironmentalSounds => "environmentalSounds",
            FormField::CharacterDialog => "characterDialog",
            FormField::AspectRatio => "aspectRatio",
            FormField::NegativePrompt => "negativePrompt",
        }
    }

    /// Indonesian form label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::SceneTitle => "Judul Scene",
            FormField::CharacterCoreDescription => "Deskripsi Karakter Inti",
            FormField::CharacterVoiceDetails => "Detail Suara Karakter",
            FormField::CharacterAction => "Aksi Karakter",
            FormField::CharacterExpression => "Ekspresi Karakter",
            FormField::SceneLocationTime => "Latar Tempat & Waktu",
            FormField::AdditionalVisualDetails => "Detail Visual Tambahan",
            FormField::CameraMovement => "Gerakan Kamera",
            FormField::OverallAtmosphere => "Suasana Keseluruhan",
            FormField::EnvironmentalSounds => "Suara Lingkungan/Ambience",
            FormField::CharacterDialog => "Dialog Karakter (Bahasa Indonesia)",
            FormField::AspectRatio => "Aspek Rasio",
            FormField::NegativePrompt => "Negative Prompt (Opsional)",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::SceneTitle => FieldKind::Text,
            FormField::CameraMovement | FormField::AspectRatio => FieldKind::Select,
            _ => FieldKind::Multiline,
        }
    }

    /// Example input shown next to the field.
    pub fn hint(&self) -> &'static str {
        match self {
            FormField::SceneTitle => "terminal bus malam yang ramai",
            FormField::CharacterCoreDescription => {
                "Seorang vlogger wanita muda asal Banjarmasin berusia 27 tahun, tubuh mungil, \
                 tinggi 158cm, rambut ikal sebahu. Pakaian: jaket parasut kuning mustard."
            }
            FormField::CharacterVoiceDetails => {
                "Suara wanita muda, hangat, semangat. Nada: mezzo-soprano. Aksen: Indonesia \
                 dengan sentuhan khas Banjarmasin halus. Tempo: sedang-cepat."
            }
            FormField::CharacterAction => {
                "berjalan di terminal, merekam vlog, berinteraksi dengan pedagang"
            }
            FormField::CharacterExpression => {
                "kagum, antusias, sering tersenyum, melirik kamera sesekali"
            }
            FormField::SceneLocationTime => {
                "Terminal bus antar kota yang ramai di malam hari, baru saja reda hujan \
                 rintik-rintik, aspal terlihat basah."
            }
            FormField::AdditionalVisualDetails => {
                "Pencahayaan: natural dari lampu jalan dan bus. Gaya Video: cinematic realistis. \
                 Kualitas Visual: Resolusi 4K."
            }
            FormField::CameraMovement => "pilih salah satu gerakan kamera dari katalog",
            FormField::OverallAtmosphere => {
                "Sibuk, ramai, penuh antisipasi perjalanan malam, hangat meskipun gerimis."
            }
            FormField::EnvironmentalSounds => {
                "suara mesin bus, pengumuman keberangkatan dari pengeras suara, derai hujan \
                 ringan di atap terminal"
            }
            FormField::CharacterDialog => {
                "Tiap kota punya terminal kayak gini, dan aku suka banget suasana malamnya…"
            }
            FormField::AspectRatio => "pilih salah satu aspek rasio dari katalog",
            FormField::NegativePrompt => {
                "teks di layar, subtitle, logo, distorsi, buram, glitch, suara robotik"
            }
        }
    }

    /// Parse a field from its key. Accepts camelCase, snake_case and kebab-case.
    pub fn from_key(key: &str) -> Option<FormField> {
        let normalized: String =
            key.trim().chars().filter(|c| *c != '_' && *c != '-').collect::<String>().to_lowercase();
        FormField::ALL.into_iter().find(|field| field.key().to_lowercase() == normalized)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FormField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::from_key(s).ok_or_else(|| AppError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_roundtrips() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn from_key_accepts_snake_and_kebab_case() {
        assert_eq!(FormField::from_key("scene_title"), Some(FormField::SceneTitle));
        assert_eq!(FormField::from_key("negative-prompt"), Some(FormField::NegativePrompt));
        assert_eq!(FormField::from_key("ASPECTRATIO"), Some(FormField::AspectRatio));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = "mood".parse::<FormField>().unwrap_err();
        assert!(matches!(err, AppError::UnknownField(key) if key == "mood"));
    }

    #[test]
    fn only_camera_and_aspect_ratio_are_selects() {
        let selects: Vec<FormField> =
            FormField::ALL.into_iter().filter(|f| f.kind() == FieldKind::Select).collect();
        assert_eq!(selects, vec![FormField::CameraMovement, FormField::AspectRatio]);
    }

    #[test]
    fn every_field_has_label_and_hint() {
        for field in FormField::ALL {
            assert!(!field.label().is_empty());
            assert!(!field.hint().is_empty());
        }
    }
}
