//! Form state and its reducer-style transitions.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    ASPECT_RATIOS, CAMERA_MOVEMENTS, DEFAULT_ASPECT_RATIO, find_aspect_ratio, find_camera_movement,
};
use crate::domain::{AppError, FormField};

/// Current value of every form field.
///
/// Every field is a plain string. Free-text fields start empty, the camera
/// movement starts on the empty "no movement" choice and the aspect ratio on
/// [`DEFAULT_ASPECT_RATIO`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormState {
    pub scene_title: String,
    pub character_core_description: String,
    pub character_voice_details: String,
    pub character_action: String,
    pub character_expression: String,
    pub scene_location_time: String,
    pub additional_visual_details: String,
    pub camera_movement: String,
    pub overall_atmosphere: String,
    pub environmental_sounds: String,
    pub character_dialog: String,
    pub aspect_ratio: String,
    pub negative_prompt: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            scene_title: String::new(),
            character_core_description: String::new(),
            character_voice_details: String::new(),
            character_action: String::new(),
            character_expression: String::new(),
            scene_location_time: String::new(),
            additional_visual_details: String::new(),
            camera_movement: String::new(),
            overall_atmosphere: String::new(),
            environmental_sounds: String::new(),
            character_dialog: String::new(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            negative_prompt: String::new(),
        }
    }
}

impl FormState {
    /// Current value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SceneTitle => &self.scene_title,
            FormField::CharacterCoreDescription => &self.character_core_description,
            FormField::CharacterVoiceDetails => &self.character_voice_details,
            FormField::CharacterAction => &self.character_action,
            FormField::CharacterExpression => &self.character_expression,
            FormField::SceneLocationTime => &self.scene_location_time,
            FormField::AdditionalVisualDetails => &self.additional_visual_details,
            FormField::CameraMovement => &self.camera_movement,
            FormField::OverallAtmosphere => &self.overall_atmosphere,
            FormField::EnvironmentalSounds => &self.environmental_sounds,
            FormField::CharacterDialog => &self.character_dialog,
            FormField::AspectRatio => &self.aspect_ratio,
            FormField::NegativePrompt => &self.negative_prompt,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::SceneTitle => &mut self.scene_title,
            FormField::CharacterCoreDescription => &mut self.character_core_description,
            FormField::CharacterVoiceDetails => &mut self.character_voice_details,
            FormField::CharacterAction => &mut self.character_action,
            FormField::CharacterExpression => &mut self.character_expression,
            FormField::SceneLocationTime => &mut self.scene_location_time,
            FormField::AdditionalVisualDetails => &mut self.additional_visual_details,
            FormField::CameraMovement => &mut self.camera_movement,
            FormField::OverallAtmosphere => &mut self.overall_atmosphere,
            FormField::EnvironmentalSounds => &mut self.environmental_sounds,
            FormField::CharacterDialog => &mut self.character_dialog,
            FormField::AspectRatio => &mut self.aspect_ratio,
            FormField::NegativePrompt => &mut self.negative_prompt,
        }
    }

    /// Return a new state with one field replaced. Last write wins.
    pub fn with_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = value.into();
        self
    }

    /// Replace one field in place.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Check that the select fields hold values from their catalogs.
    pub fn validate_options(&self) -> Result<(), AppError> {
        validate_option(FormField::CameraMovement, &self.camera_movement)?;
        validate_option(FormField::AspectRatio, &self.aspect_ratio)
    }
}

/// Check a value for a select field against its catalog. Free-text fields accept anything.
pub fn validate_option(field: FormField, value: &str) -> Result<(), AppError> {
    let known = match field {
        FormField::CameraMovement => find_camera_movement(value).is_some(),
        FormField::AspectRatio => find_aspect_ratio(value).is_some(),
        _ => return Ok(()),
    };
    if known {
        return Ok(());
    }

    let available: Vec<&str> = match field {
        FormField::CameraMovement => {
            CAMERA_MOVEMENTS.iter().map(|o| o.value).filter(|v| !v.is_empty()).collect()
        }
        _ => ASPECT_RATIOS.iter().map(|o| o.value).collect(),
    };
    Err(AppError::InvalidOption {
        field: field.key().to_string(),
        value: value.to_string(),
        available: available.join(", "),
    })
}
