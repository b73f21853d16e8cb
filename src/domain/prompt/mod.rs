//! Prompt assembly: label sets and the segment renderer.

mod assembler;
mod labels;

pub use assembler::{GeneratedPrompts, Segment, assemble, flag_line, render};
pub use labels::{
    DIALOGUE_POLICY_LOCALIZED, DIALOGUE_POLICY_STRUCTURED, PromptStyle, VOICE_POLICY_LOCALIZED,
    VOICE_POLICY_STRUCTURED,
};
