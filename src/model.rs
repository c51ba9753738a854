mod config;
mod exercise;

pub use self::config::{ClientState, DEFAULT_API_BASE_URL, DEFAULT_TOOL_PROGRAM, Settings};
pub use self::exercise::{Difficulty, ExerciseInfo, ExerciseManifest, ExerciseMetadata};
