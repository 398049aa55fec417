//! Business profile supplied with every request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Communication tone for the business's posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Formal,
    Informal,
    Creative,
    Professional,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Formal, Tone::Informal, Tone::Creative, Tone::Professional];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Informal => "Informal",
            Tone::Creative => "Creative",
            Tone::Professional => "Professional",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = ContentError;

    /// Case-insensitive; also accepts the Spanish labels `Creativo` and `Profesional`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "informal" => Ok(Tone::Informal),
            "creative" | "creativo" => Ok(Tone::Creative),
            "professional" | "profesional" => Ok(Tone::Professional),
            other => Err(ContentError::invalid(format!(
                "tone '{other}' (expected one of Formal, Informal, Creative, Professional)"
            ))),
        }
    }
}

/// Business metadata; immutable for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub description: String,
    pub tone: Tone,
    pub goals: String,
}

impl BusinessProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        tone: Tone,
        goals: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            tone,
            goals: goals.into(),
        }
    }

    /// Fails with `InputValidationFailure` naming the first empty field.
    pub fn validate(&self) -> Result<(), ContentError> {
        let fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("goals", &self.goals),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContentError::invalid(field));
            }
        }
        Ok(())
    }
}
