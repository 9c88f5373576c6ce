use std::{fmt, path::Path};

use owo_colors::OwoColorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> LoadingError<'i> {
    /// Longer, coloured form for presenting to the user on the terminal.
    pub fn full_details(&self) -> String {
        let mut result = format!(
            "{}: {}: {}",
            "error".bright_red(),
            self.filename
                .to_string_lossy(),
            self.problem
                .bold()
        );
        if !self
            .details
            .is_empty()
        {
            result.push_str("\n\n");
            result.push_str(&self.details);
        }
        result
    }
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self
            .details
            .is_empty()
        {
            write!(f, "{}", self.problem)
        } else {
            write!(f, "{}: {}", self.problem, self.details)
        }
    }
}
