use log::Level;
use serde::{Deserialize, Serialize};

/// Severity of a compiler message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Severity {
    Exception,
    Error,
    StrongWarning,
    Warning,
    Info,
    Logging,
    Output,
    /// A severity name this build does not know about.
    /// Messages with this severity are reported as warnings.
    Unknown,
}

impl Severity {
    /// Severities that are only interesting when debugging the compiler.
    pub const VERBOSE: &'static [Severity] = &[Severity::Logging, Severity::Output];

    /// Severities that make the compilation fail.
    pub const ERRORS: &'static [Severity] = &[Severity::Exception, Severity::Error];

    pub fn from_name(name: &str) -> Self {
        match name {
            "exception" => Self::Exception,
            "error" => Self::Error,
            "strong_warning" => Self::StrongWarning,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "logging" => Self::Logging,
            "output" => Self::Output,
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exception => "exception",
            Self::Error => "error",
            Self::StrongWarning => "strong_warning",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Logging => "logging",
            Self::Output => "output",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_verbose(&self) -> bool {
        Self::VERBOSE.contains(self)
    }

    pub fn is_error(&self) -> bool {
        Self::ERRORS.contains(self)
    }

    /// Log level a message of this severity is written at.
    ///
    /// Group checks run in order and the first match wins. Anything that is
    /// neither verbose, an error nor plain info ends up as a warning,
    /// including [`Severity::Unknown`].
    pub fn level(&self) -> Level {
        if self.is_verbose() {
            Level::Debug
        } else if self.is_error() {
            Level::Error
        } else if *self == Self::Info {
            Level::Info
        } else {
            Level::Warn
        }
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Severity] = &[
        Severity::Exception,
        Severity::Error,
        Severity::StrongWarning,
        Severity::Warning,
        Severity::Info,
        Severity::Logging,
        Severity::Output,
        Severity::Unknown,
    ];

    #[test]
    fn level_per_severity() {
        assert_eq!(Severity::Exception.level(), Level::Error);
        assert_eq!(Severity::Error.level(), Level::Error);
        assert_eq!(Severity::StrongWarning.level(), Level::Warn);
        assert_eq!(Severity::Warning.level(), Level::Warn);
        assert_eq!(Severity::Info.level(), Level::Info);
        assert_eq!(Severity::Logging.level(), Level::Debug);
        assert_eq!(Severity::Output.level(), Level::Debug);
        assert_eq!(Severity::Unknown.level(), Level::Warn);
    }

    #[test]
    fn groups_are_disjoint() {
        for severity in ALL {
            assert!(!(severity.is_verbose() && severity.is_error()), "{}", severity);
        }
    }

    #[test]
    fn names() {
        for severity in ALL {
            assert_eq!(Severity::from_name(severity.name()), *severity);
        }
        assert_eq!(Severity::from_name("fatal"), Severity::Unknown);
        assert_eq!(Severity::from_name("ERROR"), Severity::Unknown);
    }

    #[test]
    fn deserialize_unrecognized_name() {
        let severity: Severity = serde_json::from_str("\"strong_warning\"").unwrap();
        assert_eq!(severity, Severity::StrongWarning);

        let severity: Severity = serde_json::from_str("\"panic\"").unwrap();
        assert_eq!(severity, Severity::Unknown);
        assert_eq!(severity.level(), Level::Warn);
    }

    #[test]
    fn serialize_name() {
        assert_eq!(
            serde_json::to_string(&Severity::StrongWarning).unwrap(),
            "\"strong_warning\""
        );
    }
}
