//! REPL command parsing

use naturemind_domain::IndicatorKind;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Submit the line as a query (may be empty)
    Submit(String),
    /// Set one indicator or the confidence
    Set(IndicatorKind, f64),
    /// Render the full dashboard
    Show,
    /// Show the submission status
    Status,
    /// List the candidate sites
    Sites,
    Help,
    Quit,
    /// Unrecognized or malformed command, with an explanation
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return ReplCommand::Submit(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match (name, args.as_slice()) {
            ("quit" | "exit" | "q", []) => ReplCommand::Quit,
            ("help" | "h" | "?", []) => ReplCommand::Help,
            ("show", []) => ReplCommand::Show,
            ("status", []) => ReplCommand::Status,
            ("sites", []) => ReplCommand::Sites,
            ("set", [indicator, value]) => Self::parse_set(indicator, value),
            ("set", _) => ReplCommand::Invalid("Usage: /set <indicator> <value>".to_string()),
            (indicator, [value]) if indicator.parse::<IndicatorKind>().is_ok() => {
                Self::parse_set(indicator, value)
            }
            _ => ReplCommand::Invalid(format!("Unknown command: /{}", rest)),
        }
    }

    fn parse_set(indicator: &str, value: &str) -> Self {
        let kind = match indicator.parse::<IndicatorKind>() {
            Ok(kind) => kind,
            Err(e) => return ReplCommand::Invalid(e),
        };
        match value.parse::<f64>() {
            Ok(v) if v.is_finite() => ReplCommand::Set(kind, v),
            _ => ReplCommand::Invalid(format!("Not a number: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_submitted_verbatim() {
        assert_eq!(
            ReplCommand::parse("Analyze flood resilience"),
            ReplCommand::Submit("Analyze flood resilience".to_string())
        );
        assert_eq!(
            ReplCommand::parse("   "),
            ReplCommand::Submit("   ".to_string())
        );
    }

    #[test]
    fn test_set_forms() {
        assert_eq!(
            ReplCommand::parse("/set ndvi 0.7"),
            ReplCommand::Set(IndicatorKind::VegetationIndex, 0.7)
        );
        assert_eq!(
            ReplCommand::parse("/flood 0.25"),
            ReplCommand::Set(IndicatorKind::FloodRisk, 0.25)
        );
        assert_eq!(
            ReplCommand::parse("/confidence 0.6"),
            ReplCommand::Set(IndicatorKind::Confidence, 0.6)
        );
    }

    #[test]
    fn test_set_errors() {
        assert!(matches!(
            ReplCommand::parse("/set ndvi"),
            ReplCommand::Invalid(_)
        ));
        assert!(matches!(
            ReplCommand::parse("/set rain 0.2"),
            ReplCommand::Invalid(_)
        ));
        assert!(matches!(
            ReplCommand::parse("/ndvi high"),
            ReplCommand::Invalid(_)
        ));
        assert!(matches!(
            ReplCommand::parse("/ndvi NaN"),
            ReplCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse(" /show "), ReplCommand::Show);
        assert_eq!(ReplCommand::parse("/status"), ReplCommand::Status);
        assert_eq!(ReplCommand::parse("/sites"), ReplCommand::Sites);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/map"),
            ReplCommand::Invalid("Unknown command: /map".to_string())
        );
    }
}
