use serde::{Deserialize, Serialize};

use crate::errors::SstvError;

/// Region label and the short code substituted into stream URLs.
/// Current as of the upstream server list.
pub const SERVERS: &[(&str, &str)] = &[
    ("EU Random", "deu"),
    ("EU DE-Frankfurt", "deu.de1"),
    ("EU NL-EVO", "deu.nl2"),
    ("EU NL-i3d", "deu.nl1"),
    ("EU UK-London", "deu.uk"),
    ("US Random", "dna"),
    ("US East", "dnae"),
    ("US West", "dnaw"),
    ("US East-NJ", "dnae1"),
    ("US East-VA", "dnae2"),
    ("US East-CAN", "dnae3"),
    ("US East-CAN2", "dnae4"),
    ("Asia", "dsg"),
];

/// Exact-equality lookup of a code against the known region set.
pub fn label_for(code: &str) -> Option<&'static str> {
    SERVERS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(label, _)| *label)
}

/// What to do when the typed server code is not in the known set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub enum ServerPolicy {
    /// Build the playlist anyway and warn that it may not work
    #[default]
    WarnAndContinue,
    /// Refuse to build with an unrecognized code
    Reject,
}

/// Outcome of validating a server code. An unrecognized code survives
/// under `WarnAndContinue` with `recognized == false`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSelection {
    pub code: String,
    pub recognized: bool,
}

impl ServerSelection {
    pub fn label(&self) -> Option<&'static str> {
        label_for(&self.code)
    }
}

/// Validate a server code against the region set. Single attempt, no retry.
pub fn select(code: &str, policy: ServerPolicy) -> Result<ServerSelection, SstvError> {
    let recognized = label_for(code).is_some();
    if !recognized && policy == ServerPolicy::Reject {
        return Err(SstvError::UnknownServer(code.to_string()));
    }
    Ok(ServerSelection {
        code: code.to_string(),
        recognized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_accepted() {
        let sel = select("dnaw", ServerPolicy::WarnAndContinue).unwrap();
        assert!(sel.recognized);
        assert_eq!(sel.label(), Some("US West"));
    }

    #[test]
    fn test_prefix_of_longer_code_is_not_a_match() {
        // "deu.nl" is a prefix of "deu.nl1" and "deu.nl2" but no code itself
        assert_eq!(label_for("deu.nl"), None);
        let sel = select("deu.nl", ServerPolicy::WarnAndContinue).unwrap();
        assert!(!sel.recognized);
    }

    #[test]
    fn test_overlapping_codes_are_distinct() {
        // "dna" and "dnaw" are both real codes; equality must not confuse them
        assert_eq!(label_for("dna"), Some("US Random"));
        assert_eq!(label_for("dnaw"), Some("US West"));
    }

    #[test]
    fn test_reject_policy_fails_on_unknown() {
        let err = select("bogus", ServerPolicy::Reject).unwrap_err();
        assert!(matches!(err, SstvError::UnknownServer(_)));
    }

    #[test]
    fn test_warn_policy_keeps_typed_code() {
        let sel = select("bogus", ServerPolicy::WarnAndContinue).unwrap();
        assert_eq!(sel.code, "bogus");
        assert!(!sel.recognized);
        assert_eq!(sel.label(), None);
    }
}
