//! Serializable stack commands and JSON command scripts.

use std::path::Path;

use scrollstack_common::{CommandError, EdgeInsets, PanelId};
use serde::{Deserialize, Serialize};

use crate::location::{InsertionLocation, Placement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StackCommand {
    Add {
        panel: PanelId,
        #[serde(default)]
        insets: Option<EdgeInsets>,
    },
    Insert {
        panel: PanelId,
        #[serde(default)]
        insets: Option<EdgeInsets>,
        #[serde(default)]
        location: InsertionLocation,
    },
    Remove {
        panel: PanelId,
        #[serde(default)]
        animated: bool,
    },
    Show {
        panel: PanelId,
        /// Where to insert the panel if it is not in the stack yet.
        #[serde(default)]
        placement: Option<Placement>,
        #[serde(default)]
        animated: bool,
    },
    Hide {
        panel: PanelId,
        #[serde(default)]
        animated: bool,
    },
    ScrollTo {
        panel: PanelId,
    },
}

impl StackCommand {
    /// The panel the command acts on.
    pub fn panel(&self) -> PanelId {
        match *self {
            StackCommand::Add { panel, .. }
            | StackCommand::Insert { panel, .. }
            | StackCommand::Remove { panel, .. }
            | StackCommand::Show { panel, .. }
            | StackCommand::Hide { panel, .. }
            | StackCommand::ScrollTo { panel } => panel,
        }
    }
}

/// Parse a JSON array of commands.
pub fn parse_script(json: &str) -> Result<Vec<StackCommand>, CommandError> {
    serde_json::from_str(json).map_err(|e| CommandError::MalformedScript(e.to_string()))
}

/// Read and parse a JSON command script from disk.
pub fn load_script(path: &Path) -> Result<Vec<StackCommand>, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_minimal_commands() {
        let script = r#"[
            {"op": "add", "panel": 1},
            {"op": "insert", "panel": 2, "location": "start"},
            {"op": "hide", "panel": 1, "animated": true},
            {"op": "scroll_to", "panel": 2}
        ]"#;
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                StackCommand::Add {
                    panel: PanelId(1),
                    insets: None,
                },
                StackCommand::Insert {
                    panel: PanelId(2),
                    insets: None,
                    location: InsertionLocation::Start,
                },
                StackCommand::Hide {
                    panel: PanelId(1),
                    animated: true,
                },
                StackCommand::ScrollTo { panel: PanelId(2) },
            ]
        );
    }

    #[test]
    fn parse_show_with_placement_and_partial_insets() {
        let script = r#"[{
            "op": "show",
            "panel": 3,
            "placement": {"location": {"before": 2}, "insets": {"top": 8.0}}
        }]"#;
        let commands = parse_script(script).unwrap();
        let StackCommand::Show {
            panel,
            placement: Some(placement),
            animated,
        } = commands[0]
        else {
            panic!("expected show with placement, got {:?}", commands[0]);
        };
        assert_eq!(panel, PanelId(3));
        assert!(!animated);
        assert_eq!(placement.location, InsertionLocation::Before(PanelId(2)));
        assert_eq!(placement.insets, Some(EdgeInsets::new(8.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn unknown_op_is_malformed() {
        let result = parse_script(r#"[{"op": "explode", "panel": 1}]"#);
        assert!(matches!(result, Err(CommandError::MalformedScript(_))));
    }

    #[test]
    fn non_array_is_malformed() {
        assert!(parse_script(r#"{"op": "add", "panel": 1}"#).is_err());
    }

    #[test]
    fn load_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"op": "remove", "panel": 4}}]"#).unwrap();
        let commands = load_script(file.path()).unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].panel(), PanelId(4));
    }

    #[test]
    fn load_missing_script_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match load_script(&path) {
            Err(CommandError::ReadScript { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
