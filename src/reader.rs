//! Line-delimited JSON conversation logs.
//!
//! Each log line is one conversation: a sequence of turns carrying the
//! user utterance plus dialog-state and system-act trees in the nested
//! `{"name", "children"}` form that [`crate::node::TreeNode::from_value`]
//! consumes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::TreeResult;

#[derive(Debug, Deserialize)]
pub struct Conversation {
    pub turns: Vec<Turn>,
}

#[derive(Debug, Deserialize)]
pub struct Turn {
    pub utterance: String,
    /// Dialog state going into this turn. Absent on the first turn.
    #[serde(default)]
    pub input_dialog_state: Option<Value>,
    /// System acts preceding this turn. Absent on the first turn.
    #[serde(default)]
    pub input_system_acts: Option<Vec<SystemAct>>,
    pub target_dialog_state: Value,
}

#[derive(Debug, Deserialize)]
pub struct SystemAct {
    pub paths: Value,
}

/// Reads at most `limit` conversations from a line-delimited JSON log.
#[instrument(level = "debug")]
pub fn read_conversations(input_file: &Path, limit: usize) -> TreeResult<Vec<Conversation>> {
    let file = File::open(input_file)?;
    let reader = BufReader::new(file);

    let mut conversations = Vec::new();
    for line in reader.lines().take(limit) {
        let line = line?;
        conversations.push(serde_json::from_str(&line)?);
    }
    debug!("Read {} conversations", conversations.len());
    Ok(conversations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_without_input_state_parses() {
        let turn: Turn = serde_json::from_str(
            r#"{"utterance": "hi", "target_dialog_state": {"name": "root", "children": []}}"#,
        )
        .unwrap();
        assert!(turn.input_dialog_state.is_none());
        assert!(turn.input_system_acts.is_none());
        assert_eq!(turn.utterance, "hi");
    }
}
