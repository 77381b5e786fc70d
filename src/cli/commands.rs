use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::errors::TreeResult;
use crate::node::TreeNode;
use crate::printer::PrettyPrinter;
use crate::reader::read_conversations;

pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.input_file {
        Some(input_file) => _dump(input_file, cli.limit),
        None => Ok(()),
    }
}

#[instrument]
fn _dump(input_file: &Path, limit: usize) -> Result<()> {
    debug!("input_file: {:?}, limit: {}", input_file, limit);
    let conversations = read_conversations(input_file, limit)
        .with_context(|| format!("Cannot read conversation log: {}", input_file.display()))?;

    for (lid, conversation) in conversations.iter().enumerate() {
        println!(
            "{}",
            format!("********Conversation {}********", lid + 1).cyan().bold()
        );
        for (tid, turn) in conversation.turns.iter().enumerate() {
            println!("***Turn {}***", tid);
            println!("Utterance: {}", turn.utterance);
            if tid > 0 {
                if let Some(state) = &turn.input_dialog_state {
                    println!("Last dialog state:\n{}\n", render_tree(state)?);
                }
                if let Some(acts) = &turn.input_system_acts {
                    let das: Vec<String> = acts
                        .iter()
                        .map(|act| render_tree(&act.paths))
                        .collect::<TreeResult<_>>()?;
                    println!("Last system acts:\n{}\n", das.join("\n"));
                }
            }
            println!(
                "Target dialog state:\n{}\n",
                render_tree(&turn.target_dialog_state)?
            );
        }
        println!("********End of Conversation********");
    }
    Ok(())
}

fn render_tree(value: &Value) -> TreeResult<String> {
    let tree = TreeNode::from_value(value)?;
    Ok(PrettyPrinter::new().render(&tree))
}
