//! `appguard rules`: describe the validation rules.

use serde::Serialize;

use appguard_core::domain::{RULE_REGISTRY, RuleDef, RuleKind};
use appguard_core::error::AppGuardError;

use crate::{cli::RulesArgs, error::CliResult, output::OutputManager};

/// One rule as shown to the user.
#[derive(Debug, Serialize)]
struct RuleRow {
    name: &'static str,
    stop_on_first: bool,
    policy: &'static str,
    description: &'static str,
}

impl From<&RuleDef> for RuleRow {
    fn from(def: &RuleDef) -> Self {
        Self {
            name: def.kind.as_str(),
            stop_on_first: def.stop_on_first,
            policy: def.policy(),
            description: def.description,
        }
    }
}

pub fn execute(args: RulesArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<RuleRow> = match args.name {
        Some(name) => {
            let kind: RuleKind = name.parse().map_err(AppGuardError::from)?;
            RULE_REGISTRY
                .iter()
                .filter(|def| def.kind == kind)
                .map(RuleRow::from)
                .collect()
        }
        None => RULE_REGISTRY.iter().map(RuleRow::from).collect(),
    };

    if output.is_json() {
        output.json(&rows)?;
        return Ok(());
    }

    output.header("Rules (evaluation order):")?;
    for row in &rows {
        output.print(&format!("  {:<20} {}", row.name, row.description))?;
        output.print(&format!("  {:<20} reports {}", "", row.policy))?;
    }

    Ok(())
}
