use anyhow::{anyhow, Context as _, Result};
use clap::Args;
use colored::Colorize;
use pegboard_common::visitor::{walk_node, Visitor};
use pegboard_model::{Node, NodeKind, Page};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Page document (JSON)
    pub page: PathBuf,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.page)
        .with_context(|| format!("cannot read page document {:?}", args.page))?;
    let page: Page = serde_json::from_str(&raw)
        .with_context(|| format!("malformed page document {:?}", args.page))?;

    let mut audit = StructureAudit::default();
    audit.visit_page(&page);

    for warning in &audit.warnings {
        println!("  {} {}", "⚠".yellow(), warning);
    }
    for problem in &audit.problems {
        println!("  {} {}", "✗".red(), problem);
    }

    if audit.problems.is_empty() {
        println!(
            "{} {} is structurally sound ({} nodes)",
            "✓".green(),
            args.page.display(),
            audit.node_count
        );
        Ok(())
    } else {
        Err(anyhow!(
            "{} structural problem(s) in {}",
            audit.problems.len(),
            args.page.display()
        ))
    }
}

/// Walks a page and collects everything a stored document can get wrong:
/// duplicate ids, non-field children under forms, kind tags outside the
/// closed set, and group keys naming no declared column.
#[derive(Default)]
struct StructureAudit {
    seen_ids: HashSet<String>,
    node_count: usize,
    problems: Vec<String>,
    warnings: Vec<String>,
}

impl Visitor for StructureAudit {
    fn visit_node(&mut self, node: &Node) {
        self.node_count += 1;

        if !self.seen_ids.insert(node.id.clone()) {
            self.problems.push(format!("duplicate node id `{}`", node.id));
        }

        match &node.kind {
            NodeKind::Unknown(tag) => {
                self.warnings.push(format!(
                    "node `{}` has unknown kind `{tag}` and will render as nothing",
                    node.id
                ));
            }
            NodeKind::Form => {
                for child in &node.children {
                    if !child.is_field_leaf() {
                        self.problems.push(format!(
                            "form `{}` holds non-field child `{}`",
                            node.id, child.id
                        ));
                    }
                }
            }
            NodeKind::RowGroup => {
                if let Some(columns) = node.columns {
                    for child in &node.children {
                        let Some(key) = &child.group_key else { continue };
                        let recognized = (1..=columns).any(|k| key == &format!("col-{k}"));
                        if !recognized {
                            self.warnings.push(format!(
                                "child `{}` names column `{key}` outside the declared {columns}; it renders ungrouped",
                                child.id
                            ));
                        }
                    }
                }
            }
            _ => {}
        }

        if !node.kind.is_container() && !node.children.is_empty() {
            self.problems.push(format!(
                "leaf node `{}` ({}) carries children",
                node.id, node.kind
            ));
        }

        walk_node(self, node);
    }
}
