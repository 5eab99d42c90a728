//! Tree Builder
//!
//! Turns the flat group list into a forest by matching parent references.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::TreeDiagnostic;
use crate::record::GroupRecord;

/// A group together with its child groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    pub record: GroupRecord,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(record: GroupRecord) -> Self {
        Self {
            record,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Number of nodes in a forest
pub fn node_count(roots: &[TreeNode]) -> usize {
    roots.iter().map(|root| 1 + root.descendant_count()).sum()
}

/// Result of building a forest, with whatever was wrong in the input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    pub roots: Vec<TreeNode>,
    pub diagnostics: Vec<TreeDiagnostic>,
}

/// Build the forest and log anything suspicious about the input
///
/// See [`build_forest`] for the rules.
pub fn build_tree(records: &[GroupRecord]) -> Vec<TreeNode> {
    let forest = build_forest(records);
    for diagnostic in &forest.diagnostics {
        match diagnostic {
            TreeDiagnostic::Orphan { .. } => log::debug!("[GROUP-TREE] {}", diagnostic),
            _ => log::warn!("[GROUP-TREE] {}", diagnostic),
        }
    }
    forest.roots
}

const UNSEEN: u8 = 0;
const ON_PATH: u8 = 1;
const DONE: u8 = 2;

/// Build a forest from a flat record list
///
/// - Every record yields exactly one node.
/// - A record whose parent id resolves to another record becomes that
///   record's child; otherwise it is a root.
/// - Roots and children keep the relative order of the input.
/// - A parent chain that loops back is cut at the loop member that comes
///   first in the input; that member becomes a root so nothing is lost.
pub fn build_forest(records: &[GroupRecord]) -> Forest {
    let n = records.len();
    let mut diagnostics = Vec::new();

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(n);
    for (i, record) in records.iter().enumerate() {
        if index.contains_key(record.id.as_str()) {
            diagnostics.push(TreeDiagnostic::DuplicateId {
                id: record.id.clone(),
            });
        } else {
            index.insert(record.id.as_str(), i);
        }
    }

    let mut parent: Vec<Option<usize>> = Vec::with_capacity(n);
    for record in records {
        let resolved = match record.parent_id() {
            None => None,
            Some(parent_id) => match index.get(parent_id) {
                Some(&p) => Some(p),
                None => {
                    diagnostics.push(TreeDiagnostic::Orphan {
                        id: record.id.clone(),
                        missing_parent: parent_id.to_string(),
                    });
                    None
                }
            },
        };
        parent.push(resolved);
    }

    break_cycles(records, &mut parent, &mut diagnostics);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut root_indices = Vec::new();
    for (i, p) in parent.iter().enumerate() {
        match p {
            Some(p) => children[*p].push(i),
            None => root_indices.push(i),
        }
    }

    fn assemble(i: usize, records: &[GroupRecord], children: &[Vec<usize>]) -> TreeNode {
        TreeNode {
            record: records[i].clone(),
            children: children[i]
                .iter()
                .map(|&c| assemble(c, records, children))
                .collect(),
        }
    }

    let roots = root_indices
        .into_iter()
        .map(|i| assemble(i, records, &children))
        .collect();

    Forest { roots, diagnostics }
}

/// Follow parent edges from every record, marking the current path.
/// Re-entering a node on the path means a loop.
fn break_cycles(
    records: &[GroupRecord],
    parent: &mut [Option<usize>],
    diagnostics: &mut Vec<TreeDiagnostic>,
) {
    let mut state = vec![UNSEEN; records.len()];

    for start in 0..records.len() {
        if state[start] != UNSEEN {
            continue;
        }

        let mut path: Vec<usize> = Vec::new();
        let mut cursor = Some(start);
        while let Some(node) = cursor {
            match state[node] {
                DONE => break,
                ON_PATH => {
                    let begin = path.iter().position(|&p| p == node).unwrap_or(0);
                    let cycle = &path[begin..];
                    if let Some(cut_pos) = cycle
                        .iter()
                        .enumerate()
                        .min_by_key(|&(_, idx)| *idx)
                        .map(|(pos, _)| pos)
                    {
                        let cut = cycle[cut_pos];
                        parent[cut] = None;
                        let ids = cycle[cut_pos..]
                            .iter()
                            .chain(&cycle[..cut_pos])
                            .map(|&idx| records[idx].id.clone())
                            .collect();
                        diagnostics.push(TreeDiagnostic::Cycle { ids });
                    }
                    break;
                }
                _ => {
                    state[node] = ON_PATH;
                    path.push(node);
                    cursor = parent[node];
                }
            }
        }

        for node in path {
            state[node] = DONE;
        }
    }
}
