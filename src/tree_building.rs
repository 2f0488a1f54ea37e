//! Rebuild a tree from flat parent-pointer records, validating the
//! invariants a well-formed record set must satisfy.
//!
//! Records must form a contiguous id range starting at 0, the root (id 0)
//! must be its own parent conceptually (parent absent, encoded here as
//! `parent_id == 0`), and every other record's parent id must be smaller
//! than its own id.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub parent_id: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub id: u32,
    pub children: Vec<Node>,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("record ids must be contiguous from zero")]
    NonContinuous,
    #[error("record {0} has parent {1}, which cannot precede it")]
    InvalidParent(u32, u32),
    #[error("no records to build from")]
    Empty,
}

pub fn build_tree(records: &[Record]) -> Result<Node, TreeError> {
    if records.is_empty() {
        return Err(TreeError::Empty);
    }

    let mut sorted: Vec<Record> = records.to_vec();
    sorted.sort_by_key(|r| r.id);

    for (expected, record) in sorted.iter().enumerate() {
        if record.id != expected as u32 {
            return Err(TreeError::NonContinuous);
        }
        let root = record.id == 0;
        if (root && record.parent_id != 0) || (!root && record.parent_id >= record.id) {
            return Err(TreeError::InvalidParent(record.id, record.parent_id));
        }
    }

    // children ids grouped by parent; ids ascend, so children stay sorted
    let mut children_of: Vec<Vec<u32>> = vec![Vec::new(); sorted.len()];
    for record in sorted.iter().skip(1) {
        children_of[record.parent_id as usize].push(record.id);
    }

    Ok(assemble(0, &children_of))
}

fn assemble(id: u32, children_of: &[Vec<u32>]) -> Node {
    Node {
        id,
        children: children_of[id as usize]
            .iter()
            .map(|&child| assemble(child, children_of))
            .collect(),
    }
}
