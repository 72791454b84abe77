//! Folder tree service — builds the owner's folder forest.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use uuid::Uuid;

use newsdesk_core::result::AppResult;
use newsdesk_database::repositories::FolderRepository;
use newsdesk_entity::folder::model::Folder;
use newsdesk_entity::folder::tree::FolderNode;

use crate::context::RequestContext;

/// Service assembling the caller's folders into a forest.
pub struct TreeService {
    folder_repo: Arc<FolderRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Build the caller's folder forest, oldest siblings first.
    pub async fn tree(&self, ctx: &RequestContext) -> AppResult<Vec<FolderNode>> {
        let folders = self.folder_repo.list_by_owner(ctx.user_id).await?;
        Ok(build_forest(folders))
    }
}

/// Assemble a flat folder list into a forest.
///
/// `parent_id` is a weak reference: a parent that is missing from the
/// list (deleted, or belonging to another owner) demotes the child to a
/// root instead of dropping it. A parent chain that loops back to the
/// folder itself is broken the same way, so the forest always contains
/// every input folder exactly once.
pub fn build_forest(folders: Vec<Folder>) -> Vec<FolderNode> {
    let ids: HashSet<Uuid> = folders.iter().map(|f| f.id).collect();
    let parents: HashMap<Uuid, Option<Uuid>> =
        folders.iter().map(|f| (f.id, f.parent_id)).collect();

    // Input order (created_at ASC) determines sibling order.
    let mut roots: Vec<Folder> = Vec::new();
    let mut children: HashMap<Uuid, Vec<Folder>> = HashMap::new();
    for folder in folders {
        match effective_parent(&folder, &ids, &parents) {
            Some(parent_id) => children.entry(parent_id).or_default().push(folder),
            None => roots.push(folder),
        }
    }

    roots
        .into_iter()
        .map(|folder| attach_children(folder, &mut children))
        .collect()
}

/// The parent to link under, or `None` when the folder is a root, its
/// parent dangles, or linking would put the folder inside its own
/// subtree.
fn effective_parent(
    folder: &Folder,
    ids: &HashSet<Uuid>,
    parents: &HashMap<Uuid, Option<Uuid>>,
) -> Option<Uuid> {
    let parent_id = folder.parent_id?;
    if parent_id == folder.id || !ids.contains(&parent_id) {
        return None;
    }

    // Walk the chain above the parent. Only a loop that comes back to
    // this folder makes the link unsafe; a cycle entirely above it is
    // broken at its own members, so linking here stays sound.
    let mut visited = HashSet::from([folder.id, parent_id]);
    let mut current = parent_id;
    loop {
        match parents.get(&current).copied().flatten() {
            Some(next) if ids.contains(&next) => {
                if next == folder.id {
                    return None;
                }
                if !visited.insert(next) {
                    return Some(parent_id);
                }
                current = next;
            }
            _ => return Some(parent_id),
        }
    }
}

fn attach_children(folder: Folder, children: &mut HashMap<Uuid, Vec<Folder>>) -> FolderNode {
    let mut node = FolderNode::from(folder);
    if let Some(own) = children.remove(&node.id) {
        node.children = own
            .into_iter()
            .map(|child| attach_children(child, children))
            .collect();
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn folder(id: Uuid, name: &str, parent_id: Option<Uuid>) -> Folder {
        Folder {
            id,
            owner_id: Uuid::nil(),
            name: name.to_string(),
            color: None,
            starred: false,
            parent_id,
            article_ids: Vec::new(),
            thread_ids: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn count_nodes(nodes: &[FolderNode]) -> usize {
        nodes
            .iter()
            .map(|n| 1 + count_nodes(&n.children))
            .sum()
    }

    #[test]
    fn test_nested_forest() {
        let root = Uuid::new_v4();
        let child = Uuid::new_v4();
        let grandchild = Uuid::new_v4();
        let other = Uuid::new_v4();

        let forest = build_forest(vec![
            folder(root, "news", None),
            folder(child, "tech", Some(root)),
            folder(grandchild, "rust", Some(child)),
            folder(other, "sports", None),
        ]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].name, "news");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].name, "tech");
        assert_eq!(forest[0].children[0].children[0].name, "rust");
        assert_eq!(forest[1].name, "sports");
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let child = Uuid::new_v4();
        let forest = build_forest(vec![folder(child, "orphan", Some(Uuid::new_v4()))]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, child);
        // The stored reference is preserved even though the link is broken.
        assert!(forest[0].parent_id.is_some());
    }

    #[test]
    fn test_deleted_parent_promotes_whole_subtree() {
        // Parent was deleted; its children still reference it.
        let gone = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let leaf = Uuid::new_v4();

        let forest = build_forest(vec![
            folder(a, "a", Some(gone)),
            folder(b, "b", Some(gone)),
            folder(leaf, "leaf", Some(a)),
        ]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].id, a);
        assert_eq!(forest[0].children[0].id, leaf);
        assert_eq!(forest[1].id, b);
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let id = Uuid::new_v4();
        let forest = build_forest(vec![folder(id, "loop", Some(id))]);

        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_parent_cycle_is_broken() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let forest = build_forest(vec![
            folder(a, "a", Some(b)),
            folder(b, "b", Some(a)),
        ]);

        // Both demoted to roots; every folder still present exactly once.
        assert_eq!(forest.len(), 2);
        assert_eq!(count_nodes(&forest), 2);
    }

    #[test]
    fn test_cycle_above_does_not_demote_descendant() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let forest = build_forest(vec![
            folder(a, "a", Some(b)),
            folder(b, "b", Some(c)),
            folder(c, "c", Some(b)),
        ]);

        // b and c form the cycle and get demoted; a keeps its parent.
        assert_eq!(forest.len(), 2);
        assert_eq!(count_nodes(&forest), 3);
        let root_b = forest.iter().find(|n| n.id == b).expect("b is a root");
        assert_eq!(root_b.children.len(), 1);
        assert_eq!(root_b.children[0].id, a);
    }

    #[test]
    fn test_every_folder_appears_exactly_once() {
        let root = Uuid::new_v4();
        let mut input = vec![folder(root, "root", None)];
        for i in 0..10 {
            input.push(folder(Uuid::new_v4(), &format!("child-{i}"), Some(root)));
        }

        let forest = build_forest(input);
        assert_eq!(count_nodes(&forest), 11);
    }

    #[test]
    fn test_sibling_order_follows_input() {
        let root = Uuid::new_v4();
        let forest = build_forest(vec![
            folder(root, "root", None),
            folder(Uuid::new_v4(), "first", Some(root)),
            folder(Uuid::new_v4(), "second", Some(root)),
            folder(Uuid::new_v4(), "third", Some(root)),
        ]);

        let names: Vec<&str> = forest[0]
            .children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
