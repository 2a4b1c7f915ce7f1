use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Deserializer};

/// A single employee positioned in the organization tree.
///
/// Children are owned by their parent, so the structure is a tree by
/// construction. Ids are expected to be unique across the whole tree; the
/// expansion state is keyed by id alone.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, alias = "imageUrl")]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "directReports", deserialize_with = "null_as_empty")]
    pub children: Vec<EmployeeNode>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EmployeeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<EmployeeNode>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl EmployeeNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct OrgChart {
    pub root: EmployeeNode,
    /// Initial expansion map shipped with the data file, if any.
    pub expanded_seed: Option<HashMap<String, bool>>,
    node_count: usize,
}

impl OrgChart {
    pub fn new(root: EmployeeNode, expanded_seed: Option<HashMap<String, bool>>) -> Self {
        fn count(node: &EmployeeNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }

        Self {
            node_count: count(&root),
            root,
            expanded_seed,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Every node with its depth, in pre-order.
    pub fn preorder(&self) -> Vec<(&EmployeeNode, usize)> {
        let mut ordered = Vec::new();
        let mut stack = vec![(&self.root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            ordered.push((node, depth));
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        ordered
    }

    pub fn find(&self, id: &str) -> Option<&EmployeeNode> {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter());
        }
        None
    }

    /// The reporting line from the root down to `id`, both ends included.
    pub fn path_to(&self, id: &str) -> Option<Vec<&EmployeeNode>> {
        fn walk<'a>(node: &'a EmployeeNode, id: &str, path: &mut Vec<&'a EmployeeNode>) -> bool {
            path.push(node);
            if node.id == id {
                return true;
            }
            for child in &node.children {
                if walk(child, id, path) {
                    return true;
                }
            }
            path.pop();
            false
        }

        let mut path = Vec::new();
        walk(&self.root, id, &mut path).then_some(path)
    }

    pub fn departments(&self) -> Vec<String> {
        self.preorder()
            .into_iter()
            .map(|(node, _)| node.department.trim())
            .filter(|department| !department.is_empty())
            .map(str::to_owned)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates = BTreeSet::new();
        for (node, _) in self.preorder() {
            if !seen.insert(node.id.as_str()) {
                duplicates.insert(node.id.clone());
            }
        }
        duplicates.into_iter().collect()
    }
}
