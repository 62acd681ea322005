// tree.rs
// ──────────────────────────────────────────────────────────────────────────────
// The mountain: a height-balanced (AVL) binary search tree of waypoints keyed
// by label. Each node exclusively owns its children; there are no parent
// links. Insertion is recursive and rebalances on the way back up, so every
// rotation hands the new subtree root back to its caller and the top-level
// `insert` stores whatever comes out as the new root.
//
// Heights follow the usual convention: a leaf has height 0 and an absent
// child contributes nothing. The balance factor of a node is
// `effective(right) - effective(left)` with `effective = height + 1` for a
// present child and `0` for an absent one.
// ──────────────────────────────────────────────────────────────────────────────
use std::cmp::Ordering;
use std::io::Write;

use super::waypoint::Waypoint;

/// A single rest stop in the mountain together with its owned subtrees.
#[derive(Clone, Debug)]
pub struct MountainNode {
    waypoint: Waypoint,
    left: Option<Box<MountainNode>>,
    right: Option<Box<MountainNode>>,
    height: i32,
}

impl MountainNode {
    fn leaf(waypoint: Waypoint) -> Self {
        Self {
            waypoint,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub fn waypoint(&self) -> &Waypoint {
        &self.waypoint
    }

    pub fn label(&self) -> &str {
        self.waypoint.label()
    }

    pub fn left(&self) -> Option<&MountainNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&MountainNode> {
        self.right.as_deref()
    }

    /// Stored height of this node. Leaves are 0.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `height(right) - height(left)` in effective heights.
    pub fn balance_factor(&self) -> i32 {
        effective_height(self.right()) - effective_height(self.left())
    }

    fn update_height(&mut self) {
        self.height = effective_height(self.left()).max(effective_height(self.right()));
    }
}

/// Height of an optional node: the stored field, or `0` if absent.
pub fn height_of(node: Option<&MountainNode>) -> i32 {
    node.map_or(0, MountainNode::height)
}

// Number of levels the subtree occupies: `height + 1`, or `0` if absent.
fn effective_height(node: Option<&MountainNode>) -> i32 {
    node.map_or(0, |n| n.height + 1)
}

/// Self-balancing binary search tree of waypoints.
#[derive(Clone, Debug, Default)]
pub struct Mountain {
    root: Option<Box<MountainNode>>,
    len: usize,
}

impl Mountain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root node, or `None` for an empty mountain.
    pub fn get_root(&self) -> Option<&MountainNode> {
        self.root.as_deref()
    }

    /// Height of the root node, `0` when the mountain is empty.
    pub fn height(&self) -> i32 {
        height_of(self.get_root())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a waypoint, rebalancing as needed.
    ///
    /// Returns `false` and leaves the mountain untouched if a waypoint with the
    /// same label is already present.
    pub fn insert(&mut self, waypoint: Waypoint) -> bool {
        let key = waypoint.label().to_owned();
        let (root, inserted) = Self::insert_at(self.root.take(), waypoint, &key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(
        node: Option<Box<MountainNode>>,
        waypoint: Waypoint,
        key: &str,
    ) -> (Box<MountainNode>, bool) {
        let Some(mut node) = node else {
            return (Box::new(MountainNode::leaf(waypoint)), true);
        };

        let inserted = match key.cmp(node.label()) {
            Ordering::Less => {
                let (child, inserted) = Self::insert_at(node.left.take(), waypoint, key);
                node.left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = Self::insert_at(node.right.take(), waypoint, key);
                node.right = Some(child);
                inserted
            }
            // Duplicate labels keep the existing stop.
            Ordering::Equal => return (node, false),
        };

        node.update_height();
        (Self::rebalance(node, key), inserted)
    }

    // Picks the rotation case by comparing the inserted key with the child on
    // the heavy side.
    fn rebalance(node: Box<MountainNode>, key: &str) -> Box<MountainNode> {
        let balance = node.balance_factor();

        if balance < -1 {
            let left_label = node.left().map(MountainNode::label);
            match left_label.map(|label| key.cmp(label)) {
                Some(Ordering::Less) => return rotate_right(node),
                Some(Ordering::Greater) => return rotate_left_right(node),
                _ => {}
            }
        } else if balance > 1 {
            let right_label = node.right().map(MountainNode::label);
            match right_label.map(|label| key.cmp(label)) {
                Some(Ordering::Greater) => return rotate_left(node),
                Some(Ordering::Less) => return rotate_right_left(node),
                _ => {}
            }
        }
        node
    }

    /// Looks up a waypoint by label.
    pub fn get(&self, label: &str) -> Option<&Waypoint> {
        let mut current = self.get_root();
        while let Some(node) = current {
            current = match label.cmp(node.label()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.waypoint()),
            };
        }
        None
    }

    /// Waypoints in ascending label order.
    pub fn in_order(&self) -> Vec<&Waypoint> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&MountainNode> = Vec::new();
        let mut current = self.get_root();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                out.push(node.waypoint());
                current = node.right();
            }
        }
        out
    }

    /// Writes a pre-order dump of the mountain, one stop per line, indented by depth.
    pub fn write_details(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "=== MOUNTAIN ===")?;
        writeln!(writer, "Rest stops: {}, height: {}", self.len, self.height())?;
        match self.get_root() {
            Some(root) => write_node(root, 0, writer)?,
            None => writeln!(writer, "(empty)")?,
        }
        writeln!(writer)
    }
}

fn write_node(node: &MountainNode, depth: usize, writer: &mut dyn Write) -> std::io::Result<()> {
    let supplies: Vec<String> = node.waypoint().supplies().iter().map(|s| s.to_string()).collect();
    let obstacles: Vec<String> = node.waypoint().obstacles().iter().map(|o| o.to_string()).collect();
    writeln!(
        writer,
        "{}{} (height {}) supplies: [{}] obstacles: [{}]",
        "  ".repeat(depth),
        node.label(),
        node.height(),
        supplies.join(", "),
        obstacles.join(", ")
    )?;
    if let Some(left) = node.left() {
        write_node(left, depth + 1, writer)?;
    }
    if let Some(right) = node.right() {
        write_node(right, depth + 1, writer)?;
    }
    Ok(())
}

//─────────────────────────────────────────────────────────────────────────────
// Rotations. Each one only touches the nodes it moves and returns the new
// subtree root; ancestors are fixed up by the unwinding insert.
//─────────────────────────────────────────────────────────────────────────────

/// LL case.
fn rotate_right(mut node: Box<MountainNode>) -> Box<MountainNode> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// RR case.
fn rotate_left(mut node: Box<MountainNode>) -> Box<MountainNode> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// LR case.
fn rotate_left_right(mut node: Box<MountainNode>) -> Box<MountainNode> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

/// RL case.
fn rotate_right_left(mut node: Box<MountainNode>) -> Box<MountainNode> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mountain::Supply;

    fn stop(label: &str) -> Waypoint {
        Waypoint::new(label, vec![], vec![]).unwrap()
    }

    fn build(labels: &[&str]) -> Mountain {
        let mut mountain = Mountain::new();
        for label in labels {
            mountain.insert(stop(label));
        }
        mountain
    }

    // Returns the recomputed height, asserting the AVL and height invariants on the way.
    fn check(node: Option<&MountainNode>) -> i32 {
        let Some(node) = node else { return -1 };
        let left = check(node.left());
        let right = check(node.right());
        assert_eq!(node.height(), 1 + left.max(right), "bad height at {}", node.label());
        assert!((right - left).abs() <= 1, "unbalanced at {}", node.label());
        node.height()
    }

    fn labels(mountain: &Mountain) -> Vec<&str> {
        mountain.in_order().iter().map(|w| w.label()).collect()
    }

    fn shape(node: Option<&MountainNode>) -> String {
        match node {
            None => "-".to_string(),
            Some(n) => format!("({} {} {})", n.label(), shape(n.left()), shape(n.right())),
        }
    }

    #[test]
    fn empty_mountain() {
        let mountain = Mountain::new();
        assert!(mountain.is_empty());
        assert_eq!(mountain.height(), 0);
        assert_eq!(height_of(None), 0);
        assert!(mountain.in_order().is_empty());
    }

    #[test]
    fn single_rotation_left_left() {
        let mountain = build(&["C", "B", "A"]);
        assert_eq!(shape(mountain.get_root()), "(B (A - -) (C - -))");
        assert_eq!(mountain.height(), 1);
    }

    #[test]
    fn single_rotation_right_right() {
        let mountain = build(&["A", "B", "C"]);
        assert_eq!(shape(mountain.get_root()), "(B (A - -) (C - -))");
    }

    #[test]
    fn double_rotation_left_right() {
        let mountain = build(&["C", "A", "B"]);
        assert_eq!(shape(mountain.get_root()), "(B (A - -) (C - -))");
    }

    #[test]
    fn double_rotation_right_left() {
        let mountain = build(&["A", "C", "B"]);
        assert_eq!(shape(mountain.get_root()), "(B (A - -) (C - -))");
    }

    #[test]
    fn rotation_below_root_keeps_root() {
        let mountain = build(&["M", "F", "T", "P", "W", "Z"]);
        // Z makes the root right-heavy along its right-right spine.
        assert_eq!(
            shape(mountain.get_root()),
            "(T (M (F - -) (P - -)) (W - (Z - -)))"
        );
        check(mountain.get_root());
    }

    #[test]
    fn double_rotation_left_right_below_root() {
        let mountain = build(&["M", "F", "T", "B", "D"]);
        assert_eq!(
            shape(mountain.get_root()),
            "(M (D (B - -) (F - -)) (T - -))"
        );
        assert_eq!(mountain.height(), 2);
        check(mountain.get_root());
    }

    #[test]
    fn double_rotation_right_left_below_root() {
        let mountain = build(&["M", "F", "T", "W", "V"]);
        assert_eq!(
            shape(mountain.get_root()),
            "(M (F - -) (V (T - -) (W - -)))"
        );
        assert_eq!(mountain.height(), 2);
        check(mountain.get_root());
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let names: Vec<String> = (0..64).map(|i| format!("n{:03}", i)).collect();
        let mut mountain = Mountain::new();
        for name in &names {
            mountain.insert(stop(name));
            check(mountain.get_root());
        }
        assert_eq!(mountain.len(), 64);
        assert_eq!(mountain.height(), 6);
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(labels(&mountain), expected);
    }

    #[test]
    fn scrambled_inserts_stay_balanced() {
        let mut mountain = Mountain::new();
        for i in 0..101 {
            let key = (i * 37) % 101;
            mountain.insert(stop(&format!("k{:03}", key)));
            check(mountain.get_root());
            let ordered = labels(&mountain);
            assert!(ordered.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(mountain.len(), 101);
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut mountain = Mountain::new();
        mountain.insert(Waypoint::new("B", vec![Supply::Food], vec![]).unwrap());
        mountain.insert(stop("A"));
        mountain.insert(stop("C"));
        let before = shape(mountain.get_root());

        assert!(!mountain.insert(Waypoint::new("B", vec![Supply::Raft], vec![]).unwrap()));
        assert_eq!(shape(mountain.get_root()), before);
        assert_eq!(mountain.len(), 3);
        assert_eq!(mountain.get("B").unwrap().supplies(), &[Supply::Food]);
    }

    #[test]
    fn lookup() {
        let mountain = build(&["D", "B", "F", "A"]);
        assert!(mountain.get("A").is_some());
        assert!(mountain.get("E").is_none());
        assert_eq!(mountain.get("F").map(Waypoint::label), Some("F"));
    }

    #[test]
    fn details_dump() {
        let mountain = build(&["B", "A", "C"]);
        let mut out = Vec::new();
        mountain.write_details(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rest stops: 3, height: 1"));
        assert!(text.contains("B (height 1)"));
        assert!(text.contains("  A (height 0) supplies: [] obstacles: []"));
    }
}
