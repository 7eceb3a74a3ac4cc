//! Binary tree used both to build Huffman codes and to decode them.
//!
//! Vertices live in an arena owned by the tree and refer to each other by index, so a vertex's
//! identity is only meaningful inside its own tree. Parent links are kept for walking back up.
//!

use crate::bitstream::bitvec::BitVec;

/// Index of a vertex inside its tree.
pub type VertexId = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    /// Set on leaves only.
    pub symbol: Option<char>,
    /// Set while building codes from frequencies, None in decode tries.
    pub weight: Option<u64>,
    /// Child reached by a 0 bit, then by a 1 bit.
    pub children: [Option<VertexId>; 2],
    /// None only for the root.
    pub parent: Option<VertexId>,
}

impl Vertex {
    pub fn is_leaf(&self) -> bool {
        self.children[0].is_none() && self.children[1].is_none()
    }

    pub fn child(&self, bit: bool) -> Option<VertexId> {
        self.children[bit as usize]
    }
}

#[derive(Debug, Clone, Default)]
pub struct HuffmanTree {
    vertices: Vec<Vertex>,
    root: Option<VertexId>,
}

impl HuffmanTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tree holding only an empty root vertex.
    pub fn with_empty_root() -> Self {
        let mut tree = Self::new();
        let root = tree.add_vertex(Vertex::default());
        tree.root = Some(root);
        tree
    }

    fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Add a detached leaf.
    pub fn add_leaf(&mut self, symbol: char, weight: u64) -> VertexId {
        self.add_vertex(Vertex {
            symbol: Some(symbol),
            weight: Some(weight),
            ..Vertex::default()
        })
    }

    /// Create an internal vertex over two detached vertices. Its weight is the sum of theirs and
    /// `zero` is placed on the 0 edge.
    pub fn join(&mut self, zero: VertexId, one: VertexId) -> VertexId {
        let weight = match (self.vertices[zero].weight, self.vertices[one].weight) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        };
        let id = self.add_vertex(Vertex {
            weight,
            children: [Some(zero), Some(one)],
            ..Vertex::default()
        });
        self.vertices[zero].parent = Some(id);
        self.vertices[one].parent = Some(id);
        id
    }

    /// Return the child on the `bit` edge of `parent`, creating an empty one if there is none.
    pub fn child_or_insert(&mut self, parent: VertexId, bit: bool) -> VertexId {
        if let Some(child) = self.vertices[parent].child(bit) {
            return child;
        }
        let child = self.add_vertex(Vertex {
            parent: Some(parent),
            ..Vertex::default()
        });
        self.vertices[parent].children[bit as usize] = Some(child);
        child
    }

    pub fn set_root(&mut self, root: VertexId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id]
    }

    /// Number of vertices in the arena.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Walk the tree depth first, 0 edge before 1 edge, and return every leaf symbol with the
    /// path of edge labels that leads to it.
    ///
    /// The walk keeps only the current vertex and the one it came from. Arriving from the parent
    /// means the vertex is new; arriving from child 0 means child 1 is next; arriving from
    /// child 1 means the vertex is finished. No recursion or visited set is needed.
    pub fn leaf_paths(&self) -> Vec<(char, BitVec)> {
        let mut paths = Vec::new();
        let root = match self.root {
            Some(root) => root,
            None => return paths,
        };

        let mut path = BitVec::new();
        let mut current = root;
        let mut previous: Option<VertexId> = None;
        loop {
            let vertex = &self.vertices[current];
            let next_bit = if previous == vertex.parent {
                if vertex.is_leaf() {
                    if let Some(symbol) = vertex.symbol {
                        paths.push((symbol, path.clone()));
                    }
                    None
                } else if vertex.children[0].is_some() {
                    Some(false)
                } else {
                    Some(true)
                }
            } else if previous.is_some() && previous == vertex.children[0] {
                vertex.children[1].map(|_| true)
            } else {
                None
            };

            match next_bit.and_then(|bit| vertex.child(bit).map(|child| (bit, child))) {
                Some((bit, child)) => {
                    path.push(bit);
                    previous = Some(current);
                    current = child;
                }
                None => {
                    // Finished here, climb back up
                    match vertex.parent {
                        Some(parent) if current != root => {
                            path.pop();
                            previous = Some(current);
                            current = parent;
                        }
                        _ => break,
                    }
                }
            }
        }
        paths
    }
}
