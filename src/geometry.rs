//! Fixed cube geometry: vertices, edges and the faces the visibility
//! heuristic can pick from.

use std::fmt;

use crate::math::vec3::Vec3;

pub const N_NUM_VERTICES: usize = 8;
pub const N_NUM_EDGES: usize = 12;

/// Corner order used by the software renderer.
pub const CUBE_VERTICES: [Vec3; N_NUM_VERTICES] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
];

/// Corner order used by the hardware pipeline.
pub const WIRE_CUBE_VERTICES: [Vec3; N_NUM_VERTICES] = [
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Both vertex orders share one edge list.
pub const CUBE_EDGES: [Edge; N_NUM_EDGES] = [
    Edge(0, 1),
    Edge(1, 2),
    Edge(2, 3),
    Edge(3, 0),
    Edge(4, 5),
    Edge(5, 6),
    Edge(6, 7),
    Edge(7, 4),
    Edge(0, 4),
    Edge(1, 5),
    Edge(2, 6),
    Edge(3, 7),
];

pub const FRONT_FACE: Face = checked_face([0, 1, 2, 3]);
pub const SIDE_FACE: Face = checked_face([4, 5, 6, 7]);
pub const TOP_FACE: Face = checked_face([0, 1, 5, 4]);

const UNIT_CUBE: Cube = checked_cube(CUBE_VERTICES, CUBE_EDGES);
const WIRE_CUBE: Cube = checked_cube(WIRE_CUBE_VERTICES, CUBE_EDGES);

/// First index in `indices` that is not a vertex of a cube.
const fn first_out_of_range(indices: &[usize]) -> Option<usize> {
    let mut i = 0;
    while i < indices.len() {
        if indices[i] >= N_NUM_VERTICES {
            return Some(indices[i]);
        }
        i += 1;
    }
    None
}

// Only evaluated for the tables above, so a bad index fails the build.
const fn checked_face(indices: [usize; 4]) -> Face {
    match Face::new(indices) {
        Ok(face) => face,
        Err(_) => panic!("face table references a missing vertex"),
    }
}

const fn checked_cube(vertices: [Vec3; N_NUM_VERTICES], edges: [Edge; N_NUM_EDGES]) -> Cube {
    match Cube::new(vertices, edges) {
        Ok(cube) => cube,
        Err(_) => panic!("edge table references a missing vertex"),
    }
}

/// An unordered pair of vertex indices.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// The pair with the smaller index first.
    pub fn normalized(&self) -> (usize, usize) {
        (self.0.min(self.1), self.0.max(self.1))
    }

    pub const fn indices(&self) -> [usize; 2] {
        [self.0, self.1]
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

/// An ordered quadrilateral of vertex indices.
///
/// Only built through [`Face::new`], so every index is below
/// [`N_NUM_VERTICES`] and can index the vertices of any [`Cube`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face([usize; 4]);

impl Face {
    pub const fn new(indices: [usize; 4]) -> Result<Self, GeometryError> {
        match first_out_of_range(&indices) {
            Some(index) => Err(GeometryError::FaceOutOfRange {
                index,
                vertex_count: N_NUM_VERTICES,
            }),
            None => Ok(Self(indices)),
        }
    }

    pub fn indices(&self) -> &[usize; 4] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// An edge references a vertex past the end of the vertex list.
    EdgeOutOfRange { edge: usize, index: usize, vertex_count: usize },
    /// A face references a vertex past the end of the vertex list.
    FaceOutOfRange { index: usize, vertex_count: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::EdgeOutOfRange {
                edge,
                index,
                vertex_count,
            } => write!(
                f,
                "edge {edge} references vertex {index}, but only {vertex_count} vertices exist"
            ),
            GeometryError::FaceOutOfRange {
                index,
                vertex_count,
            } => write!(
                f,
                "face references vertex {index}, but only {vertex_count} vertices exist"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// The vertex set and wireframe of a cube.
///
/// Every edge index is checked against the vertex count on construction, so
/// indexing `vertices()` with an edge of the same cube never panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    vertices: [Vec3; N_NUM_VERTICES],
    edges: [Edge; N_NUM_EDGES],
}

impl Cube {
    pub const fn new(
        vertices: [Vec3; N_NUM_VERTICES],
        edges: [Edge; N_NUM_EDGES],
    ) -> Result<Self, GeometryError> {
        let mut i = 0;
        while i < N_NUM_EDGES {
            if let Some(index) = first_out_of_range(&edges[i].indices()) {
                return Err(GeometryError::EdgeOutOfRange {
                    edge: i,
                    index,
                    vertex_count: N_NUM_VERTICES,
                });
            }
            i += 1;
        }
        Ok(Self { vertices, edges })
    }

    /// The software renderer's cube.
    pub fn unit() -> Self {
        UNIT_CUBE
    }

    /// The hardware pipeline's cube.
    pub fn wire() -> Self {
        WIRE_CUBE
    }

    pub fn vertices(&self) -> &[Vec3; N_NUM_VERTICES] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge; N_NUM_EDGES] {
        &self.edges
    }
}
