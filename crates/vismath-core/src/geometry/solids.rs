//! Polyhedron catalogue, rotation, projection and painter's-order sorting.
//!
//! Platonic solids, the square pyramid and the cuboctahedron come from fixed
//! vertex/face tables. The truncated solids are derived from their parents by
//! cutting every vertex at a fixed fraction of each edge, so their topology is
//! correct by construction. Every solid is scaled so its farthest vertex sits
//! at radius 1.

use crate::color::hsl;
use fnv::{FnvHashMap, FnvHashSet};
use glam::{DVec2, DVec3};
use smallvec::SmallVec;

/// Vertex indices of one face, in boundary order.
pub type Face = SmallVec<[usize; 8]>;
pub type Edge = [usize; 2];

const PHI: f64 = 1.618_033_988_749_895;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
    SquarePyramid,
    TruncatedTetrahedron,
    Cuboctahedron,
    TruncatedCube,
    TruncatedOctahedron,
}

impl SolidKind {
    pub const ALL: [SolidKind; 10] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
        SolidKind::SquarePyramid,
        SolidKind::TruncatedTetrahedron,
        SolidKind::Cuboctahedron,
        SolidKind::TruncatedCube,
        SolidKind::TruncatedOctahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "Tetrahedron",
            SolidKind::Cube => "Cube",
            SolidKind::Octahedron => "Octahedron",
            SolidKind::Dodecahedron => "Dodecahedron",
            SolidKind::Icosahedron => "Icosahedron",
            SolidKind::SquarePyramid => "Square Pyramid",
            SolidKind::TruncatedTetrahedron => "Truncated Tetrahedron",
            SolidKind::Cuboctahedron => "Cuboctahedron",
            SolidKind::TruncatedCube => "Truncated Cube",
            SolidKind::TruncatedOctahedron => "Truncated Octahedron",
        }
    }

    pub fn dual_name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron | SolidKind::SquarePyramid => "Self-dual",
            SolidKind::Cube => "Octahedron",
            SolidKind::Octahedron => "Cube",
            SolidKind::Dodecahedron => "Icosahedron",
            SolidKind::Icosahedron => "Dodecahedron",
            SolidKind::TruncatedTetrahedron => "Triakis Tetrahedron",
            SolidKind::Cuboctahedron => "Rhombic Dodecahedron",
            SolidKind::TruncatedCube => "Triakis Octahedron",
            SolidKind::TruncatedOctahedron => "Tetrakis Hexahedron",
        }
    }

    pub fn is_platonic(self) -> bool {
        matches!(
            self,
            SolidKind::Tetrahedron
                | SolidKind::Cube
                | SolidKind::Octahedron
                | SolidKind::Dodecahedron
                | SolidKind::Icosahedron
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    pub kind: SolidKind,
    pub vertices: Vec<DVec3>,
    pub edges: Vec<Edge>,
    pub faces: Vec<Face>,
    pub face_colors: Vec<String>,
}

impl Solid {
    /// Loads `kind` from the catalogue, normalized to unit radius.
    pub fn load(kind: SolidKind) -> Self {
        let mut solid = Solid::build(kind);
        solid.normalize();
        solid
    }

    fn build(kind: SolidKind) -> Self {
        let a = 1.0 / PHI;
        let b = PHI;
        let (vertices, edges, faces): (Vec<[f64; 3]>, Vec<Edge>, Vec<Vec<usize>>) = match kind {
            // Regular truncations: the cut keeps every edge the same length.
            SolidKind::TruncatedTetrahedron => {
                return truncated(kind, &Solid::build(SolidKind::Tetrahedron), 1.0 / 3.0)
            }
            SolidKind::TruncatedCube => {
                return truncated(kind, &Solid::build(SolidKind::Cube), 1.0 / (2.0 + 2f64.sqrt()))
            }
            SolidKind::TruncatedOctahedron => {
                return truncated(kind, &Solid::build(SolidKind::Octahedron), 1.0 / 3.0)
            }
            SolidKind::Tetrahedron => (
                vec![[1.0, 1.0, 1.0], [1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, 1.0]],
                vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]],
                vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 1, 3], vec![1, 2, 3]],
            ),
            SolidKind::Cube => (
                vec![
                    [-1.0, -1.0, -1.0],
                    [1.0, -1.0, -1.0],
                    [1.0, 1.0, -1.0],
                    [-1.0, 1.0, -1.0],
                    [-1.0, -1.0, 1.0],
                    [1.0, -1.0, 1.0],
                    [1.0, 1.0, 1.0],
                    [-1.0, 1.0, 1.0],
                ],
                vec![
                    [0, 1], [1, 2], [2, 3], [3, 0],
                    [4, 5], [5, 6], [6, 7], [7, 4],
                    [0, 4], [1, 5], [2, 6], [3, 7],
                ],
                vec![
                    vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![0, 1, 5, 4],
                    vec![2, 3, 7, 6], vec![0, 3, 7, 4], vec![1, 2, 6, 5],
                ],
            ),
            SolidKind::Octahedron => (
                vec![
                    [1.0, 0.0, 0.0],
                    [-1.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0],
                    [0.0, -1.0, 0.0],
                    [0.0, 0.0, 1.0],
                    [0.0, 0.0, -1.0],
                ],
                vec![
                    [0, 2], [0, 3], [0, 4], [0, 5], [1, 2], [1, 3],
                    [1, 4], [1, 5], [2, 4], [2, 5], [3, 4], [3, 5],
                ],
                vec![
                    vec![0, 2, 4], vec![0, 4, 3], vec![0, 3, 5], vec![0, 5, 2],
                    vec![1, 2, 4], vec![1, 4, 3], vec![1, 3, 5], vec![1, 5, 2],
                ],
            ),
            SolidKind::Dodecahedron => (
                vec![
                    [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0],
                    [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0],
                    [0.0, a, b], [0.0, a, -b], [0.0, -a, b], [0.0, -a, -b],
                    [a, b, 0.0], [a, -b, 0.0], [-a, b, 0.0], [-a, -b, 0.0],
                    [b, 0.0, a], [b, 0.0, -a], [-b, 0.0, a], [-b, 0.0, -a],
                ],
                vec![
                    [0, 8], [0, 12], [0, 16], [1, 9], [1, 12], [1, 17],
                    [2, 10], [2, 13], [2, 16], [3, 11], [3, 13], [3, 17],
                    [4, 8], [4, 14], [4, 18], [5, 9], [5, 14], [5, 19],
                    [6, 10], [6, 15], [6, 18], [7, 11], [7, 15], [7, 19],
                    [8, 10], [9, 11], [12, 14], [13, 15], [16, 17], [18, 19],
                ],
                vec![
                    vec![0, 8, 10, 2, 16], vec![0, 16, 17, 1, 12], vec![0, 12, 14, 4, 8],
                    vec![1, 17, 3, 11, 9], vec![1, 9, 5, 14, 12], vec![2, 10, 6, 15, 13],
                    vec![2, 13, 3, 17, 16], vec![3, 13, 15, 7, 11], vec![4, 14, 5, 19, 18],
                    vec![4, 18, 6, 10, 8], vec![5, 9, 11, 7, 19], vec![6, 18, 19, 7, 15],
                ],
            ),
            SolidKind::Icosahedron => (
                vec![
                    [0.0, 1.0, b], [0.0, 1.0, -b], [0.0, -1.0, b], [0.0, -1.0, -b],
                    [1.0, b, 0.0], [1.0, -b, 0.0], [-1.0, b, 0.0], [-1.0, -b, 0.0],
                    [b, 0.0, 1.0], [b, 0.0, -1.0], [-b, 0.0, 1.0], [-b, 0.0, -1.0],
                ],
                vec![
                    [0, 2], [0, 4], [0, 6], [0, 8], [0, 10], [1, 3], [1, 4], [1, 6],
                    [1, 9], [1, 11], [2, 5], [2, 7], [2, 8], [2, 10], [3, 5], [3, 7],
                    [3, 9], [3, 11], [4, 6], [4, 8], [4, 9], [5, 7], [5, 8], [5, 9],
                    [6, 10], [6, 11], [7, 10], [7, 11], [8, 9], [10, 11],
                ],
                vec![
                    vec![0, 2, 8], vec![0, 8, 4], vec![0, 4, 6], vec![0, 6, 10], vec![0, 10, 2],
                    vec![2, 5, 8], vec![8, 5, 9], vec![8, 9, 4], vec![4, 9, 1], vec![4, 1, 6],
                    vec![6, 1, 11], vec![6, 11, 10], vec![10, 11, 7], vec![10, 7, 2], vec![2, 7, 5],
                    vec![3, 5, 7], vec![3, 7, 11], vec![3, 11, 1], vec![3, 1, 9], vec![3, 9, 5],
                ],
            ),
            SolidKind::SquarePyramid => (
                vec![
                    [1.0, 0.0, 1.0],
                    [1.0, 0.0, -1.0],
                    [-1.0, 0.0, 1.0],
                    [-1.0, 0.0, -1.0],
                    [0.0, 1.5, 0.0],
                ],
                vec![[0, 1], [1, 3], [3, 2], [2, 0], [0, 4], [1, 4], [2, 4], [3, 4]],
                vec![vec![0, 1, 4], vec![1, 3, 4], vec![3, 2, 4], vec![2, 0, 4], vec![0, 2, 3, 1]],
            ),
            SolidKind::Cuboctahedron => (
                vec![
                    [1.0, 1.0, 0.0], [1.0, -1.0, 0.0], [-1.0, 1.0, 0.0], [-1.0, -1.0, 0.0],
                    [1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, -1.0],
                    [0.0, 1.0, 1.0], [0.0, 1.0, -1.0], [0.0, -1.0, 1.0], [0.0, -1.0, -1.0],
                ],
                vec![
                    [0, 4], [0, 5], [0, 8], [0, 9], [1, 4], [1, 5], [1, 10], [1, 11],
                    [2, 6], [2, 7], [2, 8], [2, 9], [3, 6], [3, 7], [3, 10], [3, 11],
                    [4, 8], [4, 10], [5, 9], [5, 11], [6, 8], [6, 10], [7, 9], [7, 11],
                ],
                vec![
                    vec![0, 4, 8], vec![0, 5, 9], vec![1, 4, 10], vec![1, 5, 11],
                    vec![2, 6, 8], vec![2, 7, 9], vec![3, 6, 10], vec![3, 7, 11],
                    vec![0, 8, 2, 9], vec![1, 10, 3, 11], vec![4, 0, 5, 1],
                    vec![6, 2, 7, 3], vec![8, 4, 10, 6], vec![9, 5, 11, 7],
                ],
            ),
        };
        let faces: Vec<Face> = faces.into_iter().map(Face::from_vec).collect();
        Self {
            kind,
            vertices: vertices.into_iter().map(DVec3::from_array).collect(),
            edges,
            face_colors: face_colors(kind, faces.len()),
            faces,
        }
    }

    /// Scales all vertices so the farthest one has length 1.
    pub fn normalize(&mut self) {
        let max = self.max_radius();
        if max > 0.0 {
            for v in &mut self.vertices {
                *v /= max;
            }
        }
    }

    pub fn max_radius(&self) -> f64 {
        self.vertices.iter().map(|v| v.length()).fold(0.0, f64::max)
    }

    /// V − E + F.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices.len() as i64 - self.edges.len() as i64 + self.faces.len() as i64
    }

    /// Color of face `i`, cycling when the palette is shorter than the faces.
    pub fn face_color(&self, i: usize) -> &str {
        if self.face_colors.is_empty() {
            return "#94a3b8";
        }
        &self.face_colors[i % self.face_colors.len()]
    }

    /// Human label for the face polygons, e.g. "Square" or "Tri/Hexagonal".
    pub fn face_description(&self) -> String {
        let mut sides: Vec<usize> = self.faces.iter().map(|f| f.len()).collect();
        sides.sort_unstable();
        sides.dedup();
        let mixed = sides.len() > 1;
        sides
            .iter()
            .map(|&n| match n {
                3 if mixed => "Tri",
                3 => "Triangular",
                4 => "Square",
                5 => "Pentagonal",
                6 => "Hexagonal",
                8 => "Octagonal",
                _ => "Polygonal",
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn face_colors(kind: SolidKind, face_count: usize) -> Vec<String> {
    const RED: &str = "#ef4444";
    const GREEN: &str = "#22c55e";
    const BLUE: &str = "#3b82f6";
    const YELLOW: &str = "#eab308";
    const ORANGE: &str = "#f97316";
    const PURPLE: &str = "#a855f7";
    let fixed: &[&str] = match kind {
        SolidKind::Tetrahedron => &[RED, GREEN, BLUE, YELLOW],
        SolidKind::Cube => &[RED, GREEN, BLUE, YELLOW, ORANGE, PURPLE],
        SolidKind::Octahedron => &[RED, GREEN, BLUE, YELLOW, ORANGE, PURPLE, "#84cc16", "#14b8a6"],
        SolidKind::SquarePyramid => &[RED, BLUE, GREEN, YELLOW, PURPLE],
        SolidKind::Dodecahedron => {
            return (0..face_count).map(|i| hsl(i as f64 * 30.0, 60, 50)).collect()
        }
        SolidKind::Icosahedron => {
            return (0..face_count).map(|i| hsl(i as f64 * 18.0, 60, 50)).collect()
        }
        _ => {
            let step = 360.0 / face_count.max(1) as f64;
            return (0..face_count)
                .map(|i| hsl((i as f64 * step).round(), 65, 55))
                .collect();
        }
    };
    fixed.iter().map(|c| c.to_string()).collect()
}

/// Unique undirected edges of a face list, in first-seen order.
pub fn edges_from_faces(faces: &[Face]) -> Vec<Edge> {
    let mut seen = FnvHashSet::default();
    let mut edges = Vec::new();
    for face in faces {
        for (i, &a) in face.iter().enumerate() {
            let b = face[(i + 1) % face.len()];
            let key = [a.min(b), a.max(b)];
            if seen.insert(key) {
                edges.push(key);
            }
        }
    }
    edges
}

/// Cuts every vertex of `parent` at fraction `t` along each incident edge.
///
/// Each original face becomes a face with twice as many sides and each
/// original vertex becomes a new face spanning its cut points.
pub fn truncate(parent: &Solid, t: f64) -> (Vec<DVec3>, Vec<Face>) {
    let mut vertices = Vec::new();
    let mut cut: FnvHashMap<(usize, usize), usize> = FnvHashMap::default();
    let mut cut_point = |a: usize, b: usize, vertices: &mut Vec<DVec3>| -> usize {
        *cut.entry((a, b)).or_insert_with(|| {
            let (pa, pb) = (parent.vertices[a], parent.vertices[b]);
            vertices.push(pa + (pb - pa) * t);
            vertices.len() - 1
        })
    };

    let mut faces = Vec::with_capacity(parent.faces.len() + parent.vertices.len());
    for face in &parent.faces {
        let mut f = Face::new();
        for (i, &a) in face.iter().enumerate() {
            let b = face[(i + 1) % face.len()];
            f.push(cut_point(a, b, &mut vertices));
            f.push(cut_point(b, a, &mut vertices));
        }
        faces.push(f);
    }

    for v in 0..parent.vertices.len() {
        let ring = vertex_ring(&parent.faces, v);
        if ring.len() < 3 {
            continue;
        }
        let f: Face = ring
            .into_iter()
            .map(|u| cut_point(v, u, &mut vertices))
            .collect();
        faces.push(f);
    }
    (vertices, faces)
}

/// Neighbors of `v` in cyclic order, chained through the faces around it.
fn vertex_ring(faces: &[Face], v: usize) -> Vec<usize> {
    let pairs: Vec<(usize, usize)> = faces
        .iter()
        .filter_map(|f| {
            let i = f.iter().position(|&x| x == v)?;
            let n = f.len();
            Some((f[(i + n - 1) % n], f[(i + 1) % n]))
        })
        .collect();
    let Some(&(first, second)) = pairs.first() else {
        return Vec::new();
    };
    let mut used = vec![false; pairs.len()];
    used[0] = true;
    let mut ring = vec![first, second];
    while ring.len() < pairs.len() {
        let last = ring[ring.len() - 1];
        let next = pairs.iter().enumerate().find_map(|(j, &(p, q))| {
            if used[j] {
                None
            } else if p == last {
                Some((j, q))
            } else if q == last {
                Some((j, p))
            } else {
                None
            }
        });
        match next {
            Some((j, u)) => {
                used[j] = true;
                ring.push(u);
            }
            None => break,
        }
    }
    ring
}

fn truncated(kind: SolidKind, parent: &Solid, t: f64) -> Solid {
    let (vertices, faces) = truncate(parent, t);
    Solid {
        kind,
        edges: edges_from_faces(&faces),
        face_colors: face_colors(kind, faces.len()),
        vertices,
        faces,
    }
}

/// Euler angles in radians. Only X and Y participate in the transform; Z is
/// carried for completeness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Rotates about X, then about Y, then scales uniformly.
pub fn rotate_point(p: DVec3, rot: &Rotation, scale: f64) -> DVec3 {
    let (sx, cx) = rot.x.sin_cos();
    let y1 = p.y * cx - p.z * sx;
    let z1 = p.y * sx + p.z * cx;

    let (sy, cy) = rot.y.sin_cos();
    let x2 = p.x * cy + z1 * sy;
    let z2 = -p.x * sy + z1 * cy;

    DVec3::new(x2, y1, z2) * scale
}

/// Orthographic projection to screen: `x, y` in pixels, `z` the rotated depth.
pub fn project(p: DVec3, rot: &Rotation, scale: f64, size: f64, center: DVec2) -> DVec3 {
    let r = rotate_point(p, rot, scale);
    let base = size * crate::constants::PROJECTION_FACTOR;
    DVec3::new(center.x + r.x * base, center.y + r.y * base, r.z)
}

/// Face indices ordered back to front by mean depth (ascending z).
pub fn depth_order(faces: &[Face], depth: impl Fn(usize) -> f64) -> Vec<usize> {
    let mut keyed: Vec<(usize, f64)> = faces
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let sum: f64 = f.iter().map(|&v| depth(v)).sum();
            (i, sum / f.len().max(1) as f64)
        })
        .collect();
    keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
    keyed.into_iter().map(|(i, _)| i).collect()
}
