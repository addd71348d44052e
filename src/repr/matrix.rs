use std::fmt::{self, Display};

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Dense representation: `capacity` vertex slots and a row-major `capacity x capacity`
/// matrix of optional weights.
///
/// The slot index of a vertex is its `VertexId` and its row/column in the matrix. Freed
/// slots are reused by later insertions; the matrix never grows.
#[derive(Debug, Clone)]
pub struct MatrixBackend<T, C> {
    slots: Vec<Option<Vertex<T>>>,
    cells: Vec<Option<OptionalWeight>>,
    capacity: NumVertices,
    num_vertices: NumVertices,
    num_connections: NumEdges,
    directedness: Directedness,
    weighted: bool,
    comparator: C,
}

impl<T, C> MatrixBackend<T, C> {
    pub fn new(
        capacity: NumVertices,
        directedness: Directedness,
        weighted: bool,
        comparator: C,
    ) -> Self {
        let n = capacity as usize;
        Self {
            slots: (0..n).map(|_| None).collect(),
            cells: vec![None; n * n],
            capacity,
            num_vertices: 0,
            num_connections: 0,
            directedness,
            weighted,
            comparator,
        }
    }

    /// Maximum number of vertices
    pub fn capacity(&self) -> NumVertices {
        self.capacity
    }

    /// Returns the row of `u`
    fn row(&self, u: VertexId) -> &[Option<OptionalWeight>] {
        let n = self.capacity as usize;
        let start = u as usize * n;
        &self.cells[start..start + n]
    }

    fn cell_index(&self, u: VertexId, v: VertexId) -> usize {
        u as usize * self.capacity as usize + v as usize
    }

    fn is_live(&self, u: VertexId) -> bool {
        self.slots.get(u as usize).is_some_and(|s| s.is_some())
    }
}

impl<T, C> DegreeBook<T> for MatrixBackend<T, C> {
    fn record_mut(&mut self, u: VertexId) -> &mut Vertex<T> {
        self.slots[u as usize]
            .as_mut()
            .expect("degree update on an empty slot")
    }
}

impl<T, C> GraphOrder for MatrixBackend<T, C> {
    fn number_of_vertices(&self) -> NumVertices {
        self.num_vertices
    }

    fn number_of_connections(&self) -> NumEdges {
        self.num_connections
    }

    fn id_bound(&self) -> usize {
        self.capacity as usize
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(u, slot)| slot.as_ref().map(|_| u as VertexId))
    }
}

impl<T, C> Adjacency for MatrixBackend<T, C> {
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, cell)| cell.map(|w| (v as VertexId, w.get())))
    }

    fn weight_of(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        if !self.is_live(u) || !self.is_live(v) {
            return None;
        }
        self.cells[self.cell_index(u, v)].map(|w| w.get())
    }
}

impl<T, C: Compare<T>> VertexStore<T> for MatrixBackend<T, C> {
    fn vertex(&self, u: VertexId) -> Option<&Vertex<T>> {
        self.slots.get(u as usize)?.as_ref()
    }

    fn find(&self, data: &T) -> Option<VertexId> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|v| self.comparator.equal(data, v.data()))
        })
        .map(|u| u as VertexId)
    }
}

impl<T, C: Compare<T>> VertexEditing<T> for MatrixBackend<T, C> {
    fn insert_vertex(&mut self, data: T) -> Result<VertexId> {
        if self.find(&data).is_some() {
            return Err(GraphError::DuplicateVertex);
        }

        let u = self
            .slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(GraphError::CapacityExhausted {
                capacity: self.capacity,
            })?;

        self.slots[u] = Some(Vertex::new(data));
        self.num_vertices += 1;
        debug!(slot = u, vertices = self.num_vertices, "matrix vertex inserted");
        Ok(u as VertexId)
    }

    fn remove_vertex(&mut self, u: VertexId) -> Result<T> {
        let slot = self
            .slots
            .get_mut(u as usize)
            .ok_or(GraphError::VertexNotFound)?;
        ensure_isolated(slot.as_ref().ok_or(GraphError::VertexNotFound)?)?;

        let vertex = slot.take().ok_or(GraphError::VertexNotFound)?;
        debug_assert!(self.row(u).iter().all(|c| c.is_none()));
        self.num_vertices -= 1;
        debug!(slot = u, vertices = self.num_vertices, "matrix vertex removed");
        Ok(vertex.into_data())
    }

    fn drain_vertices(&mut self) -> Vec<T> {
        self.cells.fill(None);
        self.num_vertices = 0;
        self.num_connections = 0;
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.take().map(Vertex::into_data))
            .collect()
    }
}

impl<T, C: Compare<T>> ConnectionEditing for MatrixBackend<T, C> {
    fn try_add_connection(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<Option<Weight>> {
        if !self.is_live(u) {
            return Err(GraphError::SourceNotFound);
        }
        if !self.is_live(v) {
            return Err(GraphError::DestinationNotFound);
        }
        let cell = stored_weight(self.weighted, weight)?;

        let idx = self.cell_index(u, v);
        let previous = self.cells[idx].replace(cell);
        if !self.directedness.is_directed() {
            let mirror = self.cell_index(v, u);
            self.cells[mirror] = Some(cell);
        }

        if previous.is_none() {
            self.attach_connection(self.directedness, u, v);
            self.num_connections += 1;
        }
        Ok(previous.map(|w| w.get()))
    }

    fn try_remove_connection(&mut self, u: VertexId, v: VertexId) -> Option<Weight> {
        if !self.is_live(u) || !self.is_live(v) {
            return None;
        }

        let idx = self.cell_index(u, v);
        let removed = self.cells[idx].take()?;
        if !self.directedness.is_directed() {
            let mirror = self.cell_index(v, u);
            self.cells[mirror] = None;
        }

        self.detach_connection(self.directedness, u, v);
        self.num_connections -= 1;
        Some(removed.get())
    }
}

/// Prints a header row of all vertices followed by one row per vertex.
/// Absent connections are printed as `.`.
impl<T: Display, C> Display for MatrixBackend<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.vertices().collect_vec();
        let labels = live
            .iter()
            .map(|&u| self.slots[u as usize].as_ref().map_or(String::new(), |v| v.data().to_string()))
            .collect_vec();
        let width = labels.iter().map(|l| l.len()).max().unwrap_or(1).max(
            live.iter()
                .flat_map(|&u| self.neighbors_of(u))
                .map(|(_, w)| w.to_string().len())
                .max()
                .unwrap_or(1),
        );

        write!(f, "{:width$}", "")?;
        for label in &labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (&u, label) in live.iter().zip(&labels) {
            write!(f, "{label:>width$}")?;
            for &v in &live {
                match self.cells[self.cell_index(u, v)] {
                    Some(w) => write!(f, " {:>width$}", w.get())?,
                    None => write!(f, " {:>width$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(capacity: NumVertices, directedness: Directedness) -> MatrixBackend<char, NaturalOrder> {
        MatrixBackend::new(capacity, directedness, true, NaturalOrder)
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut m = backend(3, Directedness::Undirected);
        assert_eq!(m.insert_vertex('a'), Ok(0));
        assert_eq!(m.insert_vertex('b'), Ok(1));
        assert_eq!(m.insert_vertex('c'), Ok(2));
        assert_eq!(
            m.insert_vertex('d'),
            Err(GraphError::CapacityExhausted { capacity: 3 })
        );

        assert_eq!(m.remove_vertex(1), Ok('b'));
        assert_eq!(m.vertices().collect_vec(), vec![0, 2]);
        assert_eq!(m.insert_vertex('d'), Ok(1));
        assert_eq!(m.find(&'d'), Some(1));
        assert_eq!(m.number_of_vertices(), 3);
    }

    #[test]
    fn undirected_cells_are_mirrored() {
        let mut m = backend(3, Directedness::Undirected);
        for c in ['a', 'b', 'c'] {
            m.insert_vertex(c).unwrap();
        }

        assert_eq!(m.try_add_connection(2, 0, 5), Ok(None));
        assert_eq!(m.weight_of(0, 2), Some(5));
        assert_eq!(m.neighbors_of(0).collect_vec(), vec![(2, 5)]);
        assert_eq!(m.vertex(0).unwrap().degree(), 1);

        assert_eq!(m.try_add_connection(0, 2, 8), Ok(Some(5)));
        assert_eq!(m.vertex(2).unwrap().degree(), 1);
        assert_eq!(m.number_of_connections(), 1);

        assert_eq!(
            m.remove_vertex(0),
            Err(GraphError::DegreeNotZero {
                in_degree: 1,
                out_degree: 1
            })
        );
        assert_eq!(m.try_remove_connection(2, 0), Some(8));
        assert_eq!(m.try_remove_connection(2, 0), None);
        assert_eq!(m.remove_vertex(0), Ok('a'));
    }

    #[test]
    fn directed_cells_are_not_mirrored() {
        let mut m = backend(2, Directedness::Directed);
        m.insert_vertex('a').unwrap();
        m.insert_vertex('b').unwrap();

        m.try_add_connection(0, 1, 4).unwrap();
        assert_eq!(m.weight_of(0, 1), Some(4));
        assert_eq!(m.weight_of(1, 0), None);

        let (a, b) = (m.vertex(0).unwrap(), m.vertex(1).unwrap());
        assert_eq!((a.in_degree(), a.out_degree(), a.degree()), (0, 1, 1));
        assert_eq!((b.in_degree(), b.out_degree(), b.degree()), (1, 0, 1));

        assert_eq!(m.try_add_connection(0, 3, 1), Err(GraphError::DestinationNotFound));
        assert_eq!(m.try_add_connection(3, 0, 1), Err(GraphError::SourceNotFound));
    }

    #[test]
    fn print_matrix() {
        let mut m = backend(4, Directedness::Undirected);
        for c in ['u', 'v', 'x'] {
            m.insert_vertex(c).unwrap();
        }
        m.try_add_connection(0, 1, 1).unwrap();
        m.try_add_connection(1, 2, 3).unwrap();

        assert_eq!(m.to_string(), "  u v x\nu . 1 .\nv 1 . 3\nx . 3 .\n");
    }
}
