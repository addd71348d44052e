use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::prelude::*;

/// Creates at most `m_ub` random connections with weights in `0..10` between vertices `0..n`.
/// Connections sharing endpoints (in either direction if undirected) are removed.
pub(crate) fn random_connections<R: Rng>(
    rng: &mut R,
    n: u32,
    m_ub: usize,
    directed: bool,
) -> Vec<(u32, u32, Weight)> {
    (0..m_ub)
        .map(|_| {
            (
                rng.random_range(0..n),
                rng.random_range(0..n),
                rng.random_range(0..10),
            )
        })
        .unique_by(|&(u, v, _)| if directed { (u, v) } else { (u.min(v), u.max(v)) })
        .collect()
}

/// Builds a graph on data `0..n` (inserted in random order) with the given connections
pub(crate) fn build_graph<R: Rng>(
    rng: &mut R,
    config: GraphConfig,
    n: u32,
    connections: &[(u32, u32, Weight)],
) -> Graph<u32> {
    let mut graph = Graph::new(config.with_capacity(n), NaturalOrder);
    let mut order = (0..n).collect_vec();
    order.shuffle(rng);
    for x in order {
        graph.insert(x).unwrap();
    }
    for &(u, v, w) in connections {
        graph.add_connection(&u, &v, w).unwrap();
    }
    graph
}

/// Returns which of the vertices `0..n` can be reached from `source`
pub(crate) fn reachable_oracle(
    n: u32,
    connections: &[(u32, u32, Weight)],
    directed: bool,
    source: u32,
) -> Vec<bool> {
    let mut reached = vec![false; n as usize];
    reached[source as usize] = true;
    loop {
        let mut changed = false;
        for &(u, v, _) in connections {
            for (a, b) in [(u, v), (v, u)].into_iter().take(if directed { 1 } else { 2 }) {
                if reached[a as usize] && !reached[b as usize] {
                    reached[b as usize] = true;
                    changed = true;
                }
            }
        }
        if !changed {
            return reached;
        }
    }
}

/// Bellman-Ford distances from `source`; `None` for unreachable vertices
pub(crate) fn distance_oracle(
    n: u32,
    connections: &[(u32, u32, Weight)],
    directed: bool,
    source: u32,
) -> Vec<Option<u64>> {
    let mut dist = vec![None; n as usize];
    dist[source as usize] = Some(0u64);
    for _ in 0..n {
        for &(u, v, w) in connections {
            for (a, b) in [(u, v), (v, u)].into_iter().take(if directed { 1 } else { 2 }) {
                if let Some(da) = dist[a as usize] {
                    let candidate = da + w as u64;
                    if dist[b as usize].is_none_or(|db| candidate < db) {
                        dist[b as usize] = Some(candidate);
                    }
                }
            }
        }
    }
    dist
}

/// Cheapest cost over all subsets of `n - 1` connections that connect `0..n`,
/// reading every connection as an undirected edge. `None` if the graph is disconnected.
pub(crate) fn spanning_tree_oracle(n: u32, connections: &[(u32, u32, Weight)]) -> Option<u64> {
    if n <= 1 {
        return Some(0);
    }
    let edges = connections.iter().filter(|(u, v, _)| u != v).collect_vec();

    edges
        .iter()
        .combinations(n as usize - 1)
        .filter(|subset| {
            let mut component = (0..n).collect_vec();
            for &&&(u, v, _) in subset {
                let (cu, cv) = (component[u as usize], component[v as usize]);
                if cu == cv {
                    return false;
                }
                component.iter_mut().filter(|c| **c == cv).for_each(|c| *c = cu);
            }
            true
        })
        .map(|subset| subset.iter().map(|(_, _, w)| *w as u64).sum())
        .min()
}

/// Every graph configuration should behave identically on the data-addressed API
macro_rules! test_graph_ops {
    ($env:ident, $config:expr) => {
        mod $env {
            use crate::{algo::*, prelude::*, testing::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng, seq::SliceRandom};
            use rand_pcg::Pcg64Mcg;

            fn config() -> GraphConfig {
                $config
            }

            fn directed() -> bool {
                config().is_directed()
            }

            /// `(in, out, total)` degrees and sorted neighbor data per vertex data
            fn snapshot(graph: &Graph<u32>, n: u32) -> Vec<((u32, u32, u32), Vec<(u32, Weight)>)> {
                (0..n)
                    .map(|x| {
                        let u = graph.id_of(&x).unwrap();
                        let vertex = graph.vertex(u).unwrap();
                        let neighbors = graph
                            .neighbors_of(u)
                            .map(|(v, w)| (*graph.data_of(v).unwrap(), w))
                            .sorted()
                            .collect_vec();
                        (
                            (vertex.in_degree(), vertex.out_degree(), vertex.degree()),
                            neighbors,
                        )
                    })
                    .collect()
            }

            #[test]
            fn insert_search_delete() {
                let rng = &mut Pcg64Mcg::seed_from_u64(1);

                for n in [1u32, 5, 20] {
                    let mut graph = build_graph(rng, config(), n, &[]);
                    assert_eq!(graph.number_of_vertices(), n);
                    assert!((0..n).all(|x| graph.search(&x)));
                    assert!(!graph.search(&n));
                    assert_eq!(graph.insert(0), Err(GraphError::DuplicateVertex));

                    let mut deleted = (0..n).filter(|_| rng.random_bool(0.5)).collect_vec();
                    deleted.shuffle(rng);
                    for x in &deleted {
                        assert_eq!(graph.delete(x), Ok(*x));
                        assert_eq!(graph.delete(x), Err(GraphError::VertexNotFound));
                    }

                    assert_eq!(graph.number_of_vertices(), n - deleted.len() as u32);
                    for x in 0..n {
                        assert_eq!(graph.search(&x), !deleted.contains(&x));
                        assert_eq!(graph.retrieve(&x).is_some(), !deleted.contains(&x));
                    }
                    assert_eq!(graph.vertices().count(), graph.len());

                    // freed slots can be filled again
                    for x in &deleted {
                        graph.insert(*x).unwrap();
                    }
                    assert_eq!(graph.number_of_vertices(), n);
                }
            }

            #[test]
            fn degrees_match_connections() {
                let rng = &mut Pcg64Mcg::seed_from_u64(2);

                for _ in 0..20 {
                    let n = 12;
                    let connections = random_connections(rng, n, 30, directed());
                    let mut graph = build_graph(rng, config(), n, &connections);
                    assert_eq!(graph.number_of_connections() as usize, connections.len());

                    let mut expected = vec![(0u32, 0u32); n as usize];
                    for &(u, v, _) in &connections {
                        if directed() {
                            expected[u as usize].1 += 1;
                            expected[v as usize].0 += 1;
                        } else {
                            expected[u as usize].0 += 1;
                            if u != v {
                                expected[v as usize].0 += 1;
                            }
                            expected[u as usize].1 = expected[u as usize].0;
                            expected[v as usize].1 = expected[v as usize].0;
                        }
                    }

                    for x in 0..n {
                        let vertex = graph.vertex(graph.id_of(&x).unwrap()).unwrap();
                        let (din, dout) = expected[x as usize];
                        assert_eq!(vertex.in_degree(), din);
                        assert_eq!(vertex.out_degree(), dout);
                        if directed() {
                            assert_eq!(vertex.degree(), din + dout);
                        } else {
                            assert_eq!(vertex.degree(), din);
                        }

                        if din + dout == 0 {
                            assert_eq!(graph.delete(&x), Ok(x));
                        } else {
                            assert_eq!(
                                graph.delete(&x),
                                Err(GraphError::DegreeNotZero {
                                    in_degree: din,
                                    out_degree: dout
                                })
                            );
                        }
                    }
                }
            }

            #[test]
            fn remove_then_readd_restores_state() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for _ in 0..20 {
                    let n = 10;
                    let connections = random_connections(rng, n, 25, directed());
                    let mut graph = build_graph(rng, config(), n, &connections);
                    let before = snapshot(&graph, n);
                    let m = graph.number_of_connections();

                    for &(u, v, w) in &connections {
                        assert_eq!(graph.remove_connection(&u, &v), Ok(w));
                        assert_eq!(graph.connection(&u, &v), None);
                        assert_eq!(graph.number_of_connections(), m - 1);
                        assert_eq!(
                            graph.remove_connection(&u, &v),
                            Err(GraphError::ConnectionNotFound)
                        );

                        assert_eq!(graph.add_connection(&u, &v, w), Ok(None));
                        assert_eq!(snapshot(&graph, n), before);
                    }

                    // replacing a weight keeps the degrees
                    if let Some(&(u, v, w)) = connections.first() {
                        assert_eq!(graph.add_connection(&u, &v, w + 1), Ok(Some(w)));
                        assert_eq!(graph.connection(&u, &v), Some(w + 1));
                        if !directed() {
                            assert_eq!(graph.connection(&v, &u), Some(w + 1));
                        }
                        assert_eq!(graph.number_of_connections(), m);
                        let after = snapshot(&graph, n);
                        for (b, a) in before.iter().zip(&after) {
                            assert_eq!(b.0, a.0);
                        }
                    }
                }
            }

            #[test]
            fn traversals_visit_reachable_set() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for _ in 0..20 {
                    let n = 15;
                    let connections = random_connections(rng, n, 18, directed());
                    let graph = build_graph(rng, config(), n, &connections);
                    let other = build_graph(
                        rng,
                        match config().representation() {
                            Representation::Matrix => config().with_representation(Representation::List),
                            Representation::List => config().with_representation(Representation::Matrix),
                        },
                        n,
                        &connections,
                    );

                    for s in 0..n {
                        let expected = reachable_oracle(n, &connections, directed(), s);
                        let visited_by = |g: &Graph<u32>, dfs: bool| {
                            let mut seen = Vec::new();
                            let mut record = |x: &u32| seen.push(*x);
                            if dfs {
                                g.depth_first_from(&s, &mut record).unwrap();
                            } else {
                                g.breadth_first_from(&s, &mut record).unwrap();
                            }
                            seen
                        };

                        for (g, dfs) in [(&graph, true), (&graph, false), (&other, true), (&other, false)] {
                            let seen = visited_by(g, dfs);
                            assert_eq!(seen.first(), Some(&s));
                            assert!(seen.iter().all_unique());
                            let mut reached = vec![false; n as usize];
                            seen.iter().for_each(|&x| reached[x as usize] = true);
                            assert_eq!(reached, expected);
                        }
                    }
                }
            }

            #[test]
            fn kruskal_matches_brute_force() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for _ in 0..40 {
                    let n = rng.random_range(2..=6u32);
                    let connections = random_connections(rng, n, 10, directed());
                    let graph = build_graph(rng, config(), n, &connections);
                    let mst = graph.minimum_spanning_tree();

                    // the chosen edges never close a cycle
                    assert_eq!(mst.edges().len() + mst.number_of_trees(), n as usize);

                    match spanning_tree_oracle(n, &connections) {
                        Some(cost) => {
                            assert!(mst.is_spanning());
                            assert_eq!(mst.edges().len(), n as usize - 1);
                            assert_eq!(mst.cost(), cost);
                        }
                        None => assert!(!mst.is_spanning()),
                    }

                    let root = graph.first_vertex().unwrap();
                    assert_eq!(mst.bfs(root).count() == n as usize, mst.is_spanning());
                }
            }

            #[test]
            fn dijkstra_matches_brute_force() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);

                for _ in 0..20 {
                    let n = 9;
                    let connections = random_connections(rng, n, 20, directed());
                    let graph = build_graph(rng, config(), n, &connections);

                    for s in 0..n {
                        let expected = distance_oracle(n, &connections, directed(), s);
                        let paths = graph.shortest_paths(&s).unwrap();

                        for x in 0..n {
                            let v = graph.id_of(&x).unwrap();
                            assert_eq!(paths.distance_to(v), expected[x as usize]);

                            match paths.path_to(v) {
                                Some(path) => {
                                    assert_eq!(path.first(), graph.id_of(&s).as_ref());
                                    let length: u64 = path
                                        .iter()
                                        .tuple_windows()
                                        .map(|(&a, &b)| graph.weight_of(a, b).unwrap() as u64)
                                        .sum();
                                    assert_eq!(Some(length), expected[x as usize]);
                                }
                                None => {
                                    assert!(expected[x as usize].is_none());
                                    assert_eq!(paths.raw_distance(v), INFINITE_DISTANCE);
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn router_scenario() {
                let mut net = Graph::new(config().with_capacity(5), NaturalOrder);
                for router in ['u', 'v', 'x', 'y', 'z'] {
                    net.insert(router).unwrap();
                }
                for (a, b, w) in [
                    ('u', 'v', 1),
                    ('u', 'y', 2),
                    ('y', 'x', 3),
                    ('x', 'v', 3),
                    ('x', 'z', 2),
                    ('z', 'v', 6),
                ] {
                    assert_eq!(net.add_connection(&a, &b, w), Ok(None));
                }

                let mst = net.minimum_spanning_tree();
                assert!(mst.is_spanning());
                assert_eq!(mst.cost(), 8);
                let data = |u: VertexId| *net.data_of(u).unwrap();
                let chosen = mst
                    .edges()
                    .iter()
                    .map(|e| {
                        let (a, b) = (data(e.src), data(e.dst));
                        (a.min(b), a.max(b), e.weight)
                    })
                    .sorted()
                    .collect_vec();
                assert_eq!(
                    chosen,
                    vec![('u', 'v', 1), ('u', 'y', 2), ('v', 'x', 3), ('x', 'z', 2)]
                );

                let paths = net.shortest_paths(&'u').unwrap();
                let distance = |c: char| paths.distance_to(net.id_of(&c).unwrap());
                if directed() {
                    assert_eq!(
                        ['u', 'v', 'x', 'y', 'z'].map(distance),
                        [Some(0), Some(1), Some(5), Some(2), Some(7)]
                    );
                } else {
                    assert_eq!(
                        ['u', 'v', 'x', 'y', 'z'].map(distance),
                        [Some(0), Some(1), Some(4), Some(2), Some(6)]
                    );
                    let z = net.id_of(&'z').unwrap();
                    let route: String = paths.path_to(z).unwrap().into_iter().map(data).collect();
                    assert_eq!(route, "uvxz");
                }

                assert!(net.delete(&'y').is_err());
                for (a, b) in [('u', 'y'), ('y', 'x')] {
                    net.remove_connection(&a, &b).unwrap();
                }
                assert_eq!(net.delete(&'y'), Ok('y'));
                assert_eq!(net.number_of_connections(), 4);
            }
        }
    };
}

pub(crate) use test_graph_ops;
