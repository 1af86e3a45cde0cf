use digraph::{GraphError, GraphStore, TraversalOrder, Weight};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

const LABELS: u8 = 12;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    AddVertexWithEdges(u8, Vec<(u8, Weight)>, Vec<(u8, Weight)>),
    RemoveVertex(u8),
    AddEdge(u8, u8, Weight),
    RemoveEdge(u8, u8),
}

fn label() -> impl Strategy<Value = u8> {
    0..LABELS
}

fn edge_list() -> impl Strategy<Value = Vec<(u8, Weight)>> {
    proptest::collection::vec((label(), 0..50i64), 0..4)
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        label().prop_map(Operation::AddVertex),
        (label(), edge_list(), edge_list()).prop_map(|(l, i, o)| Operation::AddVertexWithEdges(l, i, o)),
        label().prop_map(Operation::RemoveVertex),
        (label(), label(), 0..50i64).prop_map(|(a, b, w)| Operation::AddEdge(a, b, w)),
        (label(), label()).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
    ]
}

/// Reference model: a vertex set plus an edge map
#[derive(Default)]
struct Model {
    vertices: BTreeSet<u8>,
    edges: BTreeMap<(u8, u8), Weight>,
}

impl Model {
    fn remove_vertex(&mut self, l: u8) {
        self.vertices.remove(&l);
        self.edges.retain(|&(a, b), _| a != l && b != l);
    }
}

/// Edge list over labels `0..n` with every edge pointing from a lower to a higher label
fn dag_edges() -> impl Strategy<Value = (u8, Vec<(u8, u8, Weight)>)> {
    (2..LABELS).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0..20i64).prop_filter_map("self-loop", |(a, b, w)| match a.cmp(&b) {
            std::cmp::Ordering::Less => Some((a, b, w)),
            std::cmp::Ordering::Greater => Some((b, a, w)),
            std::cmp::Ordering::Equal => None,
        });
        (Just(n), proptest::collection::vec(edge, 0..40))
    })
}

/// Arbitrary directed graph over labels `0..n`, built in insertion order
fn random_graph() -> impl Strategy<Value = (u8, Vec<(u8, u8, Weight)>)> {
    (2..LABELS).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0..20i64).prop_filter("self-loop", |(a, b, _)| a != b);
        (Just(n), proptest::collection::vec(edge, 0..40))
    })
}

/// Like `random_graph`, but roughly one weight in five is negative
fn signed_graph() -> impl Strategy<Value = (u8, Vec<(u8, u8, Weight)>)> {
    (2..LABELS).prop_flat_map(|n| {
        let edge = (0..n, 0..n, -5..20i64).prop_filter("self-loop", |(a, b, _)| a != b);
        (Just(n), proptest::collection::vec(edge, 0..40))
    })
}

fn build(n: u8, edges: &[(u8, u8, Weight)], order: &[u8]) -> GraphStore<u8> {
    let mut g = GraphStore::with_capacity(n as usize);
    for &l in order {
        g.add_vertex(l);
    }
    for &(a, b, w) in edges {
        g.add_edge(&a, (b, w)).unwrap();
    }
    g
}

fn hop_distances(g: &GraphStore<u8>, start: u8) -> BTreeMap<u8, usize> {
    let mut dist = BTreeMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for &next in g.get_vertex(&v).unwrap().successors() {
            dist.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    dist
}

proptest! {
    #[test]
    fn test_store_matches_model(ops in proptest::collection::vec(operation(), 1..80)) {
        let mut store = GraphStore::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                Operation::AddVertex(l) => {
                    let added = store.add_vertex(l);
                    prop_assert_eq!(added, model.vertices.insert(l));
                }
                Operation::AddVertexWithEdges(l, incoming, outgoing) => {
                    let result = store.add_vertex_with_edges(l, incoming.clone(), outgoing.clone());
                    let loops = incoming.iter().chain(outgoing.iter()).any(|&(n, _)| n == l);
                    if loops {
                        prop_assert_eq!(result, Err(GraphError::SelfLoop(format!("{:?}", l))));
                        continue;
                    }
                    prop_assert!(result.is_ok());
                    model.vertices.insert(l);
                    for (n, w) in incoming {
                        model.vertices.insert(n);
                        model.edges.entry((n, l)).or_insert(w);
                    }
                    for (n, w) in outgoing {
                        model.vertices.insert(n);
                        model.edges.entry((l, n)).or_insert(w);
                    }
                }
                Operation::RemoveVertex(l) => {
                    let result = store.remove_vertex(&l);
                    prop_assert_eq!(result.is_ok(), model.vertices.contains(&l));
                    model.remove_vertex(l);
                }
                Operation::AddEdge(a, b, w) => {
                    let result = store.add_edge(&a, (b, w));
                    if !model.vertices.contains(&a) || !model.vertices.contains(&b) {
                        prop_assert!(matches!(result, Err(GraphError::VertexNotFound(_))));
                    } else if a == b {
                        prop_assert!(matches!(result, Err(GraphError::SelfLoop(_))));
                    } else {
                        let fresh = !model.edges.contains_key(&(a, b));
                        prop_assert_eq!(result, Ok(fresh));
                        model.edges.entry((a, b)).or_insert(w);
                    }
                }
                Operation::RemoveEdge(a, b) => {
                    let result = store.remove_edge(&a, &b);
                    if !model.vertices.contains(&a) || !model.vertices.contains(&b) {
                        prop_assert!(result.is_err());
                    } else {
                        prop_assert_eq!(result, Ok(model.edges.remove(&(a, b)).is_some()));
                    }
                }
            }

            prop_assert_eq!(store.check_invariants(), Ok(()));
            prop_assert_eq!(store.vertex_count(), model.vertices.len());
            prop_assert_eq!(store.edge_count(), model.edges.len());
        }

        for (pos, l) in store.labels().enumerate() {
            prop_assert_eq!(store.position(l), Some(pos));
        }
        for (&(a, b), &w) in &model.edges {
            prop_assert_eq!(store.edge_weight(&a, &b), Some(w));
            prop_assert_eq!(store.get_vertex(&b).unwrap().weight_from(&a), Some(w));
        }
    }

    #[test]
    fn test_add_then_remove_edge_restores_graph((n, edges) in random_graph(), a in 0..LABELS, b in 0..LABELS) {
        let order: Vec<u8> = (0..n).collect();
        let mut edges = edges;
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges.dedup_by_key(|e| (e.0, e.1));
        let mut g = build(n, &edges, &order);
        prop_assume!(a < n && b < n && a != b && !g.has_edge(&a, &b));

        let before = g.clone();
        prop_assert_eq!(g.add_edge(&a, (b, 5)), Ok(true));
        prop_assert_eq!(g.remove_edge(&a, &b), Ok(true));

        prop_assert_eq!(g.edge_count(), before.edge_count());
        for l in 0..n {
            prop_assert_eq!(g.get_vertex(&l), before.get_vertex(&l));
        }
    }

    #[test]
    fn test_topological_sort_respects_edges((n, edges) in dag_edges()) {
        let mut edges = edges;
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges.dedup_by_key(|e| (e.0, e.1));
        let order: Vec<u8> = (0..n).rev().collect();
        let g = build(n, &edges, &order);

        let sorted = g.topological_sort().unwrap();
        prop_assert_eq!(sorted.len(), n as usize);
        let rank: BTreeMap<u8, usize> = sorted.iter().enumerate().map(|(i, &l)| (l, i)).collect();
        for &(a, b, _) in &edges {
            prop_assert!(rank[&a] < rank[&b], "{} -> {} out of order in {:?}", a, b, sorted);
        }

        // closing a path back to its start makes it cyclic
        if let Some(&(a, b, _)) = edges.first() {
            let mut cyclic = g.clone();
            cyclic.add_edge(&b, (a, 1)).unwrap();
            prop_assert_eq!(cyclic.topological_sort(), None);
        }
    }

    #[test]
    fn test_bfs_visits_in_hop_order((n, edges) in random_graph(), start in 0..LABELS) {
        let mut edges = edges;
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges.dedup_by_key(|e| (e.0, e.1));
        let order: Vec<u8> = (0..n).collect();
        let g = build(n, &edges, &order);
        prop_assume!(start < n);

        let bfs = g.bfs_traversal(&start).unwrap();
        let hops = hop_distances(&g, start);

        prop_assert_eq!(bfs.len(), hops.len());
        prop_assert_eq!(bfs.iter().copied().collect::<BTreeSet<_>>().len(), bfs.len());
        prop_assert_eq!(bfs[0], start);
        for pair in bfs.windows(2) {
            prop_assert!(hops[&pair[0]] <= hops[&pair[1]]);
        }
    }

    #[test]
    fn test_dfs_settles_successors_first((n, edges) in dag_edges(), start in 0..LABELS) {
        let mut edges = edges;
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges.dedup_by_key(|e| (e.0, e.1));
        let order: Vec<u8> = (0..n).collect();
        let g = build(n, &edges, &order);
        prop_assume!(start < n);

        let settled = g.dfs_traversal(&start, TraversalOrder::Settlement).unwrap();
        let visited = g.dfs_traversal(&start, TraversalOrder::Visitation).unwrap();
        prop_assert_eq!(settled.iter().collect::<BTreeSet<_>>(), visited.iter().collect::<BTreeSet<_>>());
        prop_assert_eq!(settled.last(), Some(&start));

        let rank: BTreeMap<u8, usize> = settled.iter().enumerate().map(|(i, &l)| (l, i)).collect();
        for &(a, b, _) in &edges {
            if let (Some(ra), Some(rb)) = (rank.get(&a), rank.get(&b)) {
                prop_assert!(rb < ra, "{} settled before its successor {}", a, b);
            }
        }
    }

    #[test]
    fn test_shortest_paths_match_relaxation((n, edges) in random_graph(), start in 0..LABELS) {
        let mut edges = edges;
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges.dedup_by_key(|e| (e.0, e.1));
        let order: Vec<u8> = (0..n).collect();
        let g = build(n, &edges, &order);
        prop_assume!(start < n);

        // Bellman-Ford reference
        let mut best: BTreeMap<u8, Weight> = BTreeMap::from([(start, 0)]);
        for _ in 0..n {
            for &(a, b, w) in &edges {
                if let Some(&da) = best.get(&a) {
                    let entry = best.entry(b).or_insert(Weight::MAX);
                    *entry = (*entry).min(da + w);
                }
            }
        }

        let paths = g.shortest_path(&start).unwrap();
        prop_assert_eq!(paths.len(), best.len());
        let mut last = 0;
        for l in paths.settled() {
            let d = paths.distance(l).unwrap();
            prop_assert_eq!(Some(&d), best.get(l));
            prop_assert!(d >= last);
            last = d;

            let route = paths.path_to(l).unwrap();
            let cost: Weight = route.path.windows(2).map(|p| g.edge_weight(&p[0], &p[1]).unwrap()).sum();
            prop_assert_eq!(cost, d);
        }
    }

    #[test]
    fn test_reachable_negative_edge_fails_shortest_path((n, edges) in signed_graph(), start in 0..LABELS) {
        let mut edges = edges;
        edges.sort_by_key(|&(a, b, _)| (a, b));
        edges.dedup_by_key(|e| (e.0, e.1));
        let order: Vec<u8> = (0..n).collect();
        let g = build(n, &edges, &order);
        prop_assume!(start < n);

        let reachable = hop_distances(&g, start);
        let negative_reachable = edges.iter().any(|&(a, _, w)| w < 0 && reachable.contains_key(&a));

        match g.shortest_path(&start) {
            Err(GraphError::NegativeWeight { from, to, weight }) => {
                prop_assert!(negative_reachable);
                prop_assert!(weight < 0);
                let (a, b): (u8, u8) = (from.parse().unwrap(), to.parse().unwrap());
                prop_assert!(reachable.contains_key(&a));
                prop_assert_eq!(g.edge_weight(&a, &b), Some(weight));
            }
            Ok(paths) => {
                prop_assert!(!negative_reachable);
                prop_assert_eq!(paths.len(), reachable.len());
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}
