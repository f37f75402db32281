//! Connectivity and shortest-path tests.

use edgemap::DirectedGraph;

/// Fixed DAG fixture: vertices 1..=9, components {1..=7} and {8, 9}.
fn dag() -> DirectedGraph<u64> {
    let graph = DirectedGraph::new();
    for i in 1..=9u64 {
        assert!(graph.add_node(i));
    }

    graph.add_edge(1, 7, "1 -> 7", 9.0);
    graph.add_edge(3, 4, "3 -> 4", 2.0);
    graph.add_edge(4, 2, "4 -> 2", 5.0);
    graph.add_edge(5, 7, "5 -> 7", 1.0);
    graph.add_edge(6, 5, "6 -> 5", 3.0);
    graph.add_edge(7, 2, "7 -> 2", 5.0);

    // Vertices 8 and 9 are a separate component
    graph.add_edge(8, 9, "8 -> 9", 8.0);
    graph
}

fn shortest_path_graph() -> DirectedGraph<u64> {
    let graph = DirectedGraph::new();
    graph.add_edge(1, 2, "label1", 4.0);
    graph.add_edge(1, 3, "label2", 2.0);
    graph.add_edge(2, 3, "label3", 5.0);
    graph.add_edge(2, 4, "label4", 10.0);
    graph.add_edge(3, 5, "label5", 3.0);
    graph.add_edge(5, 4, "label6", 4.0);
    graph.add_edge(4, 6, "label7", 11.0);
    graph
}

#[test]
fn test_connected_adjacent() {
    let graph = dag();
    for (u, v) in [(1, 7), (3, 4), (4, 2), (5, 7), (6, 5), (7, 2), (8, 9)] {
        assert!(graph.is_connected(&u, &v), "{} ~ {}", u, v);
    }
}

#[test]
fn test_connected_adjacent_reverse_direction() {
    let graph = dag();
    for (u, v) in [(7, 1), (4, 3), (2, 4), (7, 5), (5, 6), (2, 7), (9, 8)] {
        assert!(graph.is_connected(&u, &v), "{} ~ {}", u, v);
    }
}

#[test]
fn test_connected_two_degrees_of_separation() {
    let graph = dag();
    for (u, v) in [(6, 7), (1, 2), (5, 2), (3, 2)] {
        assert!(graph.is_connected(&u, &v), "{} ~ {}", u, v);
        assert!(graph.is_connected(&v, &u), "{} ~ {}", v, u);
    }
}

#[test]
fn test_connected_across_the_component() {
    let graph = dag();
    assert!(graph.is_connected(&6, &1));
    assert!(graph.is_connected(&3, &1));
    assert!(graph.is_connected(&5, &4));
    assert!(graph.is_connected(&3, &6));
}

#[test]
fn test_not_connected_across_components() {
    let graph = dag();
    for i in 1..=7u64 {
        assert!(!graph.is_connected(&i, &8));
        assert!(!graph.is_connected(&8, &i));
        assert!(!graph.is_connected(&i, &9));
        assert!(!graph.is_connected(&9, &i));
    }
}

#[test]
fn test_connectivity_is_symmetric() {
    let graph = dag();
    for u in 1..=9u64 {
        for v in 1..=9u64 {
            assert_eq!(
                graph.is_connected(&u, &v),
                graph.is_connected(&v, &u),
                "asymmetry at ({}, {})",
                u,
                v
            );
        }
    }
}

#[test]
fn test_self_connectivity_requires_loop() {
    let graph = dag();
    assert!(!graph.is_connected(&1, &1));

    graph.add_edge(1, 1, "loop", 1.0);
    assert!(graph.is_connected(&1, &1));
}

#[test]
fn test_connectivity_absent_vertices() {
    let graph = dag();
    assert!(!graph.is_connected(&1, &99));
    assert!(!graph.is_connected(&99, &1));
    assert!(!graph.is_connected(&99, &99));
}

#[test]
fn test_shortest_path_end_to_end() {
    let graph = shortest_path_graph();

    let path = graph.shortest_path(&1, &6);
    assert_eq!(path, vec![1, 3, 5, 4, 6]);

    let total: f64 = path
        .windows(2)
        .map(|pair| graph.get_edge(&pair[0], &pair[1]).unwrap().weight)
        .sum();
    assert!((total - 20.0).abs() < f64::EPSILON);

    // No directed path in the reverse direction.
    assert!(graph.shortest_path(&6, &1).is_empty());
}

#[test]
fn test_shortest_path_endpoints() {
    let graph = shortest_path_graph();
    for dest in 2..=6u64 {
        let path = graph.shortest_path(&1, &dest);
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&dest));
    }
}

#[test]
fn test_shortest_path_minimality_brute_force() {
    // Compare Dijkstra against exhaustive path enumeration on the fixed graph.
    let graph = shortest_path_graph();

    fn enumerate(
        graph: &DirectedGraph<u64>,
        current: u64,
        dest: u64,
        seen: &mut Vec<u64>,
        weight: f64,
        best: &mut f64,
    ) {
        if current == dest {
            if weight < *best {
                *best = weight;
            }
            return;
        }
        for (next, edge) in graph.outgoing_edges(&current) {
            if !seen.contains(&next) {
                seen.push(next);
                enumerate(graph, next, dest, seen, weight + edge.weight, best);
                seen.pop();
            }
        }
    }

    for dest in 2..=6u64 {
        let path = graph.shortest_path(&1, &dest);
        assert!(!path.is_empty());
        let dijkstra: f64 = path
            .windows(2)
            .map(|pair| graph.get_edge(&pair[0], &pair[1]).unwrap().weight)
            .sum();

        let mut best = f64::INFINITY;
        enumerate(&graph, 1, dest, &mut vec![1], 0.0, &mut best);
        assert!(
            (dijkstra - best).abs() < 1e-9,
            "dest {}: dijkstra {} vs brute force {}",
            dest,
            dijkstra,
            best
        );
    }
}

#[test]
fn test_shortest_path_absent_endpoints() {
    let graph = shortest_path_graph();
    assert!(graph.shortest_path(&1, &99).is_empty());
    assert!(graph.shortest_path(&99, &1).is_empty());
}

#[test]
fn test_shortest_path_source_is_destination() {
    let graph = shortest_path_graph();
    assert_eq!(graph.shortest_path(&1, &1), vec![1]);
}

#[test]
fn test_shortest_path_disconnected_components() {
    let graph = dag();
    assert!(graph.shortest_path(&1, &9).is_empty());
    assert_eq!(graph.shortest_path(&8, &9), vec![8, 9]);
}

#[test]
fn test_shortest_path_prefers_total_weight_over_hops() {
    let graph = DirectedGraph::new();
    graph.add_edge(1, 4, "direct", 10.0);
    graph.add_edge(1, 2, "", 2.0);
    graph.add_edge(2, 3, "", 2.0);
    graph.add_edge(3, 4, "", 2.0);
    assert_eq!(graph.shortest_path(&1, &4), vec![1, 2, 3, 4]);
}

#[test]
fn test_shortest_path_deterministic_tie_break() {
    // Two equal-weight paths through the diamond; the smaller intermediate
    // vertex wins.
    let graph = DirectedGraph::new();
    graph.add_edge(1, 2, "", 1.0);
    graph.add_edge(1, 3, "", 1.0);
    graph.add_edge(2, 4, "", 1.0);
    graph.add_edge(3, 4, "", 1.0);

    for _ in 0..20 {
        assert_eq!(graph.shortest_path(&1, &4), vec![1, 2, 4]);
    }
}

#[test]
fn test_dot_rendering_of_query_results() {
    let graph = DirectedGraph::new();
    graph.add_edge(1, 2, "hop", 4.0);
    graph.add_node(7);

    let dot = edgemap::to_dot(&graph);
    assert!(dot.contains("\"1\" -> \"2\" [label=\"hop\", weight=4];"));
    // Isolated vertex still renders as a node statement.
    assert!(dot.contains("\"7\";"));
}

#[test]
fn test_dot_output_is_deterministic() {
    let graph = DirectedGraph::new();
    graph.add_edge(3, 1, "c", 1.0);
    graph.add_edge(1, 2, "a", 2.0);
    graph.add_edge(1, 3, "b", 3.0);

    let first = edgemap::to_dot(&graph);
    for _ in 0..10 {
        assert_eq!(edgemap::to_dot(&graph), first);
    }
    // Vertices and edges come out in sorted order.
    let one = first.find("\"1\" -> \"2\"").unwrap();
    let two = first.find("\"1\" -> \"3\"").unwrap();
    let three = first.find("\"3\" -> \"1\"").unwrap();
    assert!(one < two && two < three);
}

#[test]
fn test_dot_escapes_labels() {
    let graph = DirectedGraph::new();
    graph.add_edge(1, 2, "say \"hi\" \\ bye", 1.0);

    let dot = edgemap::to_dot(&graph);
    assert!(dot.contains(r#"label="say \"hi\" \\ bye""#));
}
