use crate::AdjacencyList;

/// Declares a large graph with an irregular structure.
///
/// The declarations include:
/// - Cluster 1: Dense cluster (50 nodes, ~60% connectivity)
/// - Cluster 2: Medium cluster (80 nodes, ~30% connectivity)
/// - Cluster 3: Large sparse cluster (150 nodes, ~8% connectivity)
/// - Hub nodes (20 nodes pointing into the clusters)
/// - Scattered nodes (100 nodes with one to three edges each)
/// - Isolated nodes (20 nodes without any edge)
/// - Long-range edges, reciprocal pairs and self loops
///
/// Node ids are `0..420`; node payloads equal the id and edge payloads count
/// edges in declaration order.
pub fn generate_large_adjacency_list() -> AdjacencyList<usize, usize, usize> {
    let mut outgoing: Vec<Vec<usize>> = Vec::new();
    let add_nodes = |outgoing: &mut Vec<Vec<usize>>, count: usize| {
        let start = outgoing.len();
        outgoing.resize_with(start + count, Vec::new);
        start..outgoing.len()
    };

    let cluster1 = add_nodes(&mut outgoing, 50);
    for i in cluster1.clone() {
        for j in (i + 1)..cluster1.end {
            if (i * 7 + j * 11) % 10 < 6 {
                outgoing[i].push(j);
            }
        }
    }

    let cluster2 = add_nodes(&mut outgoing, 80);
    for i in cluster2.clone() {
        for j in (i + 1)..cluster2.end {
            if (i * 13 + j * 17) % 10 < 3 {
                outgoing[i].push(j);
            }
        }
    }

    let cluster3 = add_nodes(&mut outgoing, 150);
    for i in cluster3.clone() {
        for j in (i + 1)..cluster3.end {
            if (i * 19 + j * 23) % 100 < 8 {
                outgoing[i].push(j);
            }
        }
    }

    let hubs = add_nodes(&mut outgoing, 20);
    for hub in hubs.clone() {
        for target in 0..hubs.start {
            if (hub * 29 + target * 31) % 7 < 2 {
                outgoing[hub].push(target);
            }
        }
    }

    let scattered = add_nodes(&mut outgoing, 100);
    for node in scattered.clone() {
        for c in 0..(node % 3) + 1 {
            outgoing[node].push((node * 41 + c * 43) % node);
        }
    }

    add_nodes(&mut outgoing, 20);

    let connected = scattered.end;
    for i in 0..200 {
        let source = (i * 61) % connected;
        let target = (i * 67 + 100) % connected;
        if source != target {
            outgoing[source].push(target);
        }
    }
    for i in 0..50 {
        let a = (i * 73 + 7) % connected;
        let b = (i * 79 + 11) % connected;
        if a != b {
            outgoing[a].push(b);
            outgoing[b].push(a);
        }
    }
    for i in 0..50 {
        let node = (i * 71) % connected;
        outgoing[node].push(node);
    }

    let mut edge_counter = 0;
    outgoing
        .into_iter()
        .enumerate()
        .fold(AdjacencyList::new(), |list, (id, targets)| {
            let edges: Vec<(usize, usize)> = targets
                .into_iter()
                .map(|target| {
                    edge_counter += 1;
                    (target, edge_counter)
                })
                .collect();
            list.add(id, id, edges)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_endpoint_is_declared() {
        let list = generate_large_adjacency_list();
        assert_eq!(list.num_nodes(), 420);
        assert!(list.num_edges() > 1000);
        assert!(crate::Graph::from_adjacency_list(&list).is_ok());
    }
}
