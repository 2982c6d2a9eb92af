//! Search and tuning properties on a small grid

use std::collections::HashMap;
use std::fs;

use serde_json::{json, Map, Value};
use tempfile::tempdir;

use waymark_core::config::DataConfig;
use waymark_core::graph::{GraphData, GraphProvider, NodeId, Point};
use waymark_core::heuristic::Heuristic;
use waymark_core::search::{
    astar_search, run_variant, uniform_cost_search, Guidance, SearchOptions, SearchResult,
    Variant,
};
use waymark_core::tuning::{tune_variant, TuningOptions, TuningOutcome};

const SIZE: i64 = 7;

fn id(x: i64, y: i64) -> NodeId {
    format!("r{y}c{x}")
}

/// Directed edges of a 4-connected grid, unit distance, varying energy
fn grid_edges() -> Vec<(NodeId, NodeId, f64, f64)> {
    let mut edges = Vec::new();
    for y in 0..SIZE {
        for x in 0..SIZE {
            for (nx, ny) in [(x + 1, y), (x, y + 1), (x - 1, y), (x, y - 1)] {
                if (0..SIZE).contains(&nx) && (0..SIZE).contains(&ny) {
                    let cost = 1.0 + ((x + y + nx + ny) % 3) as f64;
                    edges.push((id(x, y), id(nx, ny), 1.0, cost));
                }
            }
        }
    }
    edges
}

fn grid() -> GraphData {
    let mut builder = GraphData::builder();
    for y in 0..SIZE {
        for x in 0..SIZE {
            builder = builder.node(id(x, y), Point::new(x, y));
        }
    }
    for (from, to, distance, cost) in grid_edges() {
        builder = builder.edge(from, to, distance, cost);
    }
    builder.build()
}

fn across() -> SearchOptions {
    SearchOptions::new(id(0, 3), id(SIZE - 1, 3)).with_budget(1_000.0)
}

fn guidance(variant: Variant) -> Option<Guidance> {
    variant
        .is_informed()
        .then(|| Guidance::new(Heuristic::Manhattan, 1.0))
}

fn assert_valid_path(graph: &GraphData, opts: &SearchOptions, result: &SearchResult) {
    assert_eq!(result.path.first(), Some(&opts.source));
    assert_eq!(result.path.last(), Some(&opts.target));

    let mut distance = 0.0;
    let mut energy = 0.0;
    for pair in result.path.windows(2) {
        assert!(
            graph.neighbors(&pair[0]).contains(&pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
        distance += graph.distance(&pair[0], &pair[1]).unwrap();
        energy += graph.cost(&pair[0], &pair[1]).unwrap();
    }

    assert_eq!(result.distance, distance);
    if let Some(reported) = result.energy {
        assert_eq!(reported, energy);
    }
}

#[test]
fn test_astar_expands_only_the_corridor() {
    let graph = grid();
    let opts = across();

    let ucs = uniform_cost_search(&graph, &opts).unwrap().unwrap();
    let astar = astar_search(&graph, &opts, Guidance::new(Heuristic::Manhattan, 1.0))
        .unwrap()
        .unwrap();

    assert_eq!(ucs.distance, 6.0);
    assert_eq!(astar.distance, ucs.distance);
    assert_eq!(astar.expanded, 7);
    // every node closer than the target is finalized first
    assert!(ucs.expanded >= 31, "ucs expanded {}", ucs.expanded);
    assert!(astar.expanded < ucs.expanded);
}

#[test]
fn test_tiny_weight_approaches_ucs() {
    let graph = grid();
    let opts = across();

    let ucs = uniform_cost_search(&graph, &opts).unwrap().unwrap();
    let faint = astar_search(&graph, &opts, Guidance::new(Heuristic::Manhattan, 0.01))
        .unwrap()
        .unwrap();

    assert_eq!(faint.distance, ucs.distance);
    assert!(faint.expanded > 7);
    assert!(faint.expanded <= ucs.expanded);
}

#[test]
fn test_zero_weight_matches_ucs_cost() {
    let graph = grid();
    let opts = across();

    let ucs = uniform_cost_search(&graph, &opts).unwrap().unwrap();
    for heuristic in Heuristic::ALL {
        let blind = astar_search(&graph, &opts, Guidance::new(heuristic, 0.0))
            .unwrap()
            .unwrap();
        assert_eq!(blind.distance, ucs.distance, "{heuristic}");
        assert_eq!(blind.expanded, ucs.expanded, "{heuristic}");
    }
}

#[test]
fn test_admissible_heuristics_keep_optimal_distance() {
    let graph = grid();
    let opts = across();

    for heuristic in Heuristic::ALL {
        let result = astar_search(&graph, &opts, Guidance::new(heuristic, 1.0))
            .unwrap()
            .unwrap();
        assert_eq!(result.distance, 6.0, "{heuristic}");
    }
}

#[test]
fn test_tuning_finds_full_weight() {
    let graph = grid();
    let opts = across();
    let options = TuningOptions {
        steps: 100,
        heuristics: vec![Heuristic::Manhattan],
    };

    let (reference, report) = tune_variant(&graph, &opts, Variant::AStar, &options).unwrap();

    assert_eq!(report.reference_expanded, reference.expanded);
    match report.results[0].outcome {
        TuningOutcome::Admissible {
            expanded,
            weight,
            reduction,
        } => {
            assert_eq!(expanded, 7);
            assert_eq!(weight, 1.0);
            assert!(reduction > 0.0 && reduction < 1.0);
        }
        ref other => panic!("expected an admissible weight, got {other:?}"),
    }
}

#[test]
fn test_every_variant_returns_a_valid_path() {
    let graph = grid();
    let opts = across();

    for variant in Variant::ALL {
        let result = run_variant(&graph, &opts, variant, guidance(variant))
            .unwrap()
            .unwrap_or_else(|| panic!("{variant} found no path"));
        assert_valid_path(&graph, &opts, &result);
    }
}

#[test]
fn test_budget_results_stay_within_budget() {
    let graph = grid();

    for budget in [5.0, 8.0, 12.0, 20.0, 1_000.0] {
        let opts = across().with_budget(budget);
        for variant in [
            Variant::BudgetUcs,
            Variant::BudgetAStar,
            Variant::BudgetAStarAlt,
        ] {
            if let Some(result) = run_variant(&graph, &opts, variant, guidance(variant)).unwrap() {
                assert_valid_path(&graph, &opts, &result);
                let energy = result.energy.unwrap();
                assert!(energy <= budget, "{variant} spent {energy} of {budget}");
            }
        }
    }
}

#[test]
fn test_budget_below_any_route_finds_nothing() {
    let graph = grid();
    // six hops, each costing at least 1
    let opts = across().with_budget(5.0);

    assert_eq!(
        run_variant(&graph, &opts, Variant::BudgetUcs, None).unwrap(),
        None
    );
}

#[test]
fn test_repeated_searches_match() {
    let graph = grid();
    let opts = across();

    for variant in Variant::ALL {
        let first = run_variant(&graph, &opts, variant, guidance(variant)).unwrap();
        let second = run_variant(&graph, &opts, variant, guidance(variant)).unwrap();
        assert_eq!(first, second, "{variant}");
    }
}

#[test]
fn test_loaded_grid_matches_built_grid() {
    let dir = tempdir().unwrap();

    let mut adjacency: Map<String, Value> = Map::new();
    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut costs: HashMap<String, f64> = HashMap::new();
    let mut coordinates: Map<String, Value> = Map::new();
    for y in 0..SIZE {
        for x in 0..SIZE {
            adjacency.insert(id(x, y), json!([]));
            coordinates.insert(id(x, y), json!([x, y]));
        }
    }
    for (from, to, distance, cost) in grid_edges() {
        if let Some(Value::Array(neighbors)) = adjacency.get_mut(&from) {
            neighbors.push(json!(to));
        }
        distances.insert(format!("{from},{to}"), distance);
        costs.insert(format!("{from},{to}"), cost);
    }

    let write = |name: &str, value: Value| {
        fs::write(dir.path().join(name), serde_json::to_string(&value).unwrap()).unwrap();
    };
    write("G.json", Value::Object(adjacency));
    write("Dist.json", json!(distances));
    write("Cost.json", json!(costs));
    write("Coord.json", Value::Object(coordinates));

    let loaded = GraphData::load(dir.path(), &DataConfig::default()).unwrap();
    let built = grid();
    assert_eq!(loaded, built);

    let opts = across();
    for variant in Variant::ALL {
        assert_eq!(
            run_variant(&loaded, &opts, variant, guidance(variant)).unwrap(),
            run_variant(&built, &opts, variant, guidance(variant)).unwrap(),
            "{variant}"
        );
    }
}
