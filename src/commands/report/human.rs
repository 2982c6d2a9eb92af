use super::SearchReport;
use waymark_core::tuning::{TuningOutcome, TuningReport};

/// Output one search in human-readable format
pub fn print_search(report: &SearchReport) {
    println!("Running {}", report.variant);

    let Some(result) = &report.result else {
        println!("No path found from {} to {}", report.source, report.target);
        println!();
        return;
    };

    println!("Shortest path: {}", result.path.join("->"));
    println!("Shortest distance: {}", result.distance);
    if let Some(energy) = result.energy {
        println!("Total energy cost: {}", energy);
    }
    println!("Nodes expanded: {}", result.expanded);
    if let Some(guidance) = &report.guidance {
        println!("Heuristic: {}", guidance.heuristic);
        println!("Weight: {:.2}", guidance.weight);
    }
    println!();
}

/// Output a weight sweep in human-readable format
pub fn print_tuning(report: &TuningReport) {
    println!("{} Weight Tuning", report.variant);
    for tuning in &report.results {
        match tuning.outcome {
            TuningOutcome::Admissible {
                expanded,
                weight,
                reduction,
            } => println!(
                "{}: Lowest is {} @ weight {:.2}; {:.1}% reduction",
                tuning.heuristic,
                expanded,
                weight,
                reduction * 100.0
            ),
            TuningOutcome::NotAdmissible => {
                println!("{}: Not admissible.", tuning.heuristic)
            }
        }
    }
    println!();
}
