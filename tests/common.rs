use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

pub fn waymark() -> Command {
    cargo_bin_cmd!("waymark")
}

/// Four-node graph: A -> B -> D is short (distance 2), A -> C -> D is long
/// (distance 6); every edge costs 1 energy
pub fn write_scenario_data(dir: &Path) {
    fs::write(
        dir.join("G.json"),
        r#"{"A": ["B", "C"], "B": ["D"], "C": ["D"], "D": []}"#,
    )
    .unwrap();
    fs::write(
        dir.join("Dist.json"),
        r#"{"A,B": 1, "B,D": 1, "A,C": 5, "C,D": 1}"#,
    )
    .unwrap();
    fs::write(
        dir.join("Cost.json"),
        r#"{"A,B": 1, "B,D": 1, "A,C": 1, "C,D": 1}"#,
    )
    .unwrap();
    fs::write(
        dir.join("Coord.json"),
        r#"{"A": [0, 0], "B": [1, 0], "C": [2, 1], "D": [2, 0]}"#,
    )
    .unwrap();
}

/// Scenario data plus a waymark.toml searching from A to D
#[allow(dead_code)]
pub fn write_scenario(dir: &Path) {
    write_scenario_data(dir);
    fs::write(
        dir.join("waymark.toml"),
        "[search]\nsource = \"A\"\ntarget = \"D\"\nenergy_budget = 100.0\n\n[tuning]\nsteps = 10\n",
    )
    .unwrap();
}
