use waymark_core::heuristic::Heuristic;
use waymark_core::search::Variant;

/// Parse search variant from string
pub fn parse_variant(s: &str) -> std::result::Result<Variant, String> {
    s.parse::<Variant>().map_err(|e| e.to_string())
}

/// Parse heuristic from string
pub fn parse_heuristic(s: &str) -> std::result::Result<Heuristic, String> {
    s.parse::<Heuristic>().map_err(|e| e.to_string())
}

/// Parse a finite, non-negative number (weights and budgets)
pub fn parse_non_negative(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be a finite number >= 0", s));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant_names() {
        assert_eq!(parse_variant("astar"), Ok(Variant::AStar));
        assert_eq!(
            parse_variant("Energy-Weighted-UCS"),
            Ok(Variant::EnergyWeightedUcs)
        );
        let err = parse_variant("bfs").unwrap_err();
        assert!(err.contains("budget-astar-alt"));
    }

    #[test]
    fn test_parse_heuristic_names() {
        assert_eq!(parse_heuristic("octile"), Ok(Heuristic::Octile));
        assert!(parse_heuristic("haversine").is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("0.76"), Ok(0.76));
        assert_eq!(parse_non_negative("0"), Ok(0.0));
        assert!(parse_non_negative("-0.5").is_err());
        assert!(parse_non_negative("inf").is_err());
        assert!(parse_non_negative("NaN").is_err());
        assert!(parse_non_negative("heavy").is_err());
    }
}
