use knapsack_rs::entities::{Instance, Solution};

/// Renders a solution as a plain-text study plan
pub fn render(instance: &Instance, solution: &Solution) -> String {
    let quality = match (solution.strategy.is_exact(), solution.proven_optimal) {
        (true, true) => "optimal",
        (true, false) => "best found, optimality not proven",
        (false, _) => "approximate",
    };

    let mut lines = vec![
        format!("Strategy: {} ({quality})", solution.strategy),
        "Optimal topics to study:".to_string(),
    ];
    lines.extend(solution.selection.iter().map(|item| {
        format!(
            "Topic: {}, Study Time: {:.2}, Value: {:.2}",
            item.id(),
            item.cost(),
            item.value()
        )
    }));
    lines.push(String::new());
    lines.push(format!(
        "Total study time: {:.2} of {:.2}",
        solution.cost(),
        instance.capacity()
    ));
    lines.push(format!("Maximum value of topics: {:.2}", solution.value));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapsack_rs::solvers::{GreedySolver, Solver};

    #[test]
    fn test_render() {
        let instance =
            Instance::from_records([("A", 2.0, 10.0), ("B", 3.0, 15.0), ("C", 4.0, 12.0)], 5.0)
                .unwrap();
        let solution = GreedySolver.solve(&instance).unwrap();
        let report = render(&instance, &solution);
        assert!(report.starts_with("Strategy: greedy (approximate)"));
        assert!(report.contains("Topic: A, Study Time: 2.00, Value: 10.00"));
        assert!(report.contains("Topic: B, Study Time: 3.00, Value: 15.00"));
        assert!(!report.contains("Topic: C"));
        assert!(report.ends_with("Maximum value of topics: 25.00"));
    }

    #[test]
    fn test_render_layout() {
        let instance = Instance::from_records([("A", 2.0, 10.0)], 1.0).unwrap();
        let solution = GreedySolver.solve(&instance).unwrap();
        let lines = render(&instance, &solution).lines().map(String::from).collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Strategy: greedy (approximate)",
                "Optimal topics to study:",
                "",
                "Total study time: 0.00 of 1.00",
                "Maximum value of topics: 0.00",
            ]
        );
    }
}
