use serde::{Deserialize, Serialize};

/// Configuration of all solvers
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct SolverConfig {
    /// Configuration of the dynamic programming solver
    #[serde(default)]
    pub dp: DPConfig,
    /// Configuration of the branch-and-bound solver
    #[serde(default)]
    pub bnb: BnBConfig,
}

/// Configuration of the dynamic programming solver
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct DPConfig {
    /// Number of grid cells per unit of capacity. The grid width is `1 / scale`.
    pub scale: u32,
    /// Rounding applied to the costs when mapping them onto the grid. The capacity is always floored.
    pub rounding: GridRounding,
    /// Maximum number of cells the table may contain, `(n_items + 1) * (grid_capacity + 1)`
    pub max_table_cells: usize,
}

impl Default for DPConfig {
    fn default() -> Self {
        Self {
            scale: 100,
            rounding: GridRounding::Floor,
            max_table_cells: 50_000_000,
        }
    }
}

/// How costs which do not lie on the grid are mapped onto it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GridRounding {
    /// Truncate towards the lower grid cell. Lossy: off-grid costs are underestimated.
    #[default]
    Floor,
    /// Round up to the next grid cell. Selections are always feasible in real units,
    /// but an off-grid optimum may be missed.
    Ceil,
}

/// Configuration of the branch-and-bound solver.
/// Both limits are checked once per node taken from the frontier.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BnBConfig {
    /// Wall-clock limit of the search in milliseconds, unlimited if not defined
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
    /// Maximum number of nodes to expand, unlimited if not defined
    #[serde(default)]
    pub node_limit: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.dp.scale, 100);
        assert_eq!(config.dp.rounding, GridRounding::Floor);
        assert_eq!(config.bnb.time_limit_ms, None);
        assert_eq!(config.bnb.node_limit, None);
    }

    #[test]
    fn test_partial_dp_section() {
        let config: SolverConfig = serde_json::from_str(r#"{ "dp": { "rounding": "ceil" } }"#).unwrap();
        assert_eq!(config.dp.rounding, GridRounding::Ceil);
        assert_eq!(config.dp.scale, 100);
        assert_eq!(config.dp.max_table_cells, 50_000_000);
        assert_eq!(config.bnb, BnBConfig::default());
    }
}
