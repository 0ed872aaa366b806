use knapsack_rs::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::StudyPlanConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudyPlanOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: StudyPlanConfig,
}
