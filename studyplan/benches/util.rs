use itertools::Itertools;
use knapsack_rs::entities::{Instance, Item};
use rand::Rng;
use rand::SeedableRng;
use rand::prelude::SmallRng;

pub const N_ITEMS_RANGE: [usize; 4] = [10, 25, 50, 100];

/// Fraction of the total cost of all items available as capacity
pub const CAPACITY_RATIO: f64 = 0.4;

/// Uncorrelated random instance with costs on the 0.01 grid
pub fn create_instance(n_items: usize, seed: u64) -> Instance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let items = (0..n_items)
        .map(|i| {
            let cost = rng.random_range(10..=400) as f64 / 100.0;
            let value = rng.random_range(1..=100) as f64;
            Item::new(format!("topic_{i}"), cost, value).unwrap()
        })
        .collect_vec();
    let total_cost = items.iter().map(|item| item.cost()).sum::<f64>();
    let capacity = (total_cost * CAPACITY_RATIO * 100.0).floor() / 100.0;
    Instance::new(items, capacity).unwrap()
}
