use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::debug;

use crate::entities::{Instance, Item};
use crate::io::ext_repr::ExtInstance;
use crate::util::assertions;

/// Imports an instance into the library.
///
/// Every item is validated (see [`Item::new`]) before any solver can see it.
/// The capacity of the external instance takes precedence over `default_capacity`.
pub fn import(ext_instance: &ExtInstance, default_capacity: f64) -> Result<Instance> {
    let items = ext_instance
        .items
        .iter()
        .map(|ext_item| Item::new(ext_item.id.clone(), ext_item.cost, ext_item.value))
        .collect::<Result<Vec<Item>, _>>()
        .with_context(|| format!("invalid item in instance '{}'", ext_instance.name))?;

    ensure!(
        assertions::item_ids_unique(&items),
        "all items should have unique ids, duplicates: {:?}",
        items.iter().map(|i| i.id()).duplicates().collect_vec()
    );

    let capacity = ext_instance.capacity.unwrap_or(default_capacity);
    let instance = Instance::new(items, capacity)?;

    debug!(
        "imported instance '{}' with {} items and capacity {}",
        ext_instance.name,
        instance.n_items(),
        instance.capacity()
    );
    Ok(instance)
}
