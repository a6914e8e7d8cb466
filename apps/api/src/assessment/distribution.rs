use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::grid::{all_box_keys, to_box_key};
use crate::models::employee::{Department, Employee};

/// Head-count per grid cell. Every box key is present, including empty ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDistribution {
    /// Department name when the distribution was filtered.
    pub department: Option<String>,
    pub cells: BTreeMap<String, usize>,
    pub assessed: usize,
    pub unassessed: usize,
}

pub fn grid_distribution(
    employees: &[Employee],
    department: Option<&Department>,
) -> GridDistribution {
    let department_id = department.map(|d| d.id);
    let mut cells: BTreeMap<String, usize> = all_box_keys().into_iter().map(|k| (k, 0)).collect();
    let mut assessed = 0;
    let mut unassessed = 0;

    for employee in employees
        .iter()
        .filter(|e| department_id.is_none() || e.department_id == department_id)
    {
        match &employee.assessment {
            Some(a) => {
                // Recompute rather than trust a caller-supplied key.
                let key = to_box_key(a.performance, a.potential);
                *cells.entry(key).or_insert(0) += 1;
                assessed += 1;
            }
            None => unassessed += 1,
        }
    }

    GridDistribution {
        department: department.map(|d| d.name.clone()),
        cells,
        assessed,
        unassessed,
    }
}
