//! Per-cluster composite statistics.

use devindex_core::types::ClusterModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub id: String,
    pub name: String,
}

/// Summary of one cluster. Numeric fields are 0 for an empty cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStats {
    pub cluster: usize,
    pub count: usize,
    pub avg_composite_index: f64,
    pub min_index: f64,
    pub max_index: f64,
    pub members: Vec<ClusterMember>,
}

/// One entry per cluster index `0..model.k`, members in input order.
///
/// `entities` yields `(id, name, composite)`; ids the model did not assign
/// are skipped.
pub fn cluster_stats<'a, I>(model: &ClusterModel, entities: I) -> Vec<ClusterStats>
where
    I: IntoIterator<Item = (&'a str, &'a str, f64)>,
{
    let mut grouped: Vec<Vec<(ClusterMember, f64)>> = vec![Vec::new(); model.k];
    for (id, name, composite) in entities {
        let Some(slot) = model.cluster_of(id).and_then(|c| grouped.get_mut(c)) else {
            continue;
        };
        slot.push((
            ClusterMember {
                id: id.to_string(),
                name: name.to_string(),
            },
            composite,
        ));
    }

    grouped
        .into_iter()
        .enumerate()
        .map(|(cluster, entries)| {
            let count = entries.len();
            let (sum, min, max) = entries.iter().fold(
                (0.0, f64::INFINITY, f64::NEG_INFINITY),
                |(sum, min, max), (_, v)| (sum + v, min.min(*v), max.max(*v)),
            );
            let (avg, min, max) = if count == 0 {
                (0.0, 0.0, 0.0)
            } else {
                (sum / count as f64, min, max)
            };
            ClusterStats {
                cluster,
                count,
                avg_composite_index: avg,
                min_index: min,
                max_index: max,
                members: entries.into_iter().map(|(m, _)| m).collect(),
            }
        })
        .collect()
}
