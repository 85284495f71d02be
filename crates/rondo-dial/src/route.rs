use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a navigation destination. The dial never interprets
/// it; it only hands it to the [`Navigator`](crate::Navigator).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct RouteId(String);

crate::impl_string_newtype!(RouteId);

/// Fixed mapping from button index to route, in dial order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable(Vec<RouteId>);

impl RouteTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RouteId> {
        self.0.get(index)
    }
}

impl FromIterator<RouteId> for RouteTable {
    fn from_iter<T: IntoIterator<Item = RouteId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
