use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::models::Plan;

/// Number of skeleton cards shown while the catalog is loading.
pub const PLACEHOLDER_CARDS: usize = 3;

/// The one plan fetch of a mount. Every request that joins it gets the same result.
#[derive(Debug, Clone, Default)]
pub struct PendingFetch {
    cell: Arc<OnceCell<Vec<Plan>>>,
}

impl PendingFetch {
    /// Wait for the fetch, running `fetch` only if nobody else is already doing it.
    pub async fn join<E, F, Fut>(&self, fetch: F) -> Result<Vec<Plan>, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<Plan>, E>>,
    {
        self.cell.get_or_try_init(fetch).await.map(|plans| plans.clone())
    }

    pub fn same_as(&self, other: &PendingFetch) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl PartialEq for PendingFetch {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlanCatalog {
    /// Freshly mounted; nobody has asked for plans yet.
    #[default]
    Loading,
    /// A fetch for the current mount is in flight.
    Fetching(PendingFetch),
    Ready(Vec<Plan>),
}

impl PlanCatalog {
    pub fn is_loading(&self) -> bool {
        !matches!(self, PlanCatalog::Ready(_))
    }

    pub fn plans(&self) -> &[Plan] {
        match self {
            PlanCatalog::Loading | PlanCatalog::Fetching(_) => &[],
            PlanCatalog::Ready(plans) => plans,
        }
    }

    /// Plans have no id; the name is the key.
    pub fn find(&self, name: &str) -> Option<&Plan> {
        self.plans().iter().find(|p| p.name == name)
    }
}
