use async_trait::async_trait;
use complaint_core_db::models::complaint::{newest_first, ComplaintModel, ComplaintPatch, NewComplaintModel};
use complaint_core_db::models::identifiable::Identifiable;
use complaint_core_db::repository::{DeleteById, FindAll, FindById, FindByOwnerEmail, Insert, UpdateFields};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

/// Complaint store kept in a map, with the same ordering and
/// modification-count semantics as the Postgres repository.
#[derive(Default)]
pub struct InMemoryComplaintRepository {
    records: RwLock<HashMap<Uuid, ComplaintModel>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, e.g. legacy rows missing newer fields.
    pub fn with_records(records: Vec<ComplaintModel>) -> Self {
        let map = records.into_iter().map(|r| (r.get_id(), r)).collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Stored record exactly as persisted, without read-time defaulting.
    pub fn snapshot(&self, id: Uuid) -> Option<ComplaintModel> {
        self.records.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn sorted(mut items: Vec<ComplaintModel>) -> Vec<ComplaintModel> {
        items.sort_by(newest_first);
        items
    }
}

#[async_trait]
impl FindAll<ComplaintModel> for InMemoryComplaintRepository {
    async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let items = self.records.read().values().cloned().collect();
        Ok(Self::sorted(items))
    }
}

#[async_trait]
impl FindByOwnerEmail<ComplaintModel> for InMemoryComplaintRepository {
    async fn find_by_owner_email(
        &self,
        owner_email: &str,
    ) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        let items = self
            .records
            .read()
            .values()
            .filter(|c| c.is_owned_by(owner_email))
            .cloned()
            .collect();
        Ok(Self::sorted(items))
    }
}

#[async_trait]
impl FindById<ComplaintModel> for InMemoryComplaintRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.snapshot(id))
    }
}

#[async_trait]
impl Insert<NewComplaintModel, ComplaintModel> for InMemoryComplaintRepository {
    async fn insert(&self, item: NewComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
        let model = item.into_model(Uuid::new_v4());
        self.records.write().insert(model.id, model.clone());
        Ok(model)
    }
}

#[async_trait]
impl UpdateFields<ComplaintPatch> for InMemoryComplaintRepository {
    async fn update_fields(
        &self,
        id: Uuid,
        patch: ComplaintPatch,
    ) -> Result<u64, Box<dyn Error + Send + Sync>> {
        let mut records = self.records.write();
        match records.get_mut(&id) {
            Some(model) if patch.is_effective_for(model) => {
                patch.apply_to(model);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[async_trait]
impl DeleteById for InMemoryComplaintRepository {
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Ok(self.records.write().remove(&id).map_or(0, |_| 1))
    }
}
