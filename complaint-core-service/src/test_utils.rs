use async_trait::async_trait;
use chrono::Utc;
use complaint_core_api::Identity;
use complaint_core_db::models::complaint::{ComplaintModel, ComplaintPatch, EmailString, NameString, NewComplaintModel};
use complaint_core_db::repository::{DeleteById, FindAll, FindById, FindByOwnerEmail, Insert, UpdateFields};
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::complaint_service::ComplaintServiceImpl;
use crate::memory::InMemoryComplaintRepository;

pub fn new_complaint(owner_email: &str, text: &str) -> NewComplaintModel {
    NewComplaintModel::new(
        EmailString::from_str(owner_email).unwrap(),
        NameString::from_str("Test User").unwrap(),
        text.to_string(),
        Utc::now(),
    )
}

pub fn stored_complaint(owner_email: &str, text: &str) -> ComplaintModel {
    new_complaint(owner_email, text).into_model(Uuid::new_v4())
}

/// Record written before `resolved` and the timestamps existed.
pub fn legacy_complaint(owner_email: &str, text: &str) -> ComplaintModel {
    ComplaintModel {
        resolved: None,
        created_at: None,
        updated_at: None,
        ..stored_complaint(owner_email, text)
    }
}

pub fn user_a() -> Identity {
    Identity::user("a@x.com", "Alice")
}

pub fn user_b() -> Identity {
    Identity::user("b@x.com", "Bob")
}

pub fn admin() -> Identity {
    Identity::admin("admin@x.com", "Admin")
}

pub fn service_with(
    repo: InMemoryComplaintRepository,
) -> (ComplaintServiceImpl<InMemoryComplaintRepository>, Arc<InMemoryComplaintRepository>) {
    let repo = Arc::new(repo);
    (ComplaintServiceImpl::new(repo.clone()), repo)
}

/// Repository whose every call fails, for store-error propagation tests.
pub struct FailingComplaintRepository;

fn unavailable() -> Box<dyn Error + Send + Sync> {
    "store unavailable".into()
}

#[async_trait]
impl FindAll<ComplaintModel> for FailingComplaintRepository {
    async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Err(unavailable())
    }
}

#[async_trait]
impl FindByOwnerEmail<ComplaintModel> for FailingComplaintRepository {
    async fn find_by_owner_email(&self, _owner_email: &str) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Err(unavailable())
    }
}

#[async_trait]
impl FindById<ComplaintModel> for FailingComplaintRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        Err(unavailable())
    }
}

#[async_trait]
impl Insert<NewComplaintModel, ComplaintModel> for FailingComplaintRepository {
    async fn insert(&self, _item: NewComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
        Err(unavailable())
    }
}

#[async_trait]
impl UpdateFields<ComplaintPatch> for FailingComplaintRepository {
    async fn update_fields(&self, _id: Uuid, _patch: ComplaintPatch) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Err(unavailable())
    }
}

#[async_trait]
impl DeleteById for FailingComplaintRepository {
    async fn delete_by_id(&self, _id: Uuid) -> Result<u64, Box<dyn Error + Send + Sync>> {
        Err(unavailable())
    }
}

/// Repository where the record is deleted by someone else just before each
/// update lands.
pub struct DeletedMidUpdateRepository {
    inner: InMemoryComplaintRepository,
}

impl DeletedMidUpdateRepository {
    pub fn new(record: ComplaintModel) -> Self {
        Self {
            inner: InMemoryComplaintRepository::with_records(vec![record]),
        }
    }

    pub fn inner(&self) -> &InMemoryComplaintRepository {
        &self.inner
    }
}

#[async_trait]
impl FindAll<ComplaintModel> for DeletedMidUpdateRepository {
    async fn find_all(&self) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        self.inner.find_all().await
    }
}

#[async_trait]
impl FindByOwnerEmail<ComplaintModel> for DeletedMidUpdateRepository {
    async fn find_by_owner_email(&self, owner_email: &str) -> Result<Vec<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        self.inner.find_by_owner_email(owner_email).await
    }
}

#[async_trait]
impl FindById<ComplaintModel> for DeletedMidUpdateRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ComplaintModel>, Box<dyn Error + Send + Sync>> {
        self.inner.find_by_id(id).await
    }
}

#[async_trait]
impl Insert<NewComplaintModel, ComplaintModel> for DeletedMidUpdateRepository {
    async fn insert(&self, item: NewComplaintModel) -> Result<ComplaintModel, Box<dyn Error + Send + Sync>> {
        self.inner.insert(item).await
    }
}

#[async_trait]
impl UpdateFields<ComplaintPatch> for DeletedMidUpdateRepository {
    async fn update_fields(&self, id: Uuid, patch: ComplaintPatch) -> Result<u64, Box<dyn Error + Send + Sync>> {
        self.inner.delete_by_id(id).await?;
        self.inner.update_fields(id, patch).await
    }
}

#[async_trait]
impl DeleteById for DeletedMidUpdateRepository {
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, Box<dyn Error + Send + Sync>> {
        self.inner.delete_by_id(id).await
    }
}
