use crate::models::complaint::{ComplaintModel, ComplaintPatch, NewComplaintModel};
use crate::repository::{DeleteById, FindAll, FindById, FindByOwnerEmail, Insert, UpdateFields};

/// Every persistence operation the complaint service needs.
///
/// Blanket-implemented for any type providing the individual repository traits.
pub trait ComplaintRepository:
    FindAll<ComplaintModel>
    + FindByOwnerEmail<ComplaintModel>
    + FindById<ComplaintModel>
    + Insert<NewComplaintModel, ComplaintModel>
    + UpdateFields<ComplaintPatch>
    + DeleteById
{
}

impl<R> ComplaintRepository for R where
    R: FindAll<ComplaintModel>
        + FindByOwnerEmail<ComplaintModel>
        + FindById<ComplaintModel>
        + Insert<NewComplaintModel, ComplaintModel>
        + UpdateFields<ComplaintPatch>
        + DeleteById
{
}
