//! Request handlers: typed request parsing, session lookup and mapping of
//! service results to status codes and JSON bodies.

use complaint_core_api::{
    parse_request, ComplaintError, ComplaintService, DeleteComplaintRequest, EditComplaintRequest, Identity,
    IdentityProvider, LoginRequest, ResponseBody, SessionStore, SubmitComplaintRequest, ToggleStatusRequest,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HandlerResponse {
    pub fn ok(body: ResponseBody) -> Self {
        Self { status: 200, body }
    }

    pub fn from_error(err: &ComplaintError) -> Self {
        Self {
            status: status_code(err),
            body: ResponseBody::failure(err.message()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

pub fn status_code(err: &ComplaintError) -> u16 {
    match err {
        ComplaintError::Unauthenticated => 401,
        ComplaintError::Forbidden(_) => 403,
        ComplaintError::NotFound(_) => 404,
        ComplaintError::InvalidInput(_) | ComplaintError::NoChange(_) => 400,
        ComplaintError::StoreError(_) => 500,
    }
}

fn respond(result: Result<ResponseBody, ComplaintError>) -> HandlerResponse {
    match result {
        Ok(body) => HandlerResponse::ok(body),
        Err(err) => HandlerResponse::from_error(&err),
    }
}

/// Session must hold an identity before the request body is even looked at.
fn current_identity(session: &dyn SessionStore) -> Result<Identity, ComplaintError> {
    session.get_current().ok_or(ComplaintError::Unauthenticated)
}

pub struct ComplaintHandlers<S, P> {
    service: Arc<S>,
    identity_provider: Arc<P>,
}

impl<S, P> ComplaintHandlers<S, P>
where
    S: ComplaintService,
    P: IdentityProvider,
{
    pub fn new(service: Arc<S>, identity_provider: Arc<P>) -> Self {
        Self {
            service,
            identity_provider,
        }
    }

    pub async fn list(&self, session: &dyn SessionStore) -> HandlerResponse {
        respond(self.list_inner(session).await)
    }

    async fn list_inner(&self, session: &dyn SessionStore) -> Result<ResponseBody, ComplaintError> {
        let identity = current_identity(session)?;
        let complaints = self.service.list(Some(&identity)).await?;
        Ok(ResponseBody::ok(format!("{} complaint(s)", complaints.len())).with_complaints(complaints))
    }

    pub async fn submit(&self, session: &dyn SessionStore, body: &str) -> HandlerResponse {
        respond(self.submit_inner(session, body).await)
    }

    async fn submit_inner(&self, session: &dyn SessionStore, body: &str) -> Result<ResponseBody, ComplaintError> {
        let identity = current_identity(session)?;
        let request: SubmitComplaintRequest = parse_request(body)?;
        let complaint = self.service.submit(Some(&identity), &request.complaint).await?;
        Ok(ResponseBody::ok("Complaint submitted successfully").with_complaint(complaint))
    }

    pub async fn edit(&self, session: &dyn SessionStore, body: &str) -> HandlerResponse {
        respond(self.edit_inner(session, body).await)
    }

    async fn edit_inner(&self, session: &dyn SessionStore, body: &str) -> Result<ResponseBody, ComplaintError> {
        let identity = current_identity(session)?;
        let request: EditComplaintRequest = parse_request(body)?;
        self.service
            .edit(Some(&identity), &request.complaint_id, &request.complaint)
            .await?;
        Ok(ResponseBody::ok("Complaint updated successfully"))
    }

    pub async fn delete(&self, session: &dyn SessionStore, body: &str) -> HandlerResponse {
        respond(self.delete_inner(session, body).await)
    }

    async fn delete_inner(&self, session: &dyn SessionStore, body: &str) -> Result<ResponseBody, ComplaintError> {
        let identity = current_identity(session)?;
        let request: DeleteComplaintRequest = parse_request(body)?;
        self.service.delete(Some(&identity), &request.complaint_id).await?;
        Ok(ResponseBody::ok("Complaint deleted successfully"))
    }

    pub async fn toggle_status(&self, session: &dyn SessionStore, body: &str) -> HandlerResponse {
        respond(self.toggle_status_inner(session, body).await)
    }

    async fn toggle_status_inner(
        &self,
        session: &dyn SessionStore,
        body: &str,
    ) -> Result<ResponseBody, ComplaintError> {
        let identity = current_identity(session)?;
        let request: ToggleStatusRequest = parse_request(body)?;
        self.service
            .toggle_status(Some(&identity), &request.complaint_id, &request.status)
            .await?;
        let action = if request.status == "resolved" { "resolved" } else { "reopened" };
        Ok(ResponseBody::ok(format!("Complaint {action} successfully")))
    }

    pub async fn login(&self, session: &dyn SessionStore, body: &str) -> HandlerResponse {
        let request: LoginRequest = match parse_request(body) {
            Ok(request) => request,
            Err(_) => {
                return HandlerResponse::from_error(&ComplaintError::InvalidInput(
                    "Please provide both email and password".to_string(),
                ))
            }
        };

        match self
            .identity_provider
            .verify(request.email.trim(), &request.password)
            .await
        {
            Ok(Some(identity)) => {
                tracing::info!(email = %identity.email, is_admin = identity.is_admin, "Login successful");
                session.set(identity.clone());
                HandlerResponse::ok(ResponseBody::ok("Login successful").with_user(identity))
            }
            Ok(None) => {
                tracing::warn!(email = %request.email, "Login failed");
                HandlerResponse {
                    status: status_code(&ComplaintError::Unauthenticated),
                    body: ResponseBody::failure("Invalid email or password"),
                }
            }
            Err(err) => HandlerResponse::from_error(&err),
        }
    }

    pub fn logout(&self, session: &dyn SessionStore) -> HandlerResponse {
        if let Some(identity) = session.get_current() {
            tracing::info!(email = %identity.email, "Logout");
        }
        session.clear();
        HandlerResponse::ok(ResponseBody::ok("Logged out"))
    }

    pub fn current_user(&self, session: &dyn SessionStore) -> HandlerResponse {
        respond(current_identity(session).map(|identity| ResponseBody::ok("Authenticated").with_user(identity)))
    }
}
