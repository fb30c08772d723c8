use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};

use super::ApiError;
use crate::models::{EmployeeInput, EmployeePayload, ListEmployeesQuery};
use crate::validation::validate_employee;

/// JSON body extractor that only yields payloads passing validation.
///
/// Runs before the handler body, so write handlers never see invalid input.
pub struct ValidatedEmployee(pub EmployeeInput);

impl<S> FromRequest<S> for ValidatedEmployee
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<EmployeePayload>::from_request(req, state).await?;
        Ok(Self(validate_employee(payload)?))
    }
}

/// Reads the query as raw pairs so repeated keys are accepted; the first
/// `search` value wins.
impl<S> FromRequestParts<S> for ListEmployeesQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        let search = pairs
            .into_iter()
            .find(|(key, _)| key == "search")
            .map(|(_, value)| value);
        Ok(Self { search })
    }
}

/// The `{id}` path segment, if it is an integer.
///
/// Never rejects: an id that cannot be decoded or parsed names no employee
/// and surfaces as 404 from [`EmployeeId::get`]. Deferring the error keeps
/// body validation ahead of the lookup on PUT.
pub struct EmployeeId(Option<i64>);

impl EmployeeId {
    pub fn parse(raw: &str) -> Self {
        Self(raw.parse().ok())
    }

    pub fn get(self) -> Result<i64, ApiError> {
        self.0.ok_or(ApiError::NotFound)
    }
}

impl<S> FromRequestParts<S> for EmployeeId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Self::parse(&raw),
            Err(rejection) => {
                tracing::debug!("Unreadable employee id: {}", rejection.body_text());
                Self(None)
            }
        };
        Ok(id)
    }
}
