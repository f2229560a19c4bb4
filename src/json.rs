
use std::io;
use rocket::form;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::{Serialize, json::{self, Json}};
use serde_json::{Value, error::Category};
use thiserror::Error;

pub const ERR_INTERNAL: &'static str = "internal error";

// One entry of a validation error body: where it happened and why.
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    fn body(field: Option<&str>, msg: impl Into<String>, kind: &'static str) -> Self {
        let mut loc = vec!["body".to_owned()];
        loc.extend(field.map(str::to_owned));
        FieldError{ loc, msg: msg.into(), kind }
    }
}

// Error responses carry a single "detail" field.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Detail<T: Serialize> {
    detail: T,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("unreadable body: {0}")]
    Body(io::Error),
    #[error("random source failed: {0}")]
    Entropy(#[from] rand::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    // Map a JSON data guard failure onto the named field of the request body.
    pub fn from_json(err: json::Error<'_>, field: &str) -> Self {
        match err {
            json::Error::Io(e) => ApiError::Body(e),
            json::Error::Parse(raw, e) => {
                let msg = e.to_string();
                let fe = match e.classify() {
                    // well-formed JSON of the wrong shape; look at the value itself
                    Category::Data => match serde_json::from_str::<Value>(raw) {
                        Ok(Value::Object(obj)) if !obj.contains_key(field) => FieldError::body(Some(field), msg, "missing"),
                        Ok(Value::Object(_)) => FieldError::body(Some(field), msg, "string_type"),
                        _ => FieldError::body(None, msg, "model_attributes_type"),
                    },
                    _ => FieldError::body(None, msg, "json_invalid"),
                };
                ApiError::Validation(vec![fe])
            }
        }
    }

    pub fn from_form(errs: form::Errors<'_>) -> Self {
        let mut fes: Vec<FieldError> = errs.iter()
            .map(|e| {
                let name = e.name.as_ref().map(|n| n.to_string());
                let kind = match e.kind {
                    form::error::ErrorKind::Missing => "missing",
                    _ => "value_error",
                };
                FieldError::body(name.as_deref(), e.kind.to_string(), kind)
            })
            .collect();
        if fes.is_empty() {
            fes.push(FieldError::body(None, "invalid form", "value_error"));
        }
        ApiError::Validation(fes)
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::UnprocessableEntity,
            ApiError::Body(_) => Status::BadRequest,
            ApiError::Entropy(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match self {
            ApiError::Validation(fes) => {
                log::warn!("rejected {} {}: {:?}", req.method(), req.uri(), fes);
                (status, Json(Detail{ detail: fes })).respond_to(req)
            }
            ApiError::Body(e) => {
                log::warn!("unreadable body on {}: {}", req.uri(), e);
                (status, Json(Detail{ detail: e.to_string() })).respond_to(req)
            }
            ApiError::Entropy(e) => {
                log::error!("random source failed on {}: {}", req.uri(), e);
                (status, Json(Detail{ detail: ERR_INTERNAL })).respond_to(req)
            }
        }
    }
}

// Anything the routes don't answer themselves still gets a JSON body.
#[catch(default)]
pub fn default_catcher(status: Status, _req: &Request<'_>) -> Json<Detail<&'static str>> {
    Json(Detail{ detail: status.reason().unwrap_or(ERR_INTERNAL) })
}
