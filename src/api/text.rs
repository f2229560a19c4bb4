
use rocket::serde::{Deserialize, json::{self, Json}};

use crate::json::{ApiError, ApiResult};
use crate::model::checksum::ChecksumResult;
use crate::model::token::TokensResult;

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TextReq {
    text: String,
}

fn text_of(req: Result<Json<TextReq>, json::Error<'_>>) -> ApiResult<String> {
    req.map(|r| r.into_inner().text).map_err(|e| ApiError::from_json(e, "text"))
}

#[post("/checksum", data="<req>")]
pub fn checksum(req: Result<Json<TextReq>, json::Error<'_>>) -> ApiResult<Json<ChecksumResult>> {
    let text = text_of(req)?;
    Ok(Json(ChecksumResult::new(text)))
}

#[post("/tokens", data="<req>")]
pub fn tokens(req: Result<Json<TextReq>, json::Error<'_>>) -> ApiResult<Json<TokensResult>> {
    let text = text_of(req)?;
    Ok(Json(TokensResult::generate(&text)?))
}
