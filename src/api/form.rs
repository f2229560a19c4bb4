
use rocket::form::{self, Form};
use rocket_dyn_templates::{Template, context};

use crate::Server;
use crate::json::{ApiError, ApiResult};
use crate::model::token::TokensResult;

#[derive(FromForm)]
pub struct TextForm {
    text: String,
}

#[get("/form")]
pub fn form_page(serv: &Server) -> Template {
    Template::render("form", context! {
        participant: &serv.participant,
    })
}

// Same page, with the checksum and tokens for the submitted text filled in.
#[post("/form", data="<req>")]
pub fn form_submit(serv: &Server, req: Result<Form<TextForm>, form::Errors<'_>>) -> ApiResult<Template> {
    let text = req.map_err(ApiError::from_form)?.into_inner().text;
    let res = TokensResult::generate(&text)?;
    Ok(Template::render("form", context! {
        participant: &serv.participant,
        text: &text,
        checksum: &res.checksum,
        tokens: &res.tokens,
    }))
}
