
use rocket::serde::{Serialize, json::Json};

use crate::Server;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct Welcome {
    message: String,
}

#[get("/")]
pub fn welcome(serv: &Server) -> Json<Welcome> {
    Json(Welcome {
        message: format!("Welcome to the Improvise Python App — built for {}", serv.participant),
    })
}
