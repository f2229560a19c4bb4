
#[macro_use] extern crate rocket;

use rocket::fairing::AdHoc;
use rocket_dyn_templates::Template;

mod api;
mod json;
mod model;
mod state;


pub use state::Server;

#[launch]
fn rocket() -> _ {
    rocket::build()
        .attach(AdHoc::config::<state::ServerState>())
        .attach(Template::fairing())
        .mount("/", routes![
            api::root::welcome,
            api::text::checksum,
            api::text::tokens,
            api::form::form_page,
            api::form::form_submit,
        ])
        .register("/", catchers![json::default_catcher])
}
