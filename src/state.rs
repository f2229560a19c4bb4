
use rocket::serde::Deserialize;
use rocket::State;

pub type Server = State<ServerState>;

// Service settings, read from Rocket's config (Rocket.toml / ROCKET_*).
#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde", default)]
pub struct ServerState {
    pub participant: String,
}

impl Default for ServerState {
    fn default() -> Self {
        ServerState {
            participant: "mallela sahid".to_owned(),
        }
    }
}
