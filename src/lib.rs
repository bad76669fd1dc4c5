pub mod config {
    pub mod settings;
}
pub mod db {
    pub mod models;
    pub mod seed;
}
pub mod middleware {
    pub mod metrics;
}
pub mod routes {
    pub mod activities;
    pub mod health;
    pub mod metrics;
}
pub mod services {
    pub mod activity_store;
}

pub mod utils {
    pub mod errors;
    pub mod types;
}
