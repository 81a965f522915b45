pub mod docs;
pub mod extract;
pub mod handlers;
mod routes;
mod state;

pub use routes::{create_router, with_permissive_cors};
pub use state::AppState;
