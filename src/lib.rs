pub mod calendar {
    pub mod ics;
    pub mod index;
}
pub mod config {
    pub mod env_loader;
    pub mod model;
}
pub mod tracing;
pub mod valorant_esports {
    pub mod api;
    pub mod dto;
    pub mod model;
}
