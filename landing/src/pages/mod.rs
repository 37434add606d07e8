// Site routes
// Developed by The TG Deploy Team (c)2025

mod docs;
mod home;
mod not_found;

pub use docs::DocsPage;
pub use home::HomePage;
pub use not_found::NotFound;
