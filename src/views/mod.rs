pub mod app;
pub mod content;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod services;
pub mod booking_form;
pub mod contact;
pub mod footer;

pub use app::render_app;
pub use header::render_header;
pub use hero::render_hero;
pub use how_it_works::render_how_it_works;
pub use services::render_services;
pub use booking_form::{render_booking_section, render_confirmation_notice};
pub use contact::render_contact;
pub use footer::render_footer;
