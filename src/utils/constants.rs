/// Elemento raíz en index.html
pub const ROOT_ELEMENT_ID: &str = "app";

pub const BOOKING_FORM_ID: &str = "booking-form";
/// Contenedor donde aparece el aviso tras enviar
pub const NOTICE_SLOT_ID: &str = "booking-notice-slot";
pub const CONFIRMATION_NOTICE_ID: &str = "booking-confirmation";
pub const SUBSCRIBE_FORM_ID: &str = "subscribe-form";

// Anclas de navegación
pub const SECTION_HOW: &str = "how";
pub const SECTION_SERVICES: &str = "services";
pub const SECTION_BOOK: &str = "book";
pub const SECTION_CONTACT: &str = "contact";
