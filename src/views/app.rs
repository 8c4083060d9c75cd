// ============================================================================
// APP VIEW - Página completa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::views::{
    render_booking_section, render_contact, render_footer, render_header, render_hero,
    render_how_it_works, render_services,
};

/// Renderizar la aplicación: header + main con todas las secciones
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?
        .class("max-w-6xl mx-auto px-6")
        .child(render_hero()?)?
        .child(render_how_it_works()?)?
        .child(render_services()?)?
        .child(render_booking_section(state)?)?
        .child(render_contact()?)?
        .child(render_footer()?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("min-h-screen bg-gray-50 text-gray-900")
        .child(render_header()?)?
        .child(main)?
        .build())
}
