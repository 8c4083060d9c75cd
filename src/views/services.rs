use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, text_element};
use crate::utils::constants::SECTION_SERVICES;
use crate::views::content::SERVICES;

/// Sección de servicios: tres tarjetas
pub fn render_services() -> Result<Element, JsValue> {
    let mut cards = Vec::with_capacity(SERVICES.len());
    for service in SERVICES {
        cards.push(
            ElementBuilder::new("div")?
                .class("bg-white p-6 rounded-lg shadow")
                .child(text_element("h4", "font-semibold", service.title)?)?
                .child(text_element("p", "text-sm text-gray-600 mt-2", service.description)?)?
                .build(),
        );
    }

    Ok(ElementBuilder::new("section")?
        .id(SECTION_SERVICES)?
        .class("py-8")
        .child(text_element("h3", "text-2xl font-semibold", "Services")?)?
        .child(
            ElementBuilder::new("div")?
                .class("mt-6 grid grid-cols-1 md:grid-cols-3 gap-6")
                .children(cards)?
                .build(),
        )?
        .build())
}
