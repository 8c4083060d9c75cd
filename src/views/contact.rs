// ============================================================================
// CONTACT VIEW - Datos de contacto, suscripción y seguridad
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{on_submit, text_element, ElementBuilder};
use crate::utils::constants::{SECTION_CONTACT, SUBSCRIBE_FORM_ID};
use crate::views::content::{LANGUAGES_COPY, OPERATING_AREA, SAFETY_PRIVACY};

pub fn render_contact() -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?
        .class("mt-6 grid grid-cols-1 md:grid-cols-2 gap-6")
        .child(render_contact_card()?)?
        .child(render_safety_card()?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .id(SECTION_CONTACT)?
        .class("py-8")
        .child(text_element("h3", "text-2xl font-semibold", "Contact")?)?
        .child(grid)?
        .build())
}

fn render_contact_card() -> Result<Element, JsValue> {
    let subscribe = ElementBuilder::new("div")?
        .class("mt-6")
        .child(text_element("h5", "font-semibold", "Subscribe for updates")?)?
        .child(render_subscribe_form()?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("bg-white p-6 rounded-lg shadow")
        .child(text_element("p", "text-sm text-gray-600", &format!("Email: {}", CONFIG.contact_email))?)?
        .child(text_element("p", "text-sm text-gray-600", &format!("Phone: {}", CONFIG.contact_phone))?)?
        .child(text_element("p", "text-sm text-gray-600 mt-4", OPERATING_AREA)?)?
        .child(subscribe)?
        .build())
}

/// Mini-formulario de suscripción: solo evita la recarga, no guarda nada
fn render_subscribe_form() -> Result<Element, JsValue> {
    let email = ElementBuilder::new("input")?
        .class("flex-1 rounded-md border-gray-200 p-2")
        .attr("placeholder", "Email")?
        .build();

    let form = ElementBuilder::new("form")?
        .id(SUBSCRIBE_FORM_ID)?
        .class("mt-3 flex gap-2")
        .child(email)?
        .child(text_element("button", "px-4 py-2 rounded bg-gray-800 text-white", "Subscribe")?)?
        .build();

    on_submit(&form, || {})?;
    Ok(form)
}

fn render_safety_card() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("bg-white p-6 rounded-lg shadow")
        .child(text_element("h4", "font-semibold", "Safety & Privacy")?)?
        .child(text_element("p", "text-sm text-gray-600 mt-2", SAFETY_PRIVACY)?)?
        .child(text_element("h4", "font-semibold mt-4", "Languages")?)?
        .child(text_element("p", "text-sm text-gray-600", LANGUAGES_COPY)?)?
        .build())
}
