// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Los listeners van sobre elementos del DOM de la página. Cuando el elemento se
//   destruye (p.ej. con set_inner_html("") en un re-render completo), el navegador
//   limpia los listeners asociados, así que closure.forget() es seguro.
// - No registramos listeners globales en window/document.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use crate::dom::{get_attribute, get_control_value};

/// Registrar un listener genérico y mantener vivo el closure
pub fn on_event<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(
        event_type,
        closure.as_ref().unchecked_ref(),
    )?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// `input` se dispara en cada tecla (inputs de texto, date, textarea)
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "input", handler)
}

/// `change` para selects
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "change", handler)
}

/// Submit de formulario SIN recarga de página: siempre llama preventDefault
/// antes del handler
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    on_event(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// (name, value) del control que disparó el evento
pub fn event_target_name_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let name = get_attribute(&target, "name")?;
    let value = get_control_value(&target)?;
    Some((name, value))
}
