// ============================================================================
// BOOKING FORM VIEW - Formulario controlado de reserva (Rust puro)
// ============================================================================
// Cada control lleva name = BookingField::as_str(); el handler recupera el
// campo desde el name, igual para todos. El valor mostrado sale siempre del
// estado (render inicial + update_field_value tras cada cambio).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};
use crate::dom::{
    append_child, event_target_name_value, on_change, on_input, on_submit, set_control_value,
    text_element, ElementBuilder,
};
use crate::models::BookingField;
use crate::state::app_state::AppState;
use crate::utils::constants::{BOOKING_FORM_ID, CONFIRMATION_NOTICE_ID, NOTICE_SLOT_ID, SECTION_BOOK};
use crate::views::content::{CONFIRMATION_TEXT, FOLLOW_UP_NOTE, SUBMIT_LABEL, WHY_FAMILIES_CHOOSE_US};

const CONTROL_CLASS: &str = "mt-1 block w-full rounded-md border-gray-200 shadow-sm p-2";

fn field_label(field: BookingField) -> &'static str {
    match field {
        BookingField::Name => "Full name",
        BookingField::Language => "Preferred language",
        BookingField::Mobility => "Mobility",
        BookingField::Date => "Date",
        BookingField::Package => "Package",
        BookingField::Notes => "Notes (medications, allergies, emergency contact)",
    }
}

/// Package y Notes ocupan las dos columnas
fn is_wide(field: BookingField) -> bool {
    matches!(field, BookingField::Package | BookingField::Notes)
}

/// Sección "Book a trip": formulario + aside
pub fn render_booking_section(state: &AppState) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?
        .class("mt-6 grid grid-cols-1 md:grid-cols-3 gap-6")
        .child(render_booking_form(state)?)?
        .child(render_why_us()?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .id(SECTION_BOOK)?
        .class("py-8")
        .child(text_element("h3", "text-2xl font-semibold", "Book a trip")?)?
        .child(grid)?
        .build())
}

pub fn render_booking_form(state: &AppState) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .id(BOOKING_FORM_ID)?
        .class("md:col-span-2 bg-white p-6 rounded-lg shadow")
        .build();

    let mut fields = Vec::with_capacity(BookingField::ALL.len());
    for field in BookingField::ALL {
        fields.push(render_field(state, field)?);
    }
    let fields_grid = ElementBuilder::new("div")?
        .class("grid grid-cols-1 md:grid-cols-2 gap-4")
        .children(fields)?
        .build();

    let actions = ElementBuilder::new("div")?
        .class("mt-4 flex items-center gap-4")
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("bg-blue-600 text-white px-5 py-2 rounded-lg")
                .text(SUBMIT_LABEL)
                .build(),
        )?
        .child(text_element("div", "text-sm text-gray-500", FOLLOW_UP_NOTE)?)?
        .build();

    let notice_slot = ElementBuilder::new("div")?.id(NOTICE_SLOT_ID)?.build();
    if state.is_booking_submitted() {
        append_child(&notice_slot, &render_confirmation_notice()?)?;
    }

    append_child(&form, &fields_grid)?;
    append_child(&form, &actions)?;
    append_child(&form, &notice_slot)?;

    // El navegador bloquea el submit si `name` está vacío (required)
    {
        let state = state.clone();
        on_submit(&form, move || {
            log::info!("📝 [BOOKING] Submit del formulario");
            state.submit_booking();
        })?;
    }

    Ok(form)
}

fn render_field(state: &AppState, field: BookingField) -> Result<Element, JsValue> {
    let control = match field {
        BookingField::Name => ElementBuilder::new("input")?.attr("required", "")?.build(),
        BookingField::Date => ElementBuilder::new("input")?.attr("type", "date")?.build(),
        BookingField::Notes => ElementBuilder::new("textarea")?.attr("rows", "4")?.build(),
        BookingField::Language | BookingField::Mobility | BookingField::Package => {
            let mut options = Vec::new();
            for option in field.options().unwrap_or_default() {
                options.push(ElementBuilder::new("option")?.text(option).build());
            }
            ElementBuilder::new("select")?.children(options)?.build()
        }
    };
    control.set_attribute("id", &field.element_id())?;
    control.set_attribute("name", field.as_str())?;
    control.set_class_name(CONTROL_CLASS);
    // Después de crear las <option>, si no el select ignora el valor
    set_control_value(&control, &state.booking_value(field))?;

    {
        let state = state.clone();
        let handler = move |e: Event| handle_field_event(&state, &e);
        if field.options().is_some() {
            on_change(&control, handler)?;
        } else {
            on_input(&control, handler)?;
        }
    }

    let label_class = if is_wide(field) { "block md:col-span-2" } else { "block" };
    Ok(ElementBuilder::new("label")?
        .class(label_class)
        .child(text_element("div", "text-sm font-medium", field_label(field))?)?
        .child(control)?
        .build())
}

/// Handler común a todos los controles
fn handle_field_event(state: &AppState, e: &Event) {
    let Some((name, value)) = event_target_name_value(e) else {
        log::warn!("⚠️ [BOOKING] Evento sin control de formulario como target");
        return;
    };
    match name.parse::<BookingField>() {
        Ok(field) => state.update_booking_field(field, value),
        Err(err) => log::warn!("⚠️ [BOOKING] {}", err),
    }
}

pub fn render_confirmation_notice() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .id(CONFIRMATION_NOTICE_ID)?
        .class("mt-4 p-3 bg-green-50 text-green-800 rounded")
        .attr("role", "status")?
        .text(CONFIRMATION_TEXT)
        .build())
}

fn render_why_us() -> Result<Element, JsValue> {
    let mut items = Vec::with_capacity(WHY_FAMILIES_CHOOSE_US.len());
    for reason in WHY_FAMILIES_CHOOSE_US {
        items.push(ElementBuilder::new("li")?.text(reason).build());
    }

    Ok(ElementBuilder::new("aside")?
        .class("bg-white p-6 rounded-lg shadow")
        .child(text_element("h4", "font-semibold", "Why families choose us")?)?
        .child(
            ElementBuilder::new("ul")?
                .class("mt-3 text-sm text-gray-600 space-y-2")
                .children(items)?
                .build(),
        )?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_label() {
        for field in BookingField::ALL {
            assert!(!field_label(field).is_empty());
        }
    }

    #[test]
    fn test_wide_fields() {
        let wide: Vec<_> = BookingField::ALL.into_iter().filter(|f| is_wide(*f)).collect();
        assert_eq!(wide, vec![BookingField::Package, BookingField::Notes]);
    }
}
