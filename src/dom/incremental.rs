// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo.
// Un Err significa "no encontré el nodo": el llamador hace re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, get_control_value, set_control_value, append_child};
use crate::models::BookingField;
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::constants::{CONFIRMATION_NOTICE_ID, NOTICE_SLOT_ID};
use crate::views::render_confirmation_notice;

/// Despachar una actualización incremental al helper que le toca
pub fn apply_incremental(state: &AppState, update_type: IncrementalUpdate) -> Result<(), JsValue> {
    match update_type {
        IncrementalUpdate::Field(field) => update_field_value(state, field),
        IncrementalUpdate::ConfirmationNotice => update_confirmation_notice(state),
    }
}

/// Sincronizar el valor visible de un campo con el estado (input controlado)
pub fn update_field_value(state: &AppState, field: BookingField) -> Result<(), JsValue> {
    let element_id = field.element_id();
    let element = get_element_by_id(&element_id).ok_or_else(|| {
        log::warn!("⚠️ [INCREMENTAL] #{} no existe, necesita re-render completo", element_id);
        JsValue::from_str(&format!("Field {} not found, needs full render", element_id))
    })?;

    let wanted = state.booking_value(field);
    // Mientras el usuario escribe el DOM ya tiene el valor: no tocar el cursor
    if get_control_value(&element).as_deref() != Some(wanted.as_str()) {
        set_control_value(&element, &wanted)?;
    }
    Ok(())
}

/// Insertar el aviso de confirmación si ya se envió y aún no está en el DOM
pub fn update_confirmation_notice(state: &AppState) -> Result<(), JsValue> {
    if !state.is_booking_submitted() || get_element_by_id(CONFIRMATION_NOTICE_ID).is_some() {
        return Ok(());
    }

    let slot = get_element_by_id(NOTICE_SLOT_ID).ok_or_else(|| {
        log::warn!("⚠️ [INCREMENTAL] #{} no existe, necesita re-render completo", NOTICE_SLOT_ID);
        JsValue::from_str("Notice slot not found, needs full render")
    })?;
    append_child(&slot, &render_confirmation_notice()?)?;
    log::info!("✅ [INCREMENTAL] Aviso de confirmación visible");
    Ok(())
}
