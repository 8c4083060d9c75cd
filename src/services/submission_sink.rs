// ============================================================================
// SUBMISSION SINK - Canal de diagnóstico para reservas enviadas
// ============================================================================
// No hay backend: la reserva solo se reporta en consola para que el operador
// la vea. Va directo a console.info, sin pasar por el nivel de wasm_logger:
// con ENABLE_LOGGING=false el reporte sigue saliendo.
// ============================================================================

use wasm_bindgen::JsValue;
use crate::models::{BookingDraft, BookingField};

/// Destino de los borradores enviados
pub trait SubmissionSink {
    /// Reportar el borrador actual. No puede fallar.
    fn report(&self, draft: &BookingDraft);
}

/// Sink por defecto: JSON a la consola del navegador
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSubmissionSink;

impl ConsoleSubmissionSink {
    pub fn new() -> Self {
        Self
    }

    /// Texto que se emite para un borrador
    pub fn format_report(draft: &BookingDraft) -> String {
        // Solo strings: construir el Value a mano no puede fallar
        let fields: serde_json::Map<String, serde_json::Value> = BookingField::ALL
            .iter()
            .map(|field| (field.as_str().to_string(), serde_json::Value::from(draft.get(*field))))
            .collect();
        format!("Booking submitted {}", serde_json::Value::Object(fields))
    }
}

impl SubmissionSink for ConsoleSubmissionSink {
    fn report(&self, draft: &BookingDraft) {
        web_sys::console::info_1(&JsValue::from_str(&Self::format_report(draft)));
    }
}
