// ============================================================================
// NESTJOURNEYS - PÁGINA DE RESERVAS (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI (formulario de reserva)
// - Services: Canal de diagnóstico de reservas enviadas
// - State: State Management con Rc<RefCell>
// - Models: BookingDraft y claves de campo
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

// Superficie mínima para los tests de navegador (tests/web.rs)
pub use crate::app::App;
pub use crate::dom::incremental::apply_incremental;
pub use crate::models::{BookingDraft, BookingField};
pub use crate::state::app_state::{AppState, IncrementalUpdate, UpdateType};
pub use crate::views::booking_form::render_booking_form;

use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} - Rust Puro + MVVM ({})", CONFIG.brand_name, CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let Ok(mut guard) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [UPDATE] App ocupada, se ignora {:?}", update_type);
            return;
        };
        match guard.as_mut() {
            Some(app) => {
                if let Err(e) = app.apply(update_type) {
                    web_sys::console::error_1(&JsValue::from_str(&format!("❌ Error actualizando la app: {:?}", e)));
                }
            }
            None => log::warn!("⚠️ [UPDATE] App no está inicializada"),
        }
    });
}

/// Re-render completo llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
