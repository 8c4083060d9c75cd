// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, console};
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::dom::incremental::apply_incremental;
use crate::state::app_state::{AppState, UpdateType, IncrementalUpdate};
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada en #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Cada cambio de estado llega desde un handler del DOM, con APP libre
        state.subscribe_to_changes(|update_type| {
            crate::rerender_app_with_type(update_type);
        });

        Ok(Self { state, root })
    }

    /// Renderizar aplicación completa desde el estado
    pub fn render(&mut self) -> Result<(), JsValue> {
        console::log_1(&JsValue::from_str("🎬 [APP] App::render() llamado"));

        set_inner_html(&self.root, "");
        let app_view = render_app(&self.state)?;
        append_child(&self.root, &app_view)?;

        log::info!("✅ [APP] Página renderizada");
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        apply_incremental(&self.state, update_type)
    }

    /// Aplicar una actualización; si la incremental falla, re-render completo
    pub fn apply(&mut self, update_type: UpdateType) -> Result<(), JsValue> {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                if let Err(e) = self.update_incremental(inc_type) {
                    log::warn!("🔄 [UPDATE] {:?} falló ({:?}), re-render completo", inc_type, e);
                    self.render()?;
                }
                Ok(())
            }
            UpdateType::FullRender => self.render(),
        }
    }
}
