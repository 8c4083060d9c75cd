// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::BookingField;
use crate::viewmodels::BookingViewModel;

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Reescribir el valor de un input desde el estado (input controlado)
    Field(BookingField),
    /// Mostrar el aviso de confirmación tras enviar
    ConfirmationNotice,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub booking: Rc<RefCell<BookingViewModel>>,

    // Reactivity: callbacks que reciben el tipo de actualización
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_booking(BookingViewModel::new())
    }

    pub fn with_booking(booking: BookingViewModel) -> Self {
        Self {
            booking: Rc::new(RefCell::new(booking)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con tipo específico
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Copiar la lista: un subscriber puede suscribir otro mientras iteramos
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type.clone());
        }
    }

    /// Cambio de un campo del formulario
    pub fn update_booking_field(&self, field: BookingField, value: String) {
        self.booking.borrow_mut().on_field_change(field, value);
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Field(field)));
    }

    /// Envío del formulario. Solo la primera vez hace falta mostrar el aviso.
    pub fn submit_booking(&self) {
        let first = self.booking.borrow_mut().on_submit();
        if first {
            self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::ConfirmationNotice));
        }
    }

    pub fn booking_value(&self, field: BookingField) -> String {
        self.booking.borrow().draft().get(field).to_string()
    }

    pub fn is_booking_submitted(&self) -> bool {
        self.booking.borrow().is_submitted()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingDraft;
    use crate::services::SubmissionSink;

    struct SilentSink;

    impl SubmissionSink for SilentSink {
        fn report(&self, _draft: &BookingDraft) {}
    }

    fn state_with_log() -> (AppState, Rc<RefCell<Vec<UpdateType>>>) {
        let state = AppState::with_booking(BookingViewModel::with_sink(Box::new(SilentSink)));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        state.subscribe_to_changes(move |update| seen_clone.borrow_mut().push(update));
        (state, seen)
    }

    #[test]
    fn test_field_update_notifies_field() {
        let (state, seen) = state_with_log();
        state.update_booking_field(BookingField::Language, "Hindi".to_string());

        assert_eq!(state.booking_value(BookingField::Language), "Hindi");
        assert_eq!(
            seen.borrow().as_slice(),
            &[UpdateType::Incremental(IncrementalUpdate::Field(BookingField::Language))]
        );
    }

    #[test]
    fn test_notice_is_requested_once() {
        let (state, seen) = state_with_log();
        state.submit_booking();
        state.submit_booking();

        assert!(state.is_booking_submitted());
        assert_eq!(
            seen.borrow().as_slice(),
            &[UpdateType::Incremental(IncrementalUpdate::ConfirmationNotice)]
        );
    }

    #[test]
    fn test_clones_share_booking() {
        let (state, _) = state_with_log();
        let other = state.clone();
        other.update_booking_field(BookingField::Name, "Ravi".to_string());
        assert_eq!(state.booking_value(BookingField::Name), "Ravi");
    }
}
