// ============================================================================
// BOOKING VIEWMODEL - Estado + lógica del formulario de reserva
// ============================================================================
// Dueño exclusivo del borrador y del flag de envío. Sin DOM: las vistas
// llaman aquí desde los handlers y luego piden la actualización incremental.
// ============================================================================

use crate::models::{BookingDraft, BookingField};
use crate::services::{ConsoleSubmissionSink, SubmissionSink};

pub struct BookingViewModel {
    draft: BookingDraft,
    submitted: bool,
    sink: Box<dyn SubmissionSink>,
}

impl BookingViewModel {
    pub fn new() -> Self {
        Self::with_sink(Box::new(ConsoleSubmissionSink::new()))
    }

    pub fn with_sink(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            draft: BookingDraft::default(),
            submitted: false,
            sink,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Reemplazar un campo con el valor crudo del input. Acepta cualquier string.
    pub fn on_field_change(&mut self, field: BookingField, value: String) {
        log::debug!("✏️ [BOOKING] {} = {:?}", field, value);
        self.draft.set(field, value);
    }

    /// Reportar el borrador y marcar como enviado. El borrador no se limpia.
    /// Devuelve true solo en la primera transición a enviado.
    pub fn on_submit(&mut self) -> bool {
        self.sink.report(&self.draft);

        let first = !self.submitted;
        self.submitted = true;
        if first {
            log::info!("✅ [BOOKING] Solicitud de reserva recibida");
        }
        first
    }
}

impl Default for BookingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingSink {
        reports: Rc<RefCell<Vec<BookingDraft>>>,
    }

    impl SubmissionSink for RecordingSink {
        fn report(&self, draft: &BookingDraft) {
            self.reports.borrow_mut().push(draft.clone());
        }
    }

    fn recording_vm() -> (BookingViewModel, Rc<RefCell<Vec<BookingDraft>>>) {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let vm = BookingViewModel::with_sink(Box::new(RecordingSink {
            reports: reports.clone(),
        }));
        (vm, reports)
    }

    #[test]
    fn test_initial_state() {
        let vm = BookingViewModel::new();
        assert_eq!(vm.draft(), &BookingDraft::default());
        assert!(!vm.is_submitted());
    }

    #[test]
    fn test_field_change_replaces_only_that_field() {
        let values = ["", "Jane Doe", "Klingon", "2026-13-45", "   ", "ñandú 🧳"];
        for field in BookingField::ALL {
            for value in values {
                let (mut vm, _) = recording_vm();
                vm.on_field_change(BookingField::Notes, "before".to_string());
                let before = vm.draft().clone();

                vm.on_field_change(field, value.to_string());

                assert_eq!(vm.draft().get(field), value);
                for other in BookingField::ALL.iter().filter(|f| **f != field) {
                    assert_eq!(vm.draft().get(*other), before.get(*other));
                }
            }
        }
    }

    #[test]
    fn test_field_change_is_idempotent() {
        let (mut vm, _) = recording_vm();
        vm.on_field_change(BookingField::Date, "2026-11-02".to_string());
        let once = vm.draft().clone();
        vm.on_field_change(BookingField::Date, "2026-11-02".to_string());
        assert_eq!(vm.draft(), &once);
    }

    #[test]
    fn test_field_changes_never_submit() {
        let (mut vm, reports) = recording_vm();
        for field in BookingField::ALL {
            vm.on_field_change(field, "x".to_string());
            assert!(!vm.is_submitted());
        }
        assert!(reports.borrow().is_empty());
    }

    #[test]
    fn test_submit_keeps_draft_and_reports_it() {
        let (mut vm, reports) = recording_vm();
        vm.on_field_change(BookingField::Name, "Jane Doe".to_string());
        let before = vm.draft().clone();

        assert!(vm.on_submit());

        assert!(vm.is_submitted());
        assert_eq!(vm.draft(), &before);
        assert_eq!(reports.borrow().as_slice(), &[before]);
    }

    #[test]
    fn test_second_submit_is_terminal() {
        let (mut vm, reports) = recording_vm();
        vm.on_field_change(BookingField::Name, "Jane Doe".to_string());
        assert!(vm.on_submit());
        let after_first = vm.draft().clone();

        assert!(!vm.on_submit());

        assert!(vm.is_submitted());
        assert_eq!(vm.draft(), &after_first);
        assert_eq!(reports.borrow().len(), 2);
    }

    #[test]
    fn test_edits_after_submit_keep_submitted() {
        let (mut vm, _) = recording_vm();
        vm.on_submit();
        vm.on_field_change(BookingField::Notes, "Allergic to penicillin".to_string());
        assert!(vm.is_submitted());
        assert_eq!(vm.draft().notes, "Allergic to penicillin");
    }

    #[test]
    fn test_jane_doe_scenario() {
        let (mut vm, reports) = recording_vm();
        vm.on_field_change(BookingField::Name, "Jane Doe".to_string());
        vm.on_field_change(BookingField::Mobility, "Wheelchair user".to_string());
        vm.on_submit();

        let expected = BookingDraft {
            name: "Jane Doe".to_string(),
            language: "English".to_string(),
            mobility: "Wheelchair user".to_string(),
            date: String::new(),
            package: "Door-to-Door".to_string(),
            notes: String::new(),
        };
        assert_eq!(vm.draft(), &expected);
        assert!(vm.is_submitted());
        assert_eq!(reports.borrow().as_slice(), &[expected]);
    }

    #[test]
    fn test_values_outside_options_are_kept_verbatim() {
        let (mut vm, _) = recording_vm();
        vm.on_field_change(BookingField::Language, "Tamil".to_string());
        let mut expected = BookingDraft::default();
        expected.language = "Tamil".to_string();
        assert_eq!(vm.draft(), &expected);

        vm.on_field_change(BookingField::Language, "Esperanto".to_string());
        vm.on_field_change(BookingField::Package, "Moon landing".to_string());
        assert_eq!(vm.draft().language, "Esperanto");
        assert_eq!(vm.draft().package, "Moon landing");
    }
}
