use amber_safe::status::StatusView;
use amber_safe::ui::{ListRow, Surface};
use std::sync::Mutex;

/// Everything the application did to the surface, in order.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Rows(Vec<ListRow>),
    Status(StatusView),
    Loading(bool),
    ResetForm,
}

/// Surface that records every call.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Most recently rendered contact rows.
    pub fn last_rows(&self) -> Option<Vec<ListRow>> {
        self.events().into_iter().rev().find_map(|event| match event {
            SurfaceEvent::Rows(rows) => Some(rows),
            _ => None,
        })
    }

    /// Every status rendered, oldest first.
    pub fn statuses(&self) -> Vec<StatusView> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Status(status) => Some(status),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<StatusView> {
        self.statuses().pop()
    }

    pub fn loading_transitions(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::Loading(loading) => Some(loading),
                _ => None,
            })
            .collect()
    }

    pub fn form_resets(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::ResetForm))
            .count()
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Surface for RecordingSurface {
    fn render_contacts(&self, rows: &[ListRow]) {
        self.push(SurfaceEvent::Rows(rows.to_vec()));
    }

    fn render_status(&self, status: &StatusView) {
        self.push(SurfaceEvent::Status(status.clone()));
    }

    fn set_loading(&self, loading: bool) {
        self.push(SurfaceEvent::Loading(loading));
    }

    fn reset_form(&self) {
        self.push(SurfaceEvent::ResetForm);
    }
}
