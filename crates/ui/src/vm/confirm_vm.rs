/// Two-press guard for destructive row actions.
///
/// The first press on a row arms it; a second press on the same row confirms.
/// Pressing another row moves the guard there instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowConfirm {
    armed: Option<String>,
}

impl RowConfirm {
    /// Returns `true` when this press confirms the action for `id`.
    pub fn press(&mut self, id: &str) -> bool {
        if self.is_armed(id) {
            self.armed = None;
            true
        } else {
            self.armed = Some(id.to_owned());
            false
        }
    }

    #[must_use]
    pub fn is_armed(&self, id: &str) -> bool {
        self.armed.as_deref() == Some(id)
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }
}
