use alfdocs_core::models::Notice;

/// A notice on screen, with an id so it can be dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}
