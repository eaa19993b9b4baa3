use contour_engine::coords::Vec2;

/// Input events a host may route to a widget.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary pointer button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Pointer moved to `pos`.
    Hover { pos: Vec2 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled. Stop routing to siblings and parents.
    Consumed,
    /// Event was not handled. Keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
