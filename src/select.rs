//! The side channel a presentation layer uses to report that the user picked
//! one of the generated colors.

/// Receives the hex string of a color the user selected. The palette code
/// never interprets what the sink does with it.
pub trait SelectionSink {
    /// Called with the `#RRGGBB` hex of the selected color.
    fn on_select(&self, hex: &str);
}

impl<F: Fn(&str)> SelectionSink for F {
    fn on_select(&self, hex: &str) {
        self(hex)
    }
}

/// A sink that ignores every selection. This is the default when a caller
/// does not care about selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopSink;

impl SelectionSink for NoopSink {
    fn on_select(&self, _hex: &str) {}
}
