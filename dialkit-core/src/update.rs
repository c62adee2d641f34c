//! Invalidation flags returned by widget interaction methods.

bitflags::bitflags! {
    /// What the host shell needs to refresh after an interaction.
    ///
    /// [Update::empty] doubles as "the interaction was a no-op".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Update: u8 {
        /// The widget must be redrawn.
        const DRAW = 1 << 0;
        /// The widget geometry must be recomputed before drawing.
        const LAYOUT = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_flags_combine() {
        let mut update = Update::empty();
        assert!(!update.contains(Update::DRAW));

        update |= Update::DRAW;
        update.insert(Update::LAYOUT);
        assert!(update.contains(Update::DRAW | Update::LAYOUT));
    }
}
