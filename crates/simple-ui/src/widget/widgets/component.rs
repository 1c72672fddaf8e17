//! Style resolution shared by every component.

use simple_ui_style::Style;

/// Where a component's style comes from.
///
/// A component's own style wins. Without one it uses the style handed down
/// by the enclosing table, and before it is attached, the default theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSlot {
    own: Option<Style>,
    inherited: Style,
}

impl StyleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style in effect.
    pub fn get(&self) -> &Style {
        self.own.as_ref().unwrap_or(&self.inherited)
    }

    /// The component's own style, if set.
    pub fn own(&self) -> Option<&Style> {
        self.own.as_ref()
    }

    pub fn set_own(&mut self, style: Option<Style>) {
        self.own = style;
    }

    /// Record the style of the enclosing table.
    pub fn inherit(&mut self, style: &Style) {
        self.inherited = style.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_ui_render::Color;

    #[test]
    fn test_resolution_order() {
        let mut slot = StyleSlot::new();
        assert_eq!(slot.get(), &Style::default_theme());

        let mut table = Style::default_theme();
        table.shadow_colour = Color::RED;
        slot.inherit(&table);
        assert_eq!(slot.get(), &table);

        let mut own = Style::default_theme();
        own.foreground_colour = Color::BLACK;
        slot.set_own(Some(own.clone()));
        assert_eq!(slot.get(), &own);

        slot.set_own(None);
        assert_eq!(slot.get(), &table);
    }
}
