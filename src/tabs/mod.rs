//! Tab switching for the rendered shelf page
//!
//! Buttons with class `tab-btn` name their panel in `data-tab`; panels are the
//! `tab-content` elements with the matching `id`. One button and its panel
//! carry the `active` class at a time.

#[cfg(feature = "wasm")]
pub mod dom;

pub const TAB_BUTTON_CLASS: &str = "tab-btn";
pub const TAB_CONTENT_CLASS: &str = "tab-content";
pub const TAB_TARGET_ATTR: &str = "data-tab";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    /// Value of `data-tab`, if the button has one
    pub target: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub id: String,
    pub active: bool,
}

/// Active-state model of one page's tab buttons and panels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabGroup {
    buttons: Vec<TabButton>,
    panels: Vec<TabPanel>,
}

impl TabGroup {
    pub fn new(buttons: Vec<TabButton>, panels: Vec<TabPanel>) -> Self {
        Self { buttons, panels }
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    /// Handle a click on button `index`: everything goes inactive, then the
    /// button and the panels whose id equals its target become active.
    /// Returns false for an index outside the group.
    pub fn click(&mut self, index: usize) -> bool {
        let Some(target) = self.buttons.get(index).map(|b| b.target.clone()) else {
            return false;
        };

        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.active = i == index;
        }
        for panel in &mut self.panels {
            panel.active = target.as_deref() == Some(panel.id.as_str());
        }
        true
    }

    pub fn active_button(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.active)
    }

    pub fn active_panels(&self) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(target: &str, active: bool) -> TabButton {
        TabButton {
            target: Some(target.to_string()),
            active,
        }
    }

    fn panel(id: &str, active: bool) -> TabPanel {
        TabPanel {
            id: id.to_string(),
            active,
        }
    }

    fn shelf_tabs() -> TabGroup {
        TabGroup::new(
            vec![
                button("reading", true),
                button("want", false),
                button("finished", false),
            ],
            vec![
                panel("reading", true),
                panel("want", false),
                panel("finished", false),
            ],
        )
    }

    #[test]
    fn click_activates_matching_panel_only() {
        let mut tabs = shelf_tabs();
        assert!(tabs.click(2));
        assert_eq!(tabs.active_button(), Some(2));
        assert_eq!(tabs.active_panels(), vec![2]);
        assert_eq!(tabs.buttons().iter().filter(|b| b.active).count(), 1);
    }

    #[test]
    fn click_is_idempotent() {
        let mut tabs = shelf_tabs();
        tabs.click(1);
        let once = tabs.clone();
        tabs.click(1);
        assert_eq!(tabs, once);
    }

    #[test]
    fn click_clears_stale_active_state() {
        let mut tabs = TabGroup::new(
            vec![button("reading", true), button("want", true)],
            vec![panel("reading", true), panel("want", true)],
        );
        tabs.click(0);
        assert_eq!(tabs.active_panels(), vec![0]);
        assert!(!tabs.buttons()[1].active);
    }

    #[test]
    fn button_without_target_hides_all_panels() {
        let mut tabs = shelf_tabs();
        tabs.buttons.push(TabButton {
            target: None,
            active: false,
        });
        assert!(tabs.click(3));
        assert_eq!(tabs.active_button(), Some(3));
        assert!(tabs.active_panels().is_empty());
    }

    #[test]
    fn target_with_no_panel_hides_all_panels() {
        let mut tabs = shelf_tabs();
        tabs.buttons.push(button("missing", false));
        tabs.click(3);
        assert!(tabs.active_panels().is_empty());
    }

    #[test]
    fn out_of_range_click_changes_nothing() {
        let mut tabs = shelf_tabs();
        let before = tabs.clone();
        assert!(!tabs.click(9));
        assert_eq!(tabs, before);
    }
}
