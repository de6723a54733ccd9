//! DOM-backed viewport and indicator row.

use super::style::{format_px, parse_px};
use carousel_core::{Indicators, Viewport};
use web_sys::{Element, HtmlElement};

/// Strip element whose inline style property carries the offset.
#[derive(Debug)]
pub struct DomViewport {
    element: HtmlElement,
    property: String,
}

impl DomViewport {
    /// Wrap the strip element, writing offsets to `property` (e.g. `left`).
    #[must_use]
    pub fn new(element: HtmlElement, property: impl Into<String>) -> Self {
        Self {
            element,
            property: property.into(),
        }
    }
}

impl Viewport for DomViewport {
    fn offset(&self) -> i32 {
        self.element
            .style()
            .get_property_value(&self.property)
            .ok()
            .and_then(|value| parse_px(&value))
            .unwrap_or(0)
    }

    fn set_offset(&mut self, px: i32) {
        if let Err(err) = self
            .element
            .style()
            .set_property(&self.property, &format_px(px))
        {
            log::error!("failed to set {}: {err:?}", self.property);
        }
    }
}

/// Indicator children of the indicator row, toggled via a class.
#[derive(Debug)]
pub struct DomIndicators {
    items: Vec<Element>,
    active_class: String,
}

impl DomIndicators {
    /// Collect the element children of `row`.
    #[must_use]
    pub fn from_row(row: &Element, active_class: impl Into<String>) -> Self {
        let children = row.children();
        let items = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        Self {
            items,
            active_class: active_class.into(),
        }
    }

    /// Whether the indicator at `position` currently carries the active class.
    #[must_use]
    pub fn is_active(&self, position: usize) -> bool {
        self.items
            .get(position)
            .is_some_and(|item| item.class_list().contains(&self.active_class))
    }
}

impl Indicators for DomIndicators {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn set_active(&mut self, position: usize, active: bool) {
        let Some(item) = self.items.get(position) else {
            return;
        };
        let classes = item.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(err) = result {
            log::error!("failed to toggle indicator {}: {err:?}", position + 1);
        }
    }
}
