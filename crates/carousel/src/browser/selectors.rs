//! Host page element lookup configuration.

use serde::{Deserialize, Serialize};

/// Ids, class and attribute names the carousel binds to in the host page.
///
/// Every field has a default matching the conventional markup:
///
/// ```html
/// <div id="container">
///   <div id="gallery" style="position: absolute">
///     <img src="5.jpg"> <img src="1.jpg"> … <img src="5.jpg"> <img src="1.jpg">
///   </div>
///   <div id="indicators">
///     <span data-index="1" class="on"></span> … <span data-index="5"></span>
///   </div>
///   <a id="prev">&lt;</a> <a id="next">&gt;</a>
/// </div>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomSelectors {
    /// Id of the hoverable container
    pub container: String,
    /// Id of the strip holding the image slots
    pub gallery: String,
    /// Id of the "previous" trigger
    pub prev: String,
    /// Id of the "next" trigger
    pub next: String,
    /// Id of the indicator row
    pub indicators: String,
    /// Class marking the active indicator
    pub active_class: String,
    /// Attribute holding an indicator's 1-based index
    pub index_attribute: String,
    /// Style property carrying the strip offset
    pub offset_property: String,
}

impl Default for DomSelectors {
    fn default() -> Self {
        Self {
            container: "container".to_string(),
            gallery: "gallery".to_string(),
            prev: "prev".to_string(),
            next: "next".to_string(),
            indicators: "indicators".to_string(),
            active_class: "on".to_string(),
            index_attribute: "data-index".to_string(),
            offset_property: "left".to_string(),
        }
    }
}

impl DomSelectors {
    /// Parse selectors from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
