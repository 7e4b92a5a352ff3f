use std::fmt;

/// Identifier of an addressable element of the panel surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(&'static str);

impl ElementId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const FORM: ElementId = ElementId::new("correctionForm");
pub const INPUT_IMAGE_URL: ElementId = ElementId::new("imageUrl");
pub const INPUT_OUTPUT_URL: ElementId = ElementId::new("outputUrl");
pub const INPUT_FILE: ElementId = ElementId::new("imageFile");
pub const DROP_ZONE: ElementId = ElementId::new("dropZone");
pub const IMAGE_BEFORE: ElementId = ElementId::new("beforeImage");
pub const IMAGE_AFTER: ElementId = ElementId::new("afterImage");
pub const LABEL_RESULT: ElementId = ElementId::new("result");
pub const LABEL_STATUS: ElementId = ElementId::new("status");
