/// One detection in original-image pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class_id: u32,
}

impl From<&schema::BoundingBox<'_>> for Detection {
    fn from(bbox: &schema::BoundingBox) -> Self {
        Self {
            x1: bbox.x1(),
            y1: bbox.y1(),
            x2: bbox.x2(),
            y2: bbox.y2(),
            confidence: bbox.confidence(),
            class_id: bbox.class_id(),
        }
    }
}
