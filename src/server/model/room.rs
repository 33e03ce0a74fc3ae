//! Rooms and the photographed surfaces they are made of.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::inspection::SurfaceDto;

/// A photographed location within a room.
///
/// Declaration order is the order in which the submission pipeline scans a room's
/// form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Surface {
    InteriorCeiling,
    InteriorFrontWall,
    InteriorRightWall,
    InteriorBackWall,
    InteriorLeftWall,
    InteriorFloor,
    ExteriorFrontWall,
    ExteriorRightWall,
    ExteriorLeftWall,
    ExteriorBackWall,
    SurroundingAreaOfBackwall,
    SurroundingAreaOfLeftwall,
    SurroundingAreaOfFrontwall,
    SurroundingAreaOfRightwall,
    Roof,
}

impl Surface {
    /// Every known surface, in scan order.
    pub const ALL: [Surface; 15] = [
        Surface::InteriorCeiling,
        Surface::InteriorFrontWall,
        Surface::InteriorRightWall,
        Surface::InteriorBackWall,
        Surface::InteriorLeftWall,
        Surface::InteriorFloor,
        Surface::ExteriorFrontWall,
        Surface::ExteriorRightWall,
        Surface::ExteriorLeftWall,
        Surface::ExteriorBackWall,
        Surface::SurroundingAreaOfBackwall,
        Surface::SurroundingAreaOfLeftwall,
        Surface::SurroundingAreaOfFrontwall,
        Surface::SurroundingAreaOfRightwall,
        Surface::Roof,
    ];

    /// Field name used in the submitted form and in stored room documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Surface::InteriorCeiling => "interiorCeiling",
            Surface::InteriorFrontWall => "interiorFrontWall",
            Surface::InteriorRightWall => "interiorRightWall",
            Surface::InteriorBackWall => "interiorBackWall",
            Surface::InteriorLeftWall => "interiorLeftWall",
            Surface::InteriorFloor => "interiorFloor",
            Surface::ExteriorFrontWall => "exteriorFrontWall",
            Surface::ExteriorRightWall => "exteriorRightWall",
            Surface::ExteriorLeftWall => "exteriorLeftWall",
            Surface::ExteriorBackWall => "exteriorBackWall",
            Surface::SurroundingAreaOfBackwall => "surroundingAreaOfBackwall",
            Surface::SurroundingAreaOfLeftwall => "surroundingAreaOfLeftwall",
            Surface::SurroundingAreaOfFrontwall => "surroundingAreaOfFrontwall",
            Surface::SurroundingAreaOfRightwall => "surroundingAreaOfRightwall",
            Surface::Roof => "roof",
        }
    }

    /// Interior surfaces (and the roof) are mandatory on the inspection form;
    /// exterior and surrounding-area surfaces are optional.
    pub fn is_interior(self) -> bool {
        matches!(
            self,
            Surface::InteriorCeiling
                | Surface::InteriorFrontWall
                | Surface::InteriorRightWall
                | Surface::InteriorBackWall
                | Surface::InteriorLeftWall
                | Surface::InteriorFloor
                | Surface::Roof
        )
    }

    /// Bilingual display label shown next to the upload control.
    pub fn label(self) -> &'static str {
        match self {
            Surface::InteriorCeiling => "Interior Ceiling (भीतरी छत)",
            Surface::InteriorFrontWall => "Interior Front Wall (भीतरी सामने की दीवार)",
            Surface::InteriorRightWall => "Interior Right Wall (भीतरी दायीं दीवार)",
            Surface::InteriorBackWall => "Interior Back Wall (भीतरी पिछली दीवार)",
            Surface::InteriorLeftWall => "Interior Left Wall (भीतरी बायीं दीवार)",
            Surface::InteriorFloor => "Interior Floor (भीतरी फ़र्श)",
            Surface::ExteriorFrontWall => "Exterior Front Wall (बाहरी सामने की दीवार)",
            Surface::ExteriorRightWall => "Exterior Right Wall (बाहरी दायीं दीवार)",
            Surface::ExteriorLeftWall => "Exterior Left Wall (बाहरी बायीं दीवार)",
            Surface::ExteriorBackWall => "Exterior Back Wall (बाहरी पिछली दीवार)",
            Surface::SurroundingAreaOfBackwall => {
                "Surrounding Area of Backwall (पिछली दीवार की नींव के आसपास का क्षेत्र)"
            }
            Surface::SurroundingAreaOfLeftwall => {
                "Surrounding Area of Leftwall (बायीं दीवार की नींव के आसपास का क्षेत्र)"
            }
            Surface::SurroundingAreaOfFrontwall => {
                "Surrounding Area of Frontwall (सामने की दीवार की नींव के आसपास का क्षेत्र)"
            }
            Surface::SurroundingAreaOfRightwall => {
                "Surrounding Area of Rightwall (दायीं दीवार की नींव के आसपास का क्षेत्र)"
            }
            Surface::Roof => "Roof (ऊपरी छत)",
        }
    }

    /// Compound form key for this surface in the room at `index`,
    /// e.g. `rooms[0][interiorFrontWall]`.
    pub fn form_key(self, index: usize) -> String {
        format!("rooms[{}][{}]", index, self.as_str())
    }

    pub fn into_dto(self) -> SurfaceDto {
        SurfaceDto {
            key: self.as_str().to_string(),
            label: self.label().to_string(),
            required: self.is_interior(),
        }
    }
}

/// One inspected room: the uploaded image URLs for each surface.
///
/// A room always has an entry for every [`Surface`], empty when nothing was uploaded
/// for it. Both construction and deserialization fill in missing surfaces, so stored
/// and returned rooms share a uniform shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Surface, Vec<String>>",
    into = "BTreeMap<Surface, Vec<String>>"
)]
pub struct Room {
    images: BTreeMap<Surface, Vec<String>>,
}

impl Room {
    /// Creates a room with an empty image list for every surface.
    pub fn new() -> Self {
        Self {
            images: Surface::ALL
                .iter()
                .map(|surface| (*surface, Vec::new()))
                .collect(),
        }
    }

    /// Image URLs uploaded for `surface`, in submission order.
    pub fn images(&self, surface: Surface) -> &[String] {
        self.images.get(&surface).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends an uploaded image URL to `surface`.
    pub fn push(&mut self, surface: Surface, url: String) {
        self.images.entry(surface).or_default().push(url);
    }

    /// Total number of image URLs across every surface.
    pub fn image_count(&self) -> usize {
        self.images.values().map(Vec::len).sum()
    }

    /// Converts the room to its wire form keyed by surface field name.
    pub fn into_dto(self) -> BTreeMap<String, Vec<String>> {
        self.images
            .into_iter()
            .map(|(surface, urls)| (surface.as_str().to_string(), urls))
            .collect()
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<Surface, Vec<String>>> for Room {
    fn from(images: BTreeMap<Surface, Vec<String>>) -> Self {
        let mut room = Room::new();
        for (surface, urls) in images {
            room.images.insert(surface, urls);
        }
        room
    }
}

impl From<Room> for BTreeMap<Surface, Vec<String>> {
    fn from(room: Room) -> Self {
        room.images
    }
}
