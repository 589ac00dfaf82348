use serde::Serialize;

/// A "why visit" highlight on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParkFeature {
    pub title: &'static str,
    pub description: &'static str,
    /// Key into the frontend icon set.
    pub icon: &'static str,
}

pub static PARK_FEATURES: [ParkFeature; 4] = [
    ParkFeature {
        title: "Life-Size Dinosaurs",
        description: "Stand face-to-face with incredibly detailed, animatronic dinosaurs that bring the era to life.",
        icon: "dino",
    },
    ParkFeature {
        title: "Interactive Exhibits",
        description: "Immerse yourself in prehistoric worlds through cutting-edge VR experiences.",
        icon: "vr",
    },
    ParkFeature {
        title: "Educational Programs",
        description: "Join our expert paleontologists for fascinating workshops and educational sessions.",
        icon: "educator",
    },
    ParkFeature {
        title: "Themed Attractions",
        description: "Journey through meticulously crafted prehistoric environments.",
        icon: "jungle",
    },
];
