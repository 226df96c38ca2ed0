//! Static copy shown on the page.

pub const TITLE: &str = "Purrfect Cat World";

pub const CHARACTERISTICS_SUBTITLE: &str = "What makes cats truly unique?";
pub const BREEDS_SUBTITLE: &str = "Explore these popular feline friends";

pub const CHARACTERISTICS: [&str; 5] = [
    "Independent and curious nature",
    "Excellent hunters with razor-sharp claws and teeth",
    "Incredibly flexible bodies and lightning-quick reflexes",
    "Exceptional senses, particularly acute hearing and night vision",
    "Complex communication through vocalizations, body language, and scent marking",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    pub name: &'static str,
    pub description: &'static str,
}

pub const BREEDS: [Breed; 5] = [
    Breed {
        name: "Siamese",
        description: "Known for their striking blue eyes and vocal nature",
    },
    Breed {
        name: "Maine Coon",
        description: "Gentle giants with tufted ears and luxurious fur",
    },
    Breed {
        name: "Persian",
        description: "Recognizable by their flat faces and long, silky coats",
    },
    Breed {
        name: "Bengal",
        description: "Wild-looking cats with mesmerizing leopard-like spots",
    },
    Breed {
        name: "Scottish Fold",
        description: "Adorable cats characterized by their unique folded ears",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub caption: &'static str,
    pub url: &'static str,
}

pub const GALLERY: [GalleryImage; 3] = [
    GalleryImage {
        caption: "Adorable cat",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    },
    GalleryImage {
        caption: "Tabby in the sun",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    },
    GalleryImage {
        caption: "Young ragdoll",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bc/Juvenile_Ragdoll.jpg/1200px-Juvenile_Ragdoll.jpg",
    },
];

pub fn hero_image() -> &'static GalleryImage {
    &GALLERY[0]
}
