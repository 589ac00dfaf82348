use super::aggregate::{Attraction, AttractionDetails, AttractionSchedule};

pub static ATTRACTIONS: [Attraction; 5] = [
    Attraction {
        id: 1,
        title: "Dino Show",
        summary: "Experience our breathtaking live shows featuring life-sized dinosaurs in action. Watch as these prehistoric creatures come to life through stunning puppetry and state-of-the-art animatronics.",
        description: "Experience our breathtaking live shows featuring life-sized dinosaurs in action.",
        long_description: Some("Immerse yourself in our spectacular live performances where prehistoric giants come to life through masterful puppetry and cutting-edge animatronics. Our skilled performers and state-of-the-art effects create an unforgettable experience that brings the Mesozoic era right before your eyes."),
        image: "/images/attractions/show.png",
        features: &[
            "Live Performances",
            "Special Effects",
            "Interactive Elements",
            "Professional Performers",
            "Educational Commentary",
            "Photo Opportunities",
        ],
        details: Some(AttractionDetails {
            duration: "45 minutes",
            location: "Prehistoric Amphitheater",
            capacity: "300 people",
            age_restriction: "Suitable for all ages",
        }),
        schedule: Some(AttractionSchedule {
            weekdays: "11:00 AM, 2:00 PM, 4:00 PM",
            weekends: "10:00 AM, 12:00 PM, 2:00 PM, 4:00 PM, 6:00 PM",
            holidays: "Every 2 hours from 10:00 AM to 6:00 PM",
        }),
    },
    Attraction {
        id: 2,
        title: "Virtual Reality",
        summary: "Step into the Jurassic world with our cutting-edge VR experiences. Interact with dinosaurs in their natural habitat.",
        description: "Step into the Jurassic world with our cutting-edge VR experiences.",
        long_description: Some("Transport yourself millions of years back in time with our state-of-the-art virtual reality experience. Interact with dinosaurs in their natural habitat, witness prehistoric landscapes, and participate in thrilling scenarios that blend education with entertainment."),
        image: "/images/attractions/vr.png",
        features: &[
            "Immersive 3D World",
            "Interactive Gameplay",
            "Multiple Scenarios",
            "Latest VR Technology",
            "Guided Experience",
            "Educational Content",
        ],
        details: Some(AttractionDetails {
            duration: "30 minutes",
            location: "Innovation Center",
            capacity: "20 people per session",
            age_restriction: "8 years and above",
        }),
        schedule: Some(AttractionSchedule {
            weekdays: "10:00 AM - 5:00 PM (Sessions every 30 minutes)",
            weekends: "9:00 AM - 6:00 PM (Sessions every 30 minutes)",
            holidays: "9:00 AM - 7:00 PM (Sessions every 30 minutes)",
        }),
    },
    Attraction {
        id: 3,
        title: "Souvenir Shop",
        summary: "Take home a piece of prehistory from our extensive collection of dinosaur merchandise and fossils.",
        description: "Take home a piece of prehistory from our extensive collection.",
        long_description: Some("Browse through our carefully curated collection of dinosaur merchandise, from authentic fossil replicas to educational toys and exclusive branded items. Our shop offers something special for every dinosaur enthusiast, making your visit memorable long after you leave."),
        image: "/images/attractions/shop.png",
        features: &[
            "Exclusive Merchandise",
            "Fossil Replicas",
            "Custom Gifts",
            "Educational Books",
            "Limited Editions",
            "Personalized Items",
        ],
        details: Some(AttractionDetails {
            duration: "Open Access",
            location: "Main Plaza",
            capacity: "Unlimited",
            age_restriction: "All ages welcome",
        }),
        schedule: Some(AttractionSchedule {
            weekdays: "9:00 AM - 6:00 PM",
            weekends: "9:00 AM - 7:00 PM",
            holidays: "9:00 AM - 8:00 PM",
        }),
    },
    Attraction {
        id: 4,
        title: "Animatronics",
        summary: "Marvel at our collection of ultra-realistic animatronic dinosaurs, featuring precise movements based on paleontological research.",
        description: "Marvel at our collection of ultra-realistic animatronic dinosaurs.",
        long_description: None,
        image: "/images/attractions/animatronics.png",
        features: &["Realistic Movements", "Scientific Accuracy", "Photo Ops"],
        details: None,
        schedule: None,
    },
    Attraction {
        id: 5,
        title: "Discovery Zone",
        summary: "Engage in hands-on activities including fossil digs, educational workshops, and interactive exhibits perfect for all ages.",
        description: "Hands-on fossil digs, workshops and interactive exhibits.",
        long_description: None,
        image: "/images/attractions/discovery.png",
        features: &["Fossil Dig Pits", "Science Labs", "Interactive Exhibits"],
        details: None,
        schedule: None,
    },
];
