use super::aggregate::{Location, OperatingHours};

pub static LOCATIONS: [Location; 3] = [
    Location {
        id: 1,
        city: "Kuantan",
        state: "Pahang",
        address: "Zoo Teruntum, Jalan Padang Golf, 25050 Kuantan, Pahang",
        short_address: "Zoo Teruntum, Jalan Padang Golf",
        phone: Some("+60 9-560 1112"),
        email: "sales@zooteruntum.my",
        image: "/images/locations/kuantan.png",
        hours: OperatingHours {
            weekdays: "9:00 AM - 6:00 PM",
            weekends: "9:00 AM - 7:00 PM",
            holidays: "8:00 AM - 8:00 PM",
        },
    },
    Location {
        id: 2,
        city: "Kuala Terengganu",
        state: "Terengganu",
        address: "Kampung Laut Chendering, 21080 Kuala Terengganu, Terengganu",
        short_address: "Kampung Laut Chendering",
        phone: Some("+60 96174004"),
        email: "sales@dinosaurencounter.com.my",
        image: "/images/locations/terengganu.jpg",
        hours: OperatingHours {
            weekdays: "10:00 AM - 7:00 PM",
            weekends: "9:00 AM - 8:00 PM",
            holidays: "9:00 AM - 9:00 PM",
        },
    },
    Location {
        id: 3,
        city: "Batu Gajah",
        state: "Perak",
        address: "Persiaran Silverlakes, Kampung Belangkor, 31000 Batu Gajah, Perak",
        short_address: "Persiaran Silverlakes",
        phone: None,
        email: "sales@dinosaurencounterworld.com",
        image: "/images/locations/perak.jpg",
        hours: OperatingHours {
            weekdays: "10:00 AM - 6:00 PM",
            weekends: "9:00 AM - 7:00 PM",
            holidays: "9:00 AM - 8:00 PM",
        },
    },
];
