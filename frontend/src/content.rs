//! Static copy rendered by the page sections.

pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavEntry] = &[
    NavEntry { href: "#services", label: "Services" },
    NavEntry { href: "#gallery", label: "Our Work" },
    NavEntry { href: "#faq", label: "FAQ" },
    NavEntry { href: "#booking", label: "Book Now" },
];

pub struct Service {
    pub value: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        value: "Boiler Installation",
        title: "Boiler Installation",
        blurb: "New combi, system and regular boilers fitted and commissioned.",
    },
    Service {
        value: "Boiler Repair",
        title: "Boiler Repair & Servicing",
        blurb: "Annual services, breakdowns and fault finding on all major brands.",
    },
    Service {
        value: "Central Heating",
        title: "Central Heating",
        blurb: "Radiators, power flushing, thermostats and full system upgrades.",
    },
    Service {
        value: "Bathroom Plumbing",
        title: "Bathroom Plumbing",
        blurb: "Showers, taps, toilets and complete bathroom refits.",
    },
    Service {
        value: "Emergency Call-out",
        title: "Emergency Call-outs",
        blurb: "Leaks, bursts and no heating or hot water, dealt with quickly.",
    },
    Service {
        value: "Other",
        title: "Something Else",
        blurb: "Tell us what you need in the booking form.",
    },
];

pub const TIME_SLOTS: &[&str] = &[
    "Morning (8am - 12pm)",
    "Afternoon (12pm - 4pm)",
    "Evening (4pm - 7pm)",
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Which areas do you cover?",
        answer: "We cover the town and surrounding villages within roughly 20 miles. If you're unsure, send a booking request and we'll let you know.",
    },
    FaqEntry {
        question: "Are you Gas Safe registered?",
        answer: "Yes. All gas work is carried out by a Gas Safe registered engineer and you'll get the certificate for any appliance we install.",
    },
    FaqEntry {
        question: "Do you offer emergency call-outs?",
        answer: "We keep space in the diary for emergencies. Pick 'Emergency Call-out' in the booking form and describe the problem.",
    },
    FaqEntry {
        question: "How much does a boiler service cost?",
        answer: "A standard annual service is a fixed price. Larger or older systems may need extra time, which we'll always agree with you first.",
    },
    FaqEntry {
        question: "Do you guarantee your work?",
        answer: "All workmanship is guaranteed for 12 months and new boilers carry the manufacturer's warranty on top.",
    },
];

pub struct GalleryEntry {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryEntry] = &[
    GalleryEntry { src: "/assets/gallery/boiler-install.jpg", alt: "New combi boiler installation" },
    GalleryEntry { src: "/assets/gallery/bathroom-refit.jpg", alt: "Completed bathroom refit" },
    GalleryEntry { src: "/assets/gallery/radiators.jpg", alt: "Replacement radiators" },
    GalleryEntry { src: "/assets/gallery/cylinder.jpg", alt: "Unvented hot water cylinder" },
    GalleryEntry { src: "/assets/gallery/underfloor.jpg", alt: "Underfloor heating manifold" },
    GalleryEntry { src: "/assets/gallery/shower.jpg", alt: "Thermostatic shower fitting" },
];
