//! Built-in marketing copy and the defaults shown before the admin has
//! uploaded anything.

pub const STUDIO_NAME: &str = "24_pupilz";
pub const STUDIO_TAGLINE: &str =
    "Professional photography that tells your unique story through the lens of 24_pupilz.";
pub const STUDIO_EMAIL: &str = "hello@24pupilz.studio";
pub const STUDIO_PHONE: &str = "+91 98765 43210";
pub const STUDIO_LOCATION: &str = "Sathyamangalam, Tamil Nadu";
pub const STUDIO_INSTAGRAM: &str = "https://instagram.com/24_pupilz";

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub full_desc: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        id: "wedding",
        title: "Wedding Photography",
        short_desc: "Capturing the magic of your special day",
        full_desc: "Wedding photography is not just about capturing moments. At 24_pupilz it is about celebrating love: natural smiles, unposed emotions and genuine interactions. Our team blends into your celebrations and works tirelessly so you can relive those memories for years to come.",
    },
    Service {
        id: "baby-shower",
        title: "Baby Shower",
        short_desc: "Celebrating new beginnings beautifully",
        full_desc: "Baby shower photography captures the joy of welcoming a new life. From the decorations and games to the heartfelt emotions of family and friends, every moment of the celebration is preserved beautifully.",
    },
    Service {
        id: "puberty",
        title: "Puberty Ceremony",
        short_desc: "Traditional ceremonies with modern elegance",
        full_desc: "Puberty ceremonies are cultural milestones that deserve to be documented with care and respect. We capture every ritual and every blessing while bringing a modern, elegant touch to the photographs.",
    },
    Service {
        id: "commercial",
        title: "Commercial Shoots",
        short_desc: "Elevating your brand image",
        full_desc: "Commercial photography needs a keen eye for detail and brand aesthetics. We deliver product and lifestyle photography, from catalogs to campaigns, that brings your vision to life.",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "How much do you charge?",
        answer: "Every event is unique, so our pricing isn't one-size-fits-all. We'll understand your vision and craft a package that fits. Contact us for a personalised quotation.",
    },
    Faq {
        question: "How do we book your services?",
        answer: "Reach us through the contact form, by phone or on Instagram. We call back with a detailed quotation and confirm the booking once we agree on the package.",
    },
    Faq {
        question: "Do you travel for shoots outside Sathyamangalam?",
        answer: "Absolutely. We have covered events across Tamil Nadu and beyond, including Erode, Coimbatore and Chennai.",
    },
    Faq {
        question: "What makes you different from other photographers?",
        answer: "Storytelling, a personal approach and a commitment to authentic emotion. We prioritise your comfort and deliver timeless memories.",
    },
    Faq {
        question: "How long does it take to receive the final photos?",
        answer: "Edited photos are usually delivered within 2-4 weeks. Same-day previews are available for weddings on request.",
    },
    Faq {
        question: "Do you provide both photos and videos?",
        answer: "Yes. We offer photography and cinematography, including cinematic wedding films.",
    },
];

pub struct WorkflowStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const WORKFLOW: [WorkflowStep; 4] = [
    WorkflowStep {
        number: "01",
        title: "Pre-Planning",
        description: "We plan and analyze your requirements, discuss your vision, and finalize the details.",
    },
    WorkflowStep {
        number: "02",
        title: "On Shoot",
        description: "We capture the precise moments with creativity, care, and professional expertise.",
    },
    WorkflowStep {
        number: "03",
        title: "Post Processing",
        description: "Enhancing your moments with professional editing and color grading.",
    },
    WorkflowStep {
        number: "04",
        title: "Delivered",
        description: "Get your lifetime memories as beautifully crafted deliverables.",
    },
];

/// Shown while the testimonials collection is empty.
pub const DEFAULT_TESTIMONIALS: [(&str, &str, &str, &str); 4] = [
    (
        "Priya & Karthik",
        "Wedding Photography",
        "They captured every precious moment of our wedding beautifully. Professional, creative, and they made us feel so comfortable all day.",
        "Sathyamangalam",
    ),
    (
        "Divya Lakshmi",
        "Baby Shower",
        "They captured the joy of our baby shower perfectly. The photos are stunning and we'll cherish them forever.",
        "Erode",
    ),
    (
        "Ramesh & Family",
        "Puberty Ceremony",
        "Professional, punctual and incredibly talented. The traditional moments were captured with such elegance.",
        "Coimbatore",
    ),
    (
        "Sneha Mohan",
        "Portrait Session",
        "The attention to detail and creative vision are outstanding. They made me feel like a star during the shoot!",
        "Salem",
    ),
];

/// Shown while no image is flagged for the hero and no hero cover is set.
pub const DEFAULT_HERO_SLIDES: [(&str, &str); 3] = [
    (
        "https://images.unsplash.com/photo-1511895426328-dc8714191300?q=80&w=2070&auto=format&fit=crop",
        "Wedding Photography",
    ),
    (
        "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=2070&auto=format&fit=crop",
        "Portrait Photography",
    ),
    (
        "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?q=80&w=1964&auto=format&fit=crop",
        "Event Photography",
    ),
];

/// Shown in the about section while no about cover is set.
pub const DEFAULT_ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1554048612-387768052bf7?q=80&w=2053&auto=format&fit=crop";
