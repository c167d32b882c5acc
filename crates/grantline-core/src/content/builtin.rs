//! Built-in GrantStudios page copy

use super::{
    Company, DemoContent, FaqContent, FaqEntry, Feature, FeaturesContent, HeroContent, LegalDocument,
    LegalItem, LegalSection, Link, PricingContent, ProblemContent, SiteContent, SocialLinks, Stat,
};

fn s(text: &str) -> String {
    text.to_string()
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: s(label),
        href: s(href),
    }
}

fn item(label: Option<&str>, text: &str) -> LegalItem {
    LegalItem {
        label: label.map(s),
        text: s(text),
    }
}

fn section(heading: &str, body: &str, items: Vec<LegalItem>) -> LegalSection {
    LegalSection {
        heading: s(heading),
        body: s(body),
        items,
    }
}

pub(super) fn grantstudios() -> SiteContent {
    SiteContent {
        company: Company {
            name: s("GrantStudios"),
            tagline: s("AI Solutions for Tradesmen."),
            email: s("carlgrantacquah@gmail.com"),
            phone: s("+233 559 328 385"),
            location: s("Tema, Greater Accra"),
        },
        nav_links: vec![
            link("Features", "#features"),
            link("Demo", "#demo"),
            link("Pricing", "#pricing"),
            link("FAQ", "#faq"),
        ],
        nav_cta: link("Book Strategy Call", "#contact"),
        social: SocialLinks {
            linkedin: s("https://www.linkedin.com/in/carl-grant-acquah/"),
            twitter: s("https://x.com/realcarlgrant"),
        },
        hero: HeroContent {
            badge: s("Trusted by top independent contractors"),
            headline: s("Stop Losing Emergency"),
            headline_accent: s("Jobs to Voicemail."),
            subheading: s(
                "The 24/7 AI Dispatcher for HVAC & Plumbers. It answers calls, vets emergencies, \
                 and books appointments while you're on the job site.",
            ),
            primary_cta: link("Hear The Demo", "#demo"),
            secondary_cta: link("Learn More", "#features"),
        },
        problem: ProblemContent {
            headline: s("Your Voicemail is Costing You Money."),
            body: s(
                "85% of customers hang up if they hear a voicemail. When you are under a house, \
                 {company} picks up the phone.",
            ),
            stats: vec![
                Stat {
                    value: s("85%"),
                    label: s("Hang up rate on voicemail"),
                },
                Stat {
                    value: s("$5k+"),
                    label: s("Lost monthly revenue"),
                },
                Stat {
                    value: s("0"),
                    label: s("Jobs missed with AI"),
                },
            ],
        },
        demo: DemoContent {
            headline: s("Listen to \"Alex\" Handle an Emergency Call."),
            body: s(
                "The customer says \"Furnace Broken.\" Listen to how Alex secures the $300 \
                 diagnostic fee before you even wake up.",
            ),
            bullets: vec![
                s("Immediate Response"),
                s("Polite & Professional"),
                s("Books The Appointment"),
            ],
            player_title: s("Live Demo: Alex Handling a Leak"),
            player_subtitle: s("Incoming Call: 2:00 AM"),
        },
        features: FeaturesContent {
            eyebrow: s("The Solution"),
            headline: s("Built for the Trades."),
            items: vec![
                Feature {
                    title: s("Emergency Screening"),
                    description: s(
                        "The AI detects keywords like 'Leak,' 'No Heat,' or 'Burst Pipe' and \
                         flags them as priority.",
                    ),
                },
                Feature {
                    title: s("Instant Calendar Booking"),
                    description: s(
                        "Connects directly to your calendar to book diagnostic slots without \
                         double booking you.",
                    ),
                },
                Feature {
                    title: s("SMS Follow-Up"),
                    description: s(
                        "Instantly texts the customer a confirmation and prepares them for your \
                         arrival.",
                    ),
                },
            ],
        },
        pricing: PricingContent {
            badge: s("Most Popular"),
            plan_name: s("The Pro Dispatcher"),
            price: s("$297"),
            period: s("/mo"),
            inclusions: vec![
                s("Zero Setup Fee"),
                s("500 Minutes of Talk Time"),
                s("24/7 Call Answering"),
                s("Emergency SMS Alerts"),
                s("Weekly Lead Reports"),
            ],
            cta: s("Start Free Trial"),
            guarantee: s("Guarantee: Pays for itself with 1 saved job or your money back."),
        },
        faq: FaqContent {
            eyebrow: s("FAQ"),
            headline: s("Common Questions"),
            entries: vec![
                FaqEntry {
                    question: s("How does the AI handle accents or bad connections?"),
                    answer: s(
                        "GrantStudios uses advanced natural language processing trained on \
                         diverse voice datasets. It performs remarkably well with various accents. \
                         If the connection is too poor to understand, it politely asks the caller \
                         to repeat or redirects to voicemail/SMS.",
                    ),
                },
                FaqEntry {
                    question: s("Does it integrate with ServiceTitan or Housecall Pro?"),
                    answer: s(
                        "Yes, we integrate with major field service management software including \
                         ServiceTitan, Housecall Pro, and Jobber to sync appointments directly to \
                         your dispatch board.",
                    ),
                },
                FaqEntry {
                    question: s("What if the AI makes a mistake?"),
                    answer: s(
                        "The system records every call and transcripts are sent immediately to you \
                         via SMS/Email. If a booking detail is slightly off, you can catch it \
                         instantly. However, our error rate is extremely low for structured tasks \
                         like booking.",
                    ),
                },
                FaqEntry {
                    question: s("Is there a contract?"),
                    answer: s(
                        "No, our services are month-to-month. We believe the value we provide will \
                         keep you around, not a piece of paper. You can cancel anytime.",
                    ),
                },
            ],
        },
        privacy: privacy_policy(),
        terms: terms_of_service(),
    }
}

fn privacy_policy() -> LegalDocument {
    LegalDocument {
        title: s("Privacy Policy"),
        sections: vec![
            section(
                "1. Introduction",
                "Welcome to {company}. We respect your privacy and are committed to protecting \
                 your personal data. This privacy policy will inform you as to how we look after \
                 your personal data when you visit our website or use our services.",
                Vec::new(),
            ),
            section(
                "2. Data We Collect",
                "We may collect, use, store and transfer different kinds of personal data about \
                 you which we have grouped together as follows:",
                vec![
                    item(
                        Some("Identity Data:"),
                        "includes first name, last name, username or similar identifier.",
                    ),
                    item(
                        Some("Contact Data:"),
                        "includes billing address, delivery address, email address and telephone \
                         numbers.",
                    ),
                    item(
                        Some("Technical Data:"),
                        "includes internet protocol (IP) address, your login data, browser type \
                         and version.",
                    ),
                    item(
                        Some("Usage Data:"),
                        "includes information about how you use our website, products and \
                         services (including call recordings for quality assurance).",
                    ),
                ],
            ),
            section(
                "3. How We Use Your Data",
                "We will only use your personal data when the law allows us to. Most commonly, we \
                 will use your personal data in the following circumstances:",
                vec![
                    item(
                        None,
                        "Where we need to perform the contract we are about to enter into or have \
                         entered into with you.",
                    ),
                    item(
                        None,
                        "Where it is necessary for our legitimate interests (or those of a third \
                         party) and your interests and fundamental rights do not override those \
                         interests.",
                    ),
                    item(
                        None,
                        "To facilitate AI dispatching services and appointment bookings.",
                    ),
                ],
            ),
            section(
                "4. Data Security",
                "We have put in place appropriate security measures to prevent your personal data \
                 from being accidentally lost, used or accessed in an unauthorized way, altered or \
                 disclosed.",
                Vec::new(),
            ),
            section(
                "5. Contact Details",
                "If you have any questions about this privacy policy or our privacy practices, \
                 please contact us at: {email}.",
                Vec::new(),
            ),
        ],
    }
}

fn terms_of_service() -> LegalDocument {
    LegalDocument {
        title: s("Terms of Service"),
        sections: vec![
            section(
                "1. Agreement to Terms",
                "By accessing or using the services provided by {company}, you agree to be bound \
                 by these Terms of Service. If you disagree with any part of the terms, you may not \
                 access the service.",
                Vec::new(),
            ),
            section(
                "2. Service Description",
                "{company} provides AI-powered call answering, screening, and dispatching services \
                 for contractors. We act as an intermediary to facilitate communication between \
                 you and your customers.",
                Vec::new(),
            ),
            section(
                "3. User Responsibilities",
                "You are responsible for maintaining the confidentiality of your account and for \
                 all activities that occur under your account. You agree to provide accurate and \
                 complete information when registering for the service.",
                Vec::new(),
            ),
            section(
                "4. AI Limitations",
                "While we strive for high accuracy, our services utilize Artificial Intelligence \
                 which may occasionally make errors in transcription, intent detection, or \
                 booking. {company} is not liable for lost revenue, missed appointments, or \
                 miscommunications resulting from AI errors.",
                Vec::new(),
            ),
            section(
                "5. Payment and Subscription",
                "Services are billed on a subscription basis. You agree to pay all fees associated \
                 with your chosen plan. Prices are subject to change with notice.",
                Vec::new(),
            ),
            section(
                "6. Termination",
                "We may terminate or suspend your account immediately, without prior notice or \
                 liability, for any reason whatsoever, including without limitation if you breach \
                 the Terms.",
                Vec::new(),
            ),
            section(
                "7. Governing Law",
                "These Terms shall be governed and construed in accordance with the laws of \
                 {jurisdiction} and United States, without regard to its conflict of law \
                 provisions.",
                Vec::new(),
            ),
        ],
    }
}
