//! The portfolio's static content, kept as typed data so the page
//! renderers stay free of copy and the copy stays free of markup.

pub struct Profile {
    pub name: &'static str,
    pub contact_line: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub summary: &'static str,
    /// Lines of the address card shown beside the contact form.
    pub card_lines: &'static [&'static str],
    /// Asset name of the profile photo, rendered when present.
    pub image: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Aliyah Khaet Regacho, CePL",
    contact_line: "Cebu, Philippines • +63 966 223 1048 • liyahregacho@gmail.com",
    tagline: "Computer Science Student • Freelancer • Virtual Assistant",
    about: "I'm Aliyah, a Computer Science student at Cebu Institute of Technology - \
            University. I work remotely on automation, documentation, and design projects \
            while pursuing a career in law and tech policy.",
    summary: "A detail-oriented automation specialist and documentation lead with experience \
              creating workflows, processing large datasets, and delivering client-facing \
              content. Skilled in design (Canva), basic web stacks (HTML/CSS/PHP), and \
              programming fundamentals (C/C++/Java).",
    card_lines: &[
        "Aliyah Khaet Regacho, CePL",
        "BS Computer Science",
        "Cebu Institute of Technology - University",
        "N. Bacalso Avenue, Cebu City",
    ],
    image: "me.png",
};

pub const CONTACT_BLURB: &str =
    "If you want to connect, drop your email and a short message — I'll respond as soon as I can.";

pub const FOOTER: &str = "BSCS - 3 F1 • Data Analytics and Visualization • Personal Portfolio";

pub struct ExperienceEntry {
    pub role: &'static str,
    pub org: &'static str,
    pub period: Option<&'static str>,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Executive General Manager & Documentation Officer",
        org: "VERGE Inc. (Remote)",
        period: Some("July - September 2024"),
        highlights: &[
            "Created system manuals, team leader protocols, and community outreach guidelines, \
             forming a cohesive resource framework for ongoing initiatives.",
            "Improved documentation efficiency with a systematic database, enhancing cross-team \
             access and communication.",
            "Established standardized process, driving efficient project completion and stronger \
             interdepartmental collaboration.",
        ],
    },
    ExperienceEntry {
        role: "Automation Specialist",
        org: "VERGE Inc. (Remote)",
        period: Some("July - August 2024"),
        highlights: &[
            "Developed and executed automated workflows for the HR Department, enhancing \
             application responsiveness and fostering improved internal cooperation.",
            "Created a comprehensive SaaS-focused website with organized product listings to \
             enhance customer navigation and interaction.",
            "Successfully incorporated more than a hundred CSV files of leads into a software \
             tool, improving data accessibility and functionality for team use.",
            "Created focused content for marketing campaigns, boosting brand awareness and \
             interaction.",
        ],
    },
    ExperienceEntry {
        role: "Freelance Graphics Designer",
        org: "Self-Employed",
        period: None,
        highlights: &[
            "Create customized visual designs using Canva for diverse client requirements.",
            "Generate engaging content to complement design deliverables.",
            "Optimize existing designs for enhanced professional appeal and project alignment.",
        ],
    },
];

pub struct Project {
    pub name: &'static str,
    pub context: &'static str,
    pub stack: &'static str,
    pub summary: &'static str,
    /// Asset name of the screenshot, rendered when present.
    pub screenshot: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Finish Line",
        context: "OOP2 Capstone",
        stack: "Java, JavaFX, MySQL (JDBC), CSS, Git, XAMPP",
        summary: "Finish Line is a typing game developed as a capstone project to sharpen typing \
                  skills while reinforcing core concepts from the CIT-U Computer Science \
                  curriculum. Built using Java, JavaFX, MySQL (via JDBC), and CSS, with GitHub \
                  for version control and XAMPP for local server deployment.",
        screenshot: Some("project_finishline.png"),
    },
    Project {
        name: "QuickCart",
        context: "Mobile Development",
        stack: "Kotlin / Android",
        summary: "QuickCart is a Kotlin-based Android app that streamlines grocery list creation \
                  and management. Designed for convenience and speed, it features an intuitive \
                  UI that helps users plan, organize, and shop efficiently.",
        screenshot: Some("project_quickcart.png"),
    },
    Project {
        name: "AIO StuBu",
        context: "OOP1 Capstone",
        stack: "Java, JavaFX",
        summary: "All-In-One Study Buddy (StuBu) is an offline-first Windows desktop app \
                  designed to equip students with essential academic tools on one platform. \
                  Developed using Java and JavaFX, it focuses on productivity, accessibility, \
                  and modular utility for learners.",
        screenshot: Some("project_aiostubu.png"),
    },
];

pub struct Education {
    pub school: &'static str,
    pub program: &'static str,
    pub awards: &'static [&'static str],
}

pub const EDUCATION: Education = Education {
    school: "Cebu Institute of Technology - University",
    program: "Bachelor of Science in Computer Science | 2023 - Present",
    awards: &[
        "Overall Rank 9 in Computer Science Department of A.Y 23-24, FlexhibIT Awards (2024)",
        "Academic Achiever, Parangal Awards (2025)",
        "College Scholar, Parangal Awards (2024)",
        "Recent GPA: 4.6/5.0",
    ],
};

pub const CERTIFICATIONS: &[&str] = &[
    "Certified Paralegal, Certified Paralegal and Legal Researchers, Inc. (September 2025)",
    "Passer, Civil Service Examination Professional Level (August 2025)",
    "Certification of Completion, Canva Education: Graphics Design Essential (October 2024)",
    "Part of the Top 1%, CodeChum C Language Certification Examination (May 2024)",
];

pub const PROJECTS_AND_EVENTS: &[&str] = &[
    "Volunteer - CIT-U College of Computer Studies Infographics Using Canva Seminar for ALS (June 2025)",
    "Technical Working Committee Head - CIT-U SSG Elections (May 2025)",
    "Technical Working Committee Head - CIT-U EDS – TINGOG (March 2025)",
    "Working Committee Member - CIT-U Intramurals (March 2025)",
    "Working Committee Member - CIT-U CCS Days: The Pixelated Playground (May 2024)",
    "Working Committee Member - CIT-U CSS Tutorials 2.0 (October 2023)",
];

pub const SEMINARS: &[&str] = &[
    "Best Delegate - CIT-U Model United Nations ECOSOC (July 2025)",
    "Participant - U-Konek: Youth Initiatives for Collaborative Civic Education (June 2025)",
    "Participant - MIX 4.0: SDG Champions Ideas Sharing Session (March 2025)",
    "Participant - Cebu City SSC-G Tertiary Federation – Voter Education Forum (April 2025)",
    "Semifinalist Adjudicator – Visayas Novice Debate Cup (December 2024)",
    "Delegate - ASEAN: Digital Literacy Programme Orientation (March 2023)",
    "Delegate - Ka-Dasig Youth Organization: Team Building (March 2023)",
    "Participant - JCI Philippines AREA 5 NSDM Celebration (Dec 2022)",
    "Participant - Kilos Ko Youth Fellowship Program (Dec 2021)",
    "Delegate - Youth Ally for Safe Space Movers (Nov 2021)",
];

pub const LEADERSHIP_IMAGE: &str = "leadership.jpg";
pub const LEADERSHIP_IMAGE_CAPTION: &str = "My organizations through the years";

pub const LEADERSHIP_ROLES: &[&str] = &[
    "Director for Partnership - Google Developer Groups on Campus - CIT-U (2025-2026)",
    "Officer - CIT-U Computer Students' Society Committee on Networks and Linkages (2025-2026)",
    "Secretary - CIT-U Elite Debate Society (2025-2026)",
    "Commissioner (Media and Archives) - CIT-U Supreme Student Government Committee on Public Relations (2025-2026)",
    "Head - CIT-U SSG Commission on Elections Technical Committee (2024-2025)",
    "Member - CIT-U Google Developer Students Club (2023-2024)",
    "Assistant Head - CIT-U Computer Students' Society Committee on Logistics (2023-2024)",
    "President - Talisay City National High School Supreme Secondary Learner's Government (2022-2023)",
    "Secretary, Supreme Student Government (2020-2021)",
    "Public Information Officer, Supreme Student Government (2019-2020)",
];

pub const TECH_SKILLS: &[&str] = &[
    "GoHighLevel",
    "Canva",
    "Figma",
    "HTML",
    "CSS",
    "PHP (Beginner)",
    "Trello",
    "Slack",
    "Zoho",
    "SurveySparrow",
    "MS Office",
    "Google Workspace",
    "C",
    "C++",
    "Java",
    "VS Code",
    "IntelliJ",
    "Scene Builder - Gluon",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Remote team collaboration",
    "Strategic planning",
    "Documentation",
    "Leadership and team management",
    "Time management",
    "Client relations",
    "Public speaking",
    "Event organization",
];
