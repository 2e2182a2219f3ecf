//! The static portfolio registry: literal tables rendered as-is, no state.

pub struct Skill {
    pub name: &'static str,
    pub image: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub demo: Demo,
    pub github_url: &'static str,
}

/// How a project is shown off beyond its repository, if at all.
pub enum Demo {
    Website(&'static str),
    Video(&'static str),
    Prototype(&'static str),
    None,
}

pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub image: &'static str,
    pub proof: CertificateProof,
    pub tags: &'static [&'static str],
}

/// Where the certificate itself lives: a bundled PDF or an issuer page.
pub enum CertificateProof {
    Pdf(&'static str),
    Web(&'static str),
}

pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const OWNER: &str = "Rafi Iqbal";

pub const ABOUT: &str = "I am an Associate Degree student in Informatics \
Engineering at Politeknik Negeri Semarang, having started my academic journey \
in 2023. I have a strong interest in application development, particularly in \
User Interface design. Additionally, I am currently learning the fundamentals \
of Cyber Security to deepen my understanding of system and application \
security.";

/// Section ids, in page order; the nav highlights whichever one is under the
/// viewport anchor.
pub const SECTIONS: &[&str] = &[
    "about",
    "skills",
    "projects",
    "certifications",
    "experience",
    "contact",
    "comments",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Flutter", image: "/bahasa/flutter.png" },
    Skill { name: "React", image: "/bahasa/react.png" },
    Skill { name: "Next.js", image: "/bahasa/nextjs.png" },
    Skill { name: "Laravel", image: "/bahasa/laravel.png" },
    Skill { name: "PHP", image: "/bahasa/php.png" },
    Skill { name: "Python", image: "/bahasa/python.png" },
    Skill { name: "MySQL", image: "/bahasa/mysql.png" },
    Skill { name: "Figma", image: "/bahasa/figma.png" },
    Skill { name: "VSCode", image: "/bahasa/vscode.png" },
    Skill { name: "XAMPP", image: "/bahasa/xampp.png" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ujian Online App",
        description: "Online Testing Web for TOEFL exam",
        technologies: &["React", "MySQL"],
        image: "/porto/porto1.png",
        demo: Demo::Website("https://example.com/demo"),
        github_url: "https://github.com/rafiiiqball24/aplikasi-ujian-online33.git",
    },
    Project {
        title: "Flexy Mobile App",
        description: "Ticketing mobile application",
        technologies: &["Flutter", "Laravel"],
        image: "/porto/porto2.jpg",
        demo: Demo::Prototype("https://www.figma.com/proto/lwnoA9GxUdOjM9XEPhOlPV/flexyApp?node-id=242-61&p=f&t=E98sbroYmi5Op61V-1&scaling=scale-down&content-scaling=fixed&page-id=27%3A25&starting-point-node-id=100%3A97&show-proto-sidebar=1"),
        github_url: "https://github.com/rafiiiqball24/appflexy.git",
    },
    Project {
        title: "Task Manager",
        description: "Aplikasi manajemen tugas dengan fitur reminder",
        technologies: &["React Native", "Redux"],
        image: "/placeholder.svg?height=200&width=300",
        demo: Demo::Video("https://youtube.com/watch?v=demo-id"),
        github_url: "https://github.com/username/project",
    },
    Project {
        title: "Blog Platform",
        description: "Platform blog dengan sistem manajemen konten",
        technologies: &["Laravel", "MySQL", "Bootstrap"],
        image: "/placeholder.svg?height=200&width=300",
        demo: Demo::Website("https://example.com/demo"),
        github_url: "https://github.com/username/project",
    },
    Project {
        title: "Weather App",
        description: "Aplikasi cuaca dengan data real-time dan prediksi",
        technologies: &["Flutter", "REST API"],
        image: "/placeholder.svg?height=200&width=300",
        demo: Demo::Prototype("https://www.figma.com/proto/yreuCIRRNUukVBs3N2lfM9/PBL-exam?node-id=62-791&p=f&t=JDs8nfzrRu8rmCgm-1&scaling=min-zoom&content-scaling=fixed&page-id=0%3A1&starting-point-node-id=45%3A99&show-proto-sidebar=1"),
        github_url: "https://github.com/username/project",
    },
    Project {
        title: "Social Media Dashboard",
        description: "Dashboard untuk monitoring aktivitas sosial media",
        technologies: &["React", "Chart.js", "Material UI"],
        image: "/placeholder.svg?height=200&width=300",
        demo: Demo::None,
        github_url: "https://github.com/username/project",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Database Progaming With SQL",
        issuer: "Oracle Academy",
        date: "Oktober 2024",
        image: "/photos/sertif1.png",
        proof: CertificateProof::Pdf("/certificate/certif1.pdf"),
        tags: &["MySQL", "Database"],
    },
    Certificate {
        title: "Database Design With SQL",
        issuer: "Oracle Academy",
        date: "Oktober 2024",
        image: "/photos/sertif2.png",
        proof: CertificateProof::Pdf("/certificate/certif2.pdf"),
        tags: &["MySQL", "Database"],
    },
    Certificate {
        title: "Career Essentials in Generative AI",
        issuer: "Microsoft and Linkedln",
        date: "November 2024",
        image: "/photos/sertif3.png",
        proof: CertificateProof::Pdf("/certificate/certif3.pdf"),
        tags: &["AI", "Machine Learning"],
    },
    Certificate {
        title: "CCNA: Switching, Routing, and Wireless Essentials",
        issuer: "Cisco",
        date: "Januari 2025",
        image: "/photos/sertif4.png",
        proof: CertificateProof::Web(
            "https://www.credly.com/badges/a8758c5b-eb39-4dbd-adb1-257a26deb0db/public_url",
        ),
        tags: &["Network", "Cisco"],
    },
    Certificate {
        title: "IC3 Digital Literacy Certification GS6 Level 1",
        issuer: "Certiport",
        date: "Desember 2022",
        image: "/photos/sertif5.png",
        proof: CertificateProof::Web(
            "https://www.credly.com/badges/d0653c32-84bd-4a67-9785-46ad33512c7b/public_url",
        ),
        tags: &["Digital Content", "Digital Literacy"],
    },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2023 - Now",
        title: "Informatics Engineering",
        subtitle: "State Polytechnic of Semarang",
        description: "Focus on developing web and mobile applications with \
            various modern technologies.",
    },
    TimelineEntry {
        year: "2024 - Now",
        title: "Active Member",
        subtitle: "Polytechnic Computer Club (PCC)",
        description: "Participate in software development activities and \
            projects with the campus community.",
    },
    TimelineEntry {
        year: "2020 - 2023",
        title: "Multimedia",
        subtitle: "SMKN 8 Semarang",
        description: "Learn graphic design, animation, videography and web \
            development basics.",
    },
    TimelineEntry {
        year: "2021",
        title: "Photographer & Videographer Internship",
        subtitle: "Lite Studio",
        description: "Responsible for taking and editing photos and videos \
            for various client needs.",
    },
];
