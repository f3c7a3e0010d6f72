//! Fixed heuristic catalogs. Order matters: every catalog is scanned front to back and
//! earlier entries take priority.

/// Lines containing any of these (case-insensitive substring) are never treated as a name.
pub const NAME_BOILERPLATE: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "cv",
    "phone",
    "email",
    "address",
    "objective",
    "summary",
    "experience",
    "education",
    "skills",
];

/// Technical and soft skills, matched by case-insensitive substring.
/// Results are reported in this order, not in text order.
pub const SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "HTML",
    "CSS",
    "Angular",
    "Vue.js",
    "TypeScript",
    "PHP",
    "C++",
    "C#",
    ".NET",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Flutter",
    "Django",
    "Flask",
    "Spring",
    "Express",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Git",
    "Jenkins",
    "CI/CD",
    "Agile",
    "Scrum",
    "Machine Learning",
    "AI",
    "Data Science",
    "Analytics",
    "Tableau",
    "PowerBI",
    "Photoshop",
    "Illustrator",
    "Figma",
    "Sketch",
    "UI/UX",
    "Design",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
];

pub const MAX_SKILLS: usize = 10;

/// Job-title keywords, tried in order. A hit is widened to the surrounding words.
pub const TITLE_KEYWORDS: &[&str] = &[
    "Software Engineer",
    "Developer",
    "Programmer",
    "Architect",
    "Manager",
    "Director",
    "Lead",
    "Senior",
    "Junior",
    "Principal",
    "Staff",
    "Data Scientist",
    "Analyst",
    "Designer",
    "Product Manager",
    "Project Manager",
    "DevOps",
    "QA",
    "Tester",
    "Consultant",
    "Specialist",
    "Coordinator",
];

/// Titles of this many characters or more are rejected as run-on text.
pub const MAX_TITLE_CHARS: usize = 50;

/// A degree keyword, optionally required to be followed by one of `fields`.
#[derive(Debug, Clone, Copy)]
pub struct DegreeTemplate {
    /// Regex fragment for the degree keyword.
    pub degree: &'static str,
    /// Fields of study that must follow the keyword in the same sentence.
    /// Empty means the keyword alone is enough.
    pub fields: &'static [&'static str],
}

const BROAD_FIELDS: &[&str] = &["Computer Science", "Engineering", "Business", "Arts", "Science"];
const TECHNICAL_FIELDS: &[&str] = &["Computer Science", "Engineering", "Business"];

pub const DEGREE_TEMPLATES: &[DegreeTemplate] = &[
    DegreeTemplate {
        degree: "Bachelor",
        fields: BROAD_FIELDS,
    },
    DegreeTemplate {
        degree: "Master",
        fields: BROAD_FIELDS,
    },
    DegreeTemplate {
        degree: "PhD",
        fields: BROAD_FIELDS,
    },
    DegreeTemplate {
        degree: r"B\.?S\.?",
        fields: TECHNICAL_FIELDS,
    },
    DegreeTemplate {
        degree: r"M\.?S\.?",
        fields: TECHNICAL_FIELDS,
    },
    DegreeTemplate {
        degree: "MBA",
        fields: &[],
    },
];

impl DegreeTemplate {
    /// Case-insensitive pattern capturing the degree up to the end of its sentence.
    pub fn pattern(&self) -> String {
        if self.fields.is_empty() {
            return format!(r"(?i)({}[^.]*)", self.degree);
        }
        let fields = self
            .fields
            .iter()
            .map(|f| regex::escape(f))
            .collect::<Vec<_>>()
            .join("|");
        format!(r"(?i)({}[^.]*?(?:{})[^.]*)", self.degree, fields)
    }
}

/// Fields counted before the summary is attempted.
pub const SUMMARY_MIN_FIELDS: usize = 3;

/// Skills quoted in the summary sentence.
pub const SUMMARY_SKILLS: usize = 3;
